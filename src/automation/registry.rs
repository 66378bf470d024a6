//! Automation Registry.
//!
//! Tracks which participants have live draw handlers. A participant is
//! keyed by its owner identity and holds at most one [`Subscription`]:
//! a combat-start handler and a turn-change handler registered with the
//! [`EventRouter`]. Activating an already active participant changes
//! nothing, so repeated panel opens never double the draws.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ids::{ActorId, ConfigId};

use super::event::EventKind;
use super::router::{EventRouter, HandlerId};

/// Live binding from an owner identity to its two handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub owner: ActorId,
    pub config_id: ConfigId,
    pub combat_start: HandlerId,
    pub turn_change: HandlerId,
}

/// Result of [`AutomationRegistry::activate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    pub already_active: bool,
}

/// Per-owner subscription bookkeeping.
///
/// ```
/// use card_hud::automation::{AutomationRegistry, EventRouter};
/// use card_hud::core::{ActorId, ConfigId};
///
/// let mut router = EventRouter::new();
/// let mut registry = AutomationRegistry::new();
/// let owner = ActorId::new("Actor.r");
/// let config = ConfigId::new("ranger");
///
/// assert!(!registry.activate(&owner, &config, &mut router).already_active);
/// assert!(registry.activate(&owner, &config, &mut router).already_active);
/// assert_eq!(router.len(), 2);
///
/// registry.deactivate(&owner, &mut router);
/// assert!(router.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomationRegistry {
    subscriptions: FxHashMap<ActorId, Subscription>,
}

impl AutomationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `owner` unless it already is.
    pub fn activate(
        &mut self,
        owner: &ActorId,
        config_id: &ConfigId,
        router: &mut EventRouter,
    ) -> Activation {
        if let Some(existing) = self.subscriptions.get(owner) {
            log::info!(
                "automation already active for {owner} ({}), not subscribing again",
                existing.config_id
            );
            return Activation {
                already_active: true,
            };
        }

        let combat_start = router.register(EventKind::CombatStarted, owner.clone(), config_id.clone());
        let turn_change = router.register(EventKind::TurnChanged, owner.clone(), config_id.clone());
        self.subscriptions.insert(
            owner.clone(),
            Subscription {
                owner: owner.clone(),
                config_id: config_id.clone(),
                combat_start,
                turn_change,
            },
        );
        log::info!("automation activated for {owner} ({config_id})");

        Activation {
            already_active: false,
        }
    }

    /// Unsubscribe `owner`. No-op when it is not active.
    pub fn deactivate(&mut self, owner: &ActorId, router: &mut EventRouter) -> Option<Subscription> {
        let subscription = self.subscriptions.remove(owner)?;
        router.unregister(subscription.combat_start);
        router.unregister(subscription.turn_change);
        log::info!("automation removed for {owner}");
        Some(subscription)
    }

    /// Unsubscribe every owner. Returns how many were active.
    pub fn deactivate_all(&mut self, router: &mut EventRouter) -> usize {
        let owners: Vec<ActorId> = self.subscriptions.keys().cloned().collect();
        for owner in &owners {
            self.deactivate(owner, router);
        }
        owners.len()
    }

    #[must_use]
    pub fn is_active(&self, owner: &ActorId) -> bool {
        self.subscriptions.contains_key(owner)
    }

    #[must_use]
    pub fn get(&self, owner: &ActorId) -> Option<&Subscription> {
        self.subscriptions.get(owner)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
