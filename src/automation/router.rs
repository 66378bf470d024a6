//! Turn/Combat Event Router.
//!
//! The router stores draw handlers indexed by event kind. When the host
//! forwards a combat event, [`EventRouter::route`] evaluates each handler's
//! guards against the participant configuration as it is *now* and returns
//! the draws that should happen. Performing them is the coordinator's job.
//!
//! Guards, in order:
//! 1. the active combatant's owning actor is the participant's actor;
//! 2. the handler's flag is enabled (`start_draw` or `auto_draw`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::ParticipantConfigs;
use crate::core::ids::{ActorId, ConfigId};

use super::event::{CombatEvent, EventKind};

/// Unique identifier for a registered handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandlerId(pub u32);

impl HandlerId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handler({})", self.0)
    }
}

/// A registered draw handler.
///
/// Holds identities only; the configuration is looked up when an event
/// arrives so edits made while automation is active take effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    pub id: HandlerId,
    pub kind: EventKind,
    pub owner: ActorId,
    pub config_id: ConfigId,
}

/// A draw the router decided should happen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOrder {
    pub handler: HandlerId,
    pub reason: EventKind,
    pub owner: ActorId,
    pub config_id: ConfigId,
    pub count: usize,
}

/// Handlers indexed by event kind.
#[derive(Clone, Debug, Default)]
pub struct EventRouter {
    handlers: FxHashMap<HandlerId, Handler>,
    by_kind: FxHashMap<EventKind, SmallVec<[HandlerId; 4]>>,
    next_id: u32,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `kind`, returns its ID.
    pub fn register(&mut self, kind: EventKind, owner: ActorId, config_id: ConfigId) -> HandlerId {
        self.next_id += 1;
        let id = HandlerId::new(self.next_id);

        self.by_kind.entry(kind).or_default().push(id);
        self.handlers.insert(
            id,
            Handler {
                id,
                kind,
                owner,
                config_id,
            },
        );
        id
    }

    /// Unregister a handler. Unknown ids are ignored.
    pub fn unregister(&mut self, id: HandlerId) -> Option<Handler> {
        let handler = self.handlers.remove(&id)?;
        if let Some(list) = self.by_kind.get_mut(&handler.kind) {
            list.retain(|h| *h != id);
            if list.is_empty() {
                self.by_kind.remove(&handler.kind);
            }
        }
        Some(handler)
    }

    #[must_use]
    pub fn get(&self, id: HandlerId) -> Option<&Handler> {
        self.handlers.get(&id)
    }

    /// Handlers subscribed to `kind`, in registration order.
    pub fn handlers_for(&self, kind: EventKind) -> impl Iterator<Item = &Handler> + '_ {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|id| self.handlers.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Decide which draws `event` triggers.
    ///
    /// Returns one order per handler whose guards pass, in registration
    /// order. Handlers whose configuration has disappeared are skipped.
    pub fn route(&self, event: &CombatEvent, configs: &ParticipantConfigs) -> Vec<DrawOrder> {
        let Some(kind) = event.kind() else {
            return Vec::new();
        };
        let Some(active) = event.active_actor() else {
            log::debug!("{kind} without an owning actor, nothing to route");
            return Vec::new();
        };

        let mut orders = Vec::new();
        for handler in self.handlers_for(kind) {
            let Some(config) = configs.get(&handler.config_id) else {
                log::debug!("{} has no configuration {}", handler.id, handler.config_id);
                continue;
            };

            if config.actor_id.is_empty() || config.actor_id != *active {
                continue;
            }

            let count = match kind {
                EventKind::CombatStarted if config.start_draw => config.start_draw_amount(),
                EventKind::TurnChanged if config.auto_draw => 1,
                _ => continue,
            };

            orders.push(DrawOrder {
                handler: handler.id,
                reason: kind,
                owner: handler.owner.clone(),
                config_id: handler.config_id.clone(),
                count,
            });
        }
        orders
    }
}
