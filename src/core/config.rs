//! Participant configuration and crate options.
//!
//! Configurations are created and edited by the host and stored in the
//! settings store as one JSON object keyed by configuration id:
//!
//! ```json
//! { "k3x9": { "name": "Ranger", "deck": "Cards.d", "hand": "Cards.h",
//!             "discard": "Cards.x", "actorId": "Actor.r",
//!             "autoDraw": true, "startDraw": true, "startAmount": 3 } }
//! ```
//!
//! A missing or `null` `startAmount` draws one card on combat start. The
//! engine only reads configurations, and always at dispatch time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{ActorId, ConfigId, PileRef};
use crate::panel::PanelPosition;

/// Combat-start amount given to a configuration created with [`ParticipantConfig::new`].
pub const NEW_CONFIG_START_AMOUNT: i64 = 3;

/// One automation target: three piles bound to an owning actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantConfig {
    /// Display name (selector label, log lines).
    pub name: String,

    /// Source of draws.
    pub deck: PileRef,

    /// Player-visible working set.
    pub hand: PileRef,

    /// Sink for played and discarded cards.
    pub discard: PileRef,

    /// Owner identity whose turns drive automatic draws.
    pub actor_id: ActorId,

    /// Draw one card each time the owner becomes the active combatant.
    pub auto_draw: bool,

    /// Draw `start_amount` cards when combat starts.
    pub start_draw: bool,

    /// Cards drawn on combat start. `None` when the stored value is missing or null.
    pub start_amount: Option<i64>,
}

impl Default for ParticipantConfig {
    fn default() -> Self {
        Self {
            name: "New Deck".to_string(),
            deck: PileRef::default(),
            hand: PileRef::default(),
            discard: PileRef::default(),
            actor_id: ActorId::default(),
            auto_draw: true,
            start_draw: true,
            start_amount: None,
        }
    }
}

impl ParticipantConfig {
    /// Create a configuration with the three piles and the owner set.
    ///
    /// Starts with both draw flags on and [`NEW_CONFIG_START_AMOUNT`].
    pub fn new(
        name: impl Into<String>,
        deck: impl Into<PileRef>,
        hand: impl Into<PileRef>,
        discard: impl Into<PileRef>,
        actor_id: impl Into<ActorId>,
    ) -> Self {
        Self {
            name: name.into(),
            deck: deck.into(),
            hand: hand.into(),
            discard: discard.into(),
            actor_id: actor_id.into(),
            start_amount: Some(NEW_CONFIG_START_AMOUNT),
            ..Self::default()
        }
    }

    /// Set the turn-draw flag (builder pattern).
    #[must_use]
    pub fn with_auto_draw(mut self, enabled: bool) -> Self {
        self.auto_draw = enabled;
        self
    }

    /// Set the combat-start draw flag and amount (builder pattern).
    #[must_use]
    pub fn with_start_draw(mut self, enabled: bool, amount: i64) -> Self {
        self.start_draw = enabled;
        self.start_amount = Some(amount);
        self
    }

    /// Cards to draw on combat start. Missing or non-positive amounts fall back to 1.
    #[must_use]
    pub fn start_draw_amount(&self) -> usize {
        match self.start_amount {
            Some(amount) if amount > 0 => usize::try_from(amount).unwrap_or(usize::MAX),
            _ => 1,
        }
    }

    /// Label used by the deck selector.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unnamed deck"
        } else {
            &self.name
        }
    }
}

/// All stored configurations, ordered by id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantConfigs(BTreeMap<ConfigId, ParticipantConfig>);

impl ParticipantConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<ConfigId>, config: ParticipantConfig) {
        self.0.insert(id.into(), config);
    }

    /// Add a configuration (builder pattern).
    #[must_use]
    pub fn with(mut self, id: impl Into<ConfigId>, config: ParticipantConfig) -> Self {
        self.insert(id, config);
        self
    }

    pub fn remove(&mut self, id: &ConfigId) -> Option<ParticipantConfig> {
        self.0.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ConfigId) -> Option<&ParticipantConfig> {
        self.0.get(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConfigId, &ParticipantConfig)> {
        self.0.iter()
    }
}

/// Crate-level options: where settings live and a few display defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudOptions {
    /// Settings namespace for both well-known keys.
    pub namespace: String,

    /// Key holding the participant configurations.
    pub configs_key: String,

    /// Key holding the last panel position.
    pub position_key: String,

    /// Position used until the user drags the panel.
    pub default_position: PanelPosition,

    /// Characters of a card name shown before truncation.
    pub name_display_len: usize,

    /// Count proposed by the draw prompt.
    pub default_draw_count: u32,

    /// Seed for in-memory shuffles.
    pub shuffle_seed: u64,
}

impl Default for HudOptions {
    fn default() -> Self {
        Self {
            namespace: "my-card-hud".to_string(),
            configs_key: "deckConfigs".to_string(),
            position_key: "panelPosition".to_string(),
            default_position: PanelPosition::default(),
            name_display_len: 9,
            default_draw_count: 1,
            shuffle_seed: 0,
        }
    }
}

impl HudOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different settings namespace (builder pattern).
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Change the truncation length of card names (builder pattern).
    #[must_use]
    pub fn with_name_display_len(mut self, len: usize) -> Self {
        self.name_display_len = len;
        self
    }

    /// Change the default panel position (builder pattern).
    #[must_use]
    pub fn with_default_position(mut self, position: PanelPosition) -> Self {
        self.default_position = position;
        self
    }

    /// Seed the in-memory shuffle RNG (builder pattern).
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = seed;
        self
    }
}
