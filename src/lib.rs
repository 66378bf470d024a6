//! # card-hud
//!
//! Per-participant card automation for turn-based tabletop combat.
//!
//! Each tracked participant owns a deck, a hand and a discard pile. Cards
//! move between them automatically when combat starts and whenever the
//! participant becomes the active combatant, or manually through a floating
//! panel.
//!
//! ## Design Principles
//!
//! 1. **Host-owned data**: piles, settings and chat belong to the host and
//!    are reached only through the `PileStore`, `SettingsStore` and
//!    `Notifier` traits.
//!
//! 2. **Explicit ownership**: no global registries. An
//!    `AutomationCoordinator` is constructed at startup and owns the
//!    automation registry, the event router and the single panel.
//!
//! 3. **No waiting on dialogs**: the panel answers user input with typed
//!    requests and takes typed replies, so the whole core is synchronous.
//!
//! ## Modules
//!
//! - `core`: identifiers, participant configuration, options, errors, RNG
//! - `cards`: card data, ordering-key normalization, display faces
//! - `piles`: piles and the host pile store
//! - `migration`: moves and deals between piles
//! - `automation`: combat events, handler routing, subscriptions
//! - `panel`: panel state machine and UI protocol
//! - `settings`: persisted configuration and panel position
//! - `notify`: user-visible notices and chat announcements
//! - `coordinator`: the owner of it all

pub mod core;
pub mod cards;
pub mod piles;
pub mod migration;
pub mod automation;
pub mod panel;
pub mod settings;
pub mod notify;
pub mod coordinator;

// Re-export commonly used types
pub use crate::core::{
    ActorId, CardId, ConfigId, PileRef, TokenId,
    HudOptions, ParticipantConfig, ParticipantConfigs,
    HudError, HudResult, ShuffleRng,
};

pub use crate::cards::{normalize_sort, Card, CardData, CardFace};

pub use crate::piles::{MemoryPileStore, Pile, PileStore};

pub use crate::migration::{deal, move_cards, MoveOptions};

pub use crate::automation::{
    Activation, AutomationRegistry, CombatEvent, CombatState, Combatant,
    EventKind, EventRouter, Subscription,
};

pub use crate::panel::{
    ActionOutcome, PanelCommand, PanelController, PanelPosition, PanelReply,
    PanelRequest, PanelView, RecoveryChoice,
};

pub use crate::settings::{MemorySettings, SettingsStore};

pub use crate::notify::{CardMovedAnnouncement, Notice, NoticeLevel, NoticeLog, Notifier};

pub use crate::coordinator::{AutomationCoordinator, DrawOutcome, DrawReport, SelectorEntry};
