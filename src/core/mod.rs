//! Core types: identifiers, participant configuration, options, errors, RNG.
//!
//! Everything here is a plain value type. The collaborators that own live
//! state (pile store, settings store, notifier) are traits in their own
//! modules.

pub mod ids;
pub mod config;
pub mod error;
pub mod rng;

pub use ids::{ActorId, CardId, ConfigId, PileRef, TokenId};
pub use config::{HudOptions, ParticipantConfig, ParticipantConfigs};
pub use error::{HudError, HudResult};
pub use rng::ShuffleRng;
