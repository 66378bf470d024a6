//! Crate error type.

use thiserror::Error;

use super::ids::{CardId, ConfigId, PileRef};

/// Errors raised by pile resolution, migration, settings and the panel protocol.
#[derive(Debug, Error)]
pub enum HudError {
    #[error("pile {0} could not be resolved")]
    PileNotFound(PileRef),

    #[error("card {card} is not in pile {pile}")]
    CardNotFound { card: CardId, pile: PileRef },

    #[error("card {card} already exists in pile {pile}")]
    DuplicateCard { card: CardId, pile: PileRef },

    #[error("pile {pile} holds {available} drawable cards, {requested} requested")]
    NotEnoughCards {
        pile: PileRef,
        requested: usize,
        available: usize,
    },

    #[error("no participant configuration with id {0}")]
    ConfigNotFound(ConfigId),

    #[error("host operation failed: {0}")]
    Host(String),

    #[error("setting {key} is malformed: {source}")]
    Settings {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no panel is open")]
    PanelClosed,

    #[error("the panel is not waiting for a reply")]
    NoPendingRequest,

    #[error("reply does not answer the pending request")]
    UnexpectedReply,
}

/// Result alias used across the crate.
pub type HudResult<T> = Result<T, HudError>;
