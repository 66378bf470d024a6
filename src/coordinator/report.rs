//! Values the coordinator hands back to its host.

use crate::automation::EventKind;
use crate::core::ids::{ActorId, CardId, ConfigId};

/// One line of the deck selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorEntry {
    pub id: ConfigId,
    pub label: String,
}

/// How an automatic draw ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Cards landed in the hand under these ids.
    Drawn(Vec<CardId>),
    /// Deck or hand did not resolve; nothing was touched.
    Skipped,
    /// The deal failed.
    Failed(String),
}

/// One automatic draw attempted while handling an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawReport {
    pub config_id: ConfigId,
    pub owner: ActorId,
    pub reason: EventKind,
    pub outcome: DrawOutcome,
}

impl DrawReport {
    /// Cards drawn, zero unless the draw succeeded.
    #[must_use]
    pub fn drawn(&self) -> usize {
        match &self.outcome {
            DrawOutcome::Drawn(ids) => ids.len(),
            _ => 0,
        }
    }
}
