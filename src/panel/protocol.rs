//! Request/response protocol between the panel and a UI layer.
//!
//! The UI forwards user input as [`PanelCommand`]s. Commands that need more
//! input (how many cards to draw, which card to recover) come back as an
//! [`ActionOutcome::Request`]; the UI asks the user and answers with a
//! [`PanelReply`]. The engine never waits on a dialog.

use serde::{Deserialize, Serialize};

use crate::cards::CardFace;
use crate::core::ids::CardId;

/// User input forwarded by the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelCommand {
    /// "Draw" button.
    Draw,
    /// Click on a hand card.
    Discard(CardId),
    /// "Recover" button.
    Recover,
    /// "Close" button.
    Close,
    /// Collapse/expand toggle.
    ToggleCollapse,
    /// Pointer moved while dragging; pixel offsets of the top-left corner.
    Drag { left: i32, top: i32 },
    /// Drag finished.
    Release,
}

/// Input the panel needs from the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelRequest {
    /// Ask how many cards to draw.
    DrawCount { default: u32 },
    /// Ask which discarded card to recover, and how.
    RecoverySelection {
        candidates: Vec<CardFace>,
        defaults: RecoveryChoice,
    },
}

/// The user's recovery choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryChoice {
    pub card: CardId,
    /// Clear the card's drawn flag.
    pub unmark_drawn: bool,
    /// Shuffle the deck afterwards. Ignored when sending to hand.
    pub shuffle_deck: bool,
    /// Send to hand instead of deck.
    pub send_to_hand: bool,
}

impl RecoveryChoice {
    /// Recover `card` into the deck, unmarked, then shuffle.
    pub fn new(card: impl Into<CardId>) -> Self {
        Self {
            card: card.into(),
            unmark_drawn: true,
            shuffle_deck: true,
            send_to_hand: false,
        }
    }

    #[must_use]
    pub fn to_hand(mut self) -> Self {
        self.send_to_hand = true;
        self
    }

    #[must_use]
    pub fn unmark_drawn(mut self, unmark: bool) -> Self {
        self.unmark_drawn = unmark;
        self
    }

    #[must_use]
    pub fn shuffle_deck(mut self, shuffle: bool) -> Self {
        self.shuffle_deck = shuffle;
        self
    }
}

/// The UI's answer to a [`PanelRequest`]. `None` means cancelled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelReply {
    DrawCount(Option<i64>),
    Recovery(Option<RecoveryChoice>),
}

/// What a command or reply did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Panel state changed; the view is current.
    Updated,
    /// More input needed.
    Request(PanelRequest),
    /// Nothing happened (cancelled, empty selection, non-positive count).
    Unchanged,
    /// The panel was closed.
    Closed,
}
