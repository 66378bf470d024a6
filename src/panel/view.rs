//! Rendered panel contents.

use serde::{Deserialize, Serialize};

use crate::cards::CardFace;
use crate::core::ids::{CardId, ConfigId};

use super::position::PanelPosition;

/// Buttons of the action bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelButton {
    Draw,
    Recover,
    Close,
}

/// The action bar, in display order.
pub const ACTION_BAR: [PanelButton; 3] = [PanelButton::Draw, PanelButton::Recover, PanelButton::Close];

/// Everything the UI needs to draw the panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    pub config_id: ConfigId,
    pub title: String,
    /// Hand cards ordered by ordering key.
    pub cards: Vec<CardFace>,
    /// Cards in the discard, if it resolves.
    pub discard_count: Option<usize>,
    pub collapsed: bool,
    pub position: PanelPosition,
    pub actions: [PanelButton; 3],
}

impl PanelView {
    /// Face of a hand card by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&CardFace> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Hand card names in display order.
    #[must_use]
    pub fn card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name.as_str()).collect()
    }
}
