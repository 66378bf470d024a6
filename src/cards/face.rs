//! Display projection of a card.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::ids::CardId;

/// Shown for a missing suit or value.
pub const UNKNOWN: &str = "?";

/// What the panel shows for one hand card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub id: CardId,
    pub name: String,
    pub short_name: String,
    pub img: String,
    pub suit: String,
    pub value: String,
    pub sort: i64,
}

impl CardFace {
    /// Project a card, truncating its name to `max_len` characters.
    #[must_use]
    pub fn from_card(card: &Card, max_len: usize) -> Self {
        Self {
            id: card.id.clone(),
            name: card.data.name.clone(),
            short_name: truncate_name(&card.data.name, max_len),
            img: card.data.img.clone(),
            suit: card
                .data
                .suit
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            value: card
                .data
                .value
                .map_or_else(|| UNKNOWN.to_string(), |v| v.to_string()),
            sort: card.sort_key(),
        }
    }
}

/// Cut `name` to `max_len` characters, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let mut short: String = name.chars().take(max_len).collect();
        short.push('…');
        short
    } else {
        name.to_string()
    }
}
