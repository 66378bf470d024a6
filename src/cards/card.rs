//! Cards and their persisted representation.
//!
//! A `Card` is a `CardData` payload plus the identity the owning pile gave it.
//! Migration never moves a `Card`; it clones the `CardData` into the
//! destination, which assigns a new identity, and deletes the original.
//!
//! ## Ordering key
//!
//! Hosts hand back the ordering key (`sort`) as whatever JSON they stored:
//! a number, a numeric string, or nothing at all. It stays raw in `CardData`
//! and is normalized with [`normalize_sort`] before display or write-back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ids::CardId;

/// Normalize a raw ordering key to an integer.
///
/// Integers pass through, floats and numeric strings are truncated toward
/// zero, and everything else (missing, `null`, text, booleans) becomes `0`.
///
/// ```
/// use card_hud::cards::normalize_sort;
/// use serde_json::{json, Value};
///
/// assert_eq!(normalize_sort(&Value::Null), 0);
/// assert_eq!(normalize_sort(&json!("7")), 7);
/// assert_eq!(normalize_sort(&json!(3)), 3);
/// ```
#[must_use]
pub fn normalize_sort(raw: &Value) -> i64 {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(finite_trunc))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(finite_trunc))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn finite_trunc(f: f64) -> Option<i64> {
    // `as` saturates out-of-range values
    f.is_finite().then(|| f.trunc() as i64)
}

/// Persisted representation of a card, as the host stores it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardData {
    /// Display name.
    pub name: String,

    /// Image reference.
    pub img: String,

    /// Suit attribute, if the card has one.
    pub suit: Option<String>,

    /// Value attribute, if the card has one.
    pub value: Option<i64>,

    /// Raw ordering key. See [`normalize_sort`].
    pub sort: Value,

    /// Set when the card has been dealt out of its deck.
    pub drawn: bool,
}

impl CardData {
    /// Create card data with a name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// Set the suit (builder pattern).
    #[must_use]
    pub fn with_suit(mut self, suit: impl Into<String>) -> Self {
        self.suit = Some(suit.into());
        self
    }

    /// Set the value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the raw ordering key (builder pattern).
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = sort.into();
        self
    }

    /// Normalized ordering key.
    #[must_use]
    pub fn sort_key(&self) -> i64 {
        normalize_sort(&self.sort)
    }

    /// Replace the raw ordering key with its normalized integer.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.sort = Value::from(self.sort_key());
        self
    }

    /// True when both cards would display identically.
    #[must_use]
    pub fn same_face(&self, other: &CardData) -> bool {
        self.name == other.name
            && self.img == other.img
            && self.suit == other.suit
            && self.value == other.value
    }
}

/// A card item held by a pile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Identity assigned by the owning pile.
    pub id: CardId,

    /// Persisted payload.
    #[serde(flatten)]
    pub data: CardData,
}

impl Card {
    pub fn new(id: impl Into<CardId>, data: CardData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    #[must_use]
    pub fn sort_key(&self) -> i64 {
        self.data.sort_key()
    }

    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.data.drawn
    }
}
