//! Cards: persisted data, pile-held items and their display projection.
//!
//! ## Key Types
//!
//! - `CardData`: what the host persists for a card (name, image, suit, value, raw ordering key)
//! - `Card`: a `CardData` plus the identity its current pile assigned
//! - `CardFace`: display projection used by the panel

pub mod card;
pub mod face;

pub use card::{normalize_sort, Card, CardData};
pub use face::{truncate_name, CardFace, UNKNOWN};
