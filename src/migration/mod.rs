//! Card Migration Protocol.
//!
//! Moves cards between piles through a [`PileStore`](crate::piles::PileStore):
//! single-card moves (discard, recovery) via [`move_cards`], bulk draws via
//! [`deal`]. Every moved card lands with an integer ordering key.

mod protocol;

pub use protocol::{deal, move_cards, MoveOptions};
