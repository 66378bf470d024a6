//! Card migration between piles.
//!
//! Pile items belong to the host, so a card cannot change piles in place.
//! A move clones the card's persisted data into the destination (which
//! assigns a new identity) and then deletes the original.
//!
//! The destination insert happens first. If the source delete then fails the
//! card exists twice, which is logged and reported; the reverse order would
//! lose the card instead.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::{HudError, HudResult};
use crate::core::ids::{CardId, PileRef};
use crate::piles::PileStore;

/// Options applied to every card of a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOptions {
    /// Clear the "drawn" flag on the recreated card.
    pub unmark_drawn: bool,

    /// Shuffle the destination once all cards have arrived.
    pub shuffle_after: bool,
}

impl MoveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn unmark_drawn(mut self, unmark: bool) -> Self {
        self.unmark_drawn = unmark;
        self
    }

    #[must_use]
    pub fn shuffle_after(mut self, shuffle: bool) -> Self {
        self.shuffle_after = shuffle;
        self
    }
}

/// Move `cards` from `from` to `to`.
///
/// Both piles are resolved and every card is checked for presence before
/// anything is mutated. Repeated ids are moved once. Returns the identities
/// the destination assigned, in input order.
///
/// ```
/// use card_hud::cards::CardData;
/// use card_hud::core::PileRef;
/// use card_hud::migration::{move_cards, MoveOptions};
/// use card_hud::piles::{MemoryPileStore, PileStore};
///
/// let hand = PileRef::new("hand");
/// let discard = PileRef::new("discard");
/// let mut store = MemoryPileStore::new(1)
///     .with_pile(hand.clone(), "Hand")
///     .with_pile(discard.clone(), "Discard");
/// let ids = store.fill(&hand, [CardData::new("Ace").with_sort("4")]).unwrap();
///
/// let moved = move_cards(&mut store, &ids, &hand, &discard, MoveOptions::new()).unwrap();
///
/// assert!(store.resolve(&hand).unwrap().is_empty());
/// let card = store.resolve(&discard).unwrap().get(&moved[0]).unwrap();
/// assert_eq!(card.name(), "Ace");
/// assert_eq!(card.data.sort, serde_json::json!(4));
/// ```
pub fn move_cards<S: PileStore + ?Sized>(
    store: &mut S,
    cards: &[CardId],
    from: &PileRef,
    to: &PileRef,
    options: MoveOptions,
) -> HudResult<Vec<CardId>> {
    let payloads = {
        let source = store
            .resolve(from)
            .ok_or_else(|| HudError::PileNotFound(from.clone()))?;
        if store.resolve(to).is_none() {
            return Err(HudError::PileNotFound(to.clone()));
        }

        let mut seen = FxHashSet::default();
        let mut payloads = Vec::with_capacity(cards.len());
        for id in cards {
            if !seen.insert(id) {
                continue;
            }
            let card = source.get(id).ok_or_else(|| HudError::CardNotFound {
                card: id.clone(),
                pile: from.clone(),
            })?;
            payloads.push((id.clone(), card.data.clone()));
        }
        payloads
    };

    let mut moved = Vec::with_capacity(payloads.len());
    for (id, data) in payloads {
        let mut data = data.normalized();
        if options.unmark_drawn {
            data.drawn = false;
        }

        let created = store.create_card(to, data)?;
        if let Err(err) = store.delete_card(from, &id) {
            log::error!("card {id} copied to {to} as {created} but still in {from}: {err}");
            return Err(err);
        }
        log::debug!("moved card {id} from {from} to {to} as {created}");
        moved.push(created);
    }

    if options.shuffle_after && !moved.is_empty() {
        store.shuffle(to)?;
    }

    Ok(moved)
}

/// Deal `count` cards from the top of `deck` into `to`.
///
/// Non-positive counts are a no-op and touch nothing.
pub fn deal<S: PileStore + ?Sized>(
    store: &mut S,
    deck: &PileRef,
    to: &PileRef,
    count: i64,
) -> HudResult<Vec<CardId>> {
    if count <= 0 {
        return Ok(Vec::new());
    }
    let dealt = store.deal(deck, to, count as usize)?;
    log::debug!("dealt {} cards from {deck} to {to}", dealt.len());
    Ok(dealt)
}
