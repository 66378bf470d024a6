//! In-memory pile store.
//!
//! A self-contained host for the engine: piles live in a map keyed by
//! reference, card ids come from a counter, shuffles use a seeded RNG.
//! Used by tests and by hosts that keep piles in process.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardData};
use crate::core::error::{HudError, HudResult};
use crate::core::ids::{CardId, PileRef};
use crate::core::rng::ShuffleRng;

use super::pile::Pile;
use super::store::PileStore;

/// Pile store backed by process memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryPileStore {
    piles: FxHashMap<PileRef, Pile>,
    rng: ShuffleRng,
    next_card: u64,
}

impl MemoryPileStore {
    /// Create an empty store whose shuffles are seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            piles: FxHashMap::default(),
            rng: ShuffleRng::new(seed),
            next_card: 1,
        }
    }

    /// Register an empty pile under `reference`.
    pub fn add_pile(&mut self, reference: impl Into<PileRef>, name: impl Into<String>) {
        self.piles.insert(reference.into(), Pile::new(name));
    }

    /// Register a pile (builder pattern).
    #[must_use]
    pub fn with_pile(mut self, reference: impl Into<PileRef>, name: impl Into<String>) -> Self {
        self.add_pile(reference, name);
        self
    }

    /// Drop a pile so its reference stops resolving.
    pub fn remove_pile(&mut self, reference: &PileRef) -> Option<Pile> {
        self.piles.remove(reference)
    }

    /// Fill `pile` with one card per entry, bottom first.
    pub fn fill<I>(&mut self, pile: &PileRef, cards: I) -> HudResult<Vec<CardId>>
    where
        I: IntoIterator<Item = CardData>,
    {
        cards
            .into_iter()
            .map(|data| self.create_card(pile, data))
            .collect()
    }

    /// Direct mutable access, for hosts seeding state.
    pub fn pile_mut(&mut self, reference: &PileRef) -> Option<&mut Pile> {
        self.piles.get_mut(reference)
    }

    /// Shuffles performed across all piles.
    #[must_use]
    pub fn shuffle_count(&self) -> u64 {
        self.rng.shuffles()
    }

    fn alloc_card_id(&mut self) -> CardId {
        let id = CardId::new(format!("card-{:05}", self.next_card));
        self.next_card += 1;
        id
    }
}

impl PileStore for MemoryPileStore {
    fn resolve(&self, pile: &PileRef) -> Option<&Pile> {
        self.piles.get(pile)
    }

    fn create_card(&mut self, pile: &PileRef, data: CardData) -> HudResult<CardId> {
        if !self.piles.contains_key(pile) {
            return Err(HudError::PileNotFound(pile.clone()));
        }
        let id = self.alloc_card_id();
        let target = self
            .piles
            .get_mut(pile)
            .ok_or_else(|| HudError::PileNotFound(pile.clone()))?;
        // cards seeded through `pile_mut` may already use counter ids
        if target.contains(&id) {
            return Err(HudError::DuplicateCard {
                card: id,
                pile: pile.clone(),
            });
        }
        target.push(Card::new(id.clone(), data));
        Ok(id)
    }

    fn delete_card(&mut self, pile: &PileRef, card: &CardId) -> HudResult<Card> {
        let source = self
            .piles
            .get_mut(pile)
            .ok_or_else(|| HudError::PileNotFound(pile.clone()))?;
        source.remove(card).ok_or_else(|| HudError::CardNotFound {
            card: card.clone(),
            pile: pile.clone(),
        })
    }

    fn shuffle(&mut self, pile: &PileRef) -> HudResult<()> {
        let target = self
            .piles
            .get_mut(pile)
            .ok_or_else(|| HudError::PileNotFound(pile.clone()))?;
        target.shuffle(&mut self.rng);
        Ok(())
    }
}
