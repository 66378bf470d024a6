//! Pile Reference Resolver: the host's side of the pile abstraction.
//!
//! The host owns every pile and every card item. The engine reaches them
//! only through [`PileStore`]: resolve a reference to a read-only view, and
//! ask for the few mutations it needs. Unresolvable references yield `None`
//! and callers check before use.

use crate::cards::{Card, CardData};
use crate::core::error::{HudError, HudResult};
use crate::core::ids::{CardId, PileRef};

use super::pile::Pile;

/// Host collaborator that resolves pile references and mutates piles.
pub trait PileStore {
    /// Resolve a reference. Missing or invalid references return `None`.
    fn resolve(&self, pile: &PileRef) -> Option<&Pile>;

    /// Create a new card item in `pile` from persisted data.
    ///
    /// The host assigns the identity; it is never the identity of the card
    /// the data was cloned from.
    fn create_card(&mut self, pile: &PileRef, data: CardData) -> HudResult<CardId>;

    /// Delete a card item from `pile`, returning what was removed.
    fn delete_card(&mut self, pile: &PileRef, card: &CardId) -> HudResult<Card>;

    /// Shuffle `pile` in place.
    fn shuffle(&mut self, pile: &PileRef) -> HudResult<()>;

    /// Deal `count` undrawn cards from the top of `from` into `to`.
    ///
    /// Dealt cards arrive marked drawn with a normalized ordering key.
    /// Fails before any mutation if either pile is unresolvable or `from`
    /// holds fewer than `count` undrawn cards. Hosts with a native bulk deal
    /// override this.
    fn deal(&mut self, from: &PileRef, to: &PileRef, count: usize) -> HudResult<Vec<CardId>> {
        let picks: Vec<Card> = {
            let deck = self
                .resolve(from)
                .ok_or_else(|| HudError::PileNotFound(from.clone()))?;
            if self.resolve(to).is_none() {
                return Err(HudError::PileNotFound(to.clone()));
            }
            let available = deck.undrawn_count();
            if available < count {
                return Err(HudError::NotEnoughCards {
                    pile: from.clone(),
                    requested: count,
                    available,
                });
            }
            deck.top_undrawn(count).into_iter().cloned().collect()
        };

        let mut dealt = Vec::with_capacity(picks.len());
        for card in picks {
            let mut data = card.data.normalized();
            data.drawn = true;
            dealt.push(self.create_card(to, data)?);
            self.delete_card(from, &card.id)?;
        }
        Ok(dealt)
    }
}
