//! Interactive Panel Controller.
//!
//! Behavioral state of the single floating panel: which participant it
//! shows, collapsed flag, position, the pending user request, and the last
//! rendered view. Every pile mutation is followed by a re-render that
//! resolves the hand again, so the view always reflects the store.

use crate::cards::CardFace;
use crate::core::config::{HudOptions, ParticipantConfig};
use crate::core::error::{HudError, HudResult};
use crate::core::ids::{ActorId, CardId, ConfigId};
use crate::migration::{self, MoveOptions};
use crate::notify::{Audience, CardMovedAnnouncement};
use crate::piles::PileStore;

use super::position::PanelPosition;
use super::protocol::{PanelReply, PanelRequest, RecoveryChoice};
use super::view::{PanelView, ACTION_BAR};

/// Destination label of discard announcements.
pub const DISCARD_LABEL: &str = "Discard";

/// Which reply the panel is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingKind {
    DrawCount,
    Recovery,
}

/// Result of a successful recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovered {
    pub card_name: String,
    pub new_id: CardId,
    pub to_hand: bool,
}

#[derive(Clone, Debug)]
struct OpenPanel {
    config_id: ConfigId,
    config: ParticipantConfig,
    pending: Option<PendingKind>,
    view: PanelView,
}

/// State machine of the floating panel.
#[derive(Clone, Debug)]
pub struct PanelController {
    open: Option<OpenPanel>,
    position: PanelPosition,
    collapsed: bool,
    renders: u64,
    name_len: usize,
}

impl PanelController {
    pub fn new(options: &HudOptions) -> Self {
        Self {
            open: None,
            position: options.default_position.clone(),
            collapsed: false,
            renders: 0,
            name_len: options.name_display_len,
        }
    }

    /// Show `config`'s hand, replacing any open panel.
    ///
    /// Fails without touching the current panel if the hand does not resolve.
    pub fn open<S: PileStore + ?Sized>(
        &mut self,
        config_id: ConfigId,
        config: ParticipantConfig,
        position: PanelPosition,
        store: &S,
    ) -> HudResult<()> {
        if store.resolve(&config.hand).is_none() {
            return Err(HudError::PileNotFound(config.hand.clone()));
        }
        if let Some(previous) = self.open.take() {
            log::debug!("replacing panel of {}", previous.config.name);
        }

        self.position = position;
        self.collapsed = false;
        let view = self.build_view(&config_id, &config, store)?;
        self.renders += 1;
        log::info!("panel opened for {}", config.name);

        self.open = Some(OpenPanel {
            config_id,
            config,
            pending: None,
            view,
        });
        Ok(())
    }

    /// Tear the panel down. Returns what it was showing.
    pub fn close(&mut self) -> Option<(ConfigId, ParticipantConfig)> {
        let open = self.open.take()?;
        log::info!("panel closed for {}", open.config.name);
        Some((open.config_id, open.config))
    }

    /// Re-resolve the piles and re-render, keeping position and collapse.
    pub fn refresh<S: PileStore + ?Sized>(&mut self, store: &S) -> HudResult<()> {
        let view = {
            let open = self.open.as_ref().ok_or(HudError::PanelClosed)?;
            self.build_view(&open.config_id, &open.config, store)?
        };
        if let Some(open) = self.open.as_mut() {
            open.view = view;
        }
        self.renders += 1;
        Ok(())
    }

    fn build_view<S: PileStore + ?Sized>(
        &self,
        config_id: &ConfigId,
        config: &ParticipantConfig,
        store: &S,
    ) -> HudResult<PanelView> {
        let hand = store
            .resolve(&config.hand)
            .ok_or_else(|| HudError::PileNotFound(config.hand.clone()))?;

        Ok(PanelView {
            config_id: config_id.clone(),
            title: config.label().to_string(),
            cards: hand
                .sorted()
                .into_iter()
                .map(|card| CardFace::from_card(card, self.name_len))
                .collect(),
            discard_count: store.resolve(&config.discard).map(|p| p.len()),
            collapsed: self.collapsed,
            position: self.position.clone(),
            actions: ACTION_BAR,
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn config_id(&self) -> Option<&ConfigId> {
        self.open.as_ref().map(|o| &o.config_id)
    }

    #[must_use]
    pub fn config(&self) -> Option<&ParticipantConfig> {
        self.open.as_ref().map(|o| &o.config)
    }

    /// Owner identity of the participant on display.
    #[must_use]
    pub fn owner(&self) -> Option<&ActorId> {
        self.open.as_ref().map(|o| &o.config.actor_id)
    }

    #[must_use]
    pub fn view(&self) -> Option<&PanelView> {
        self.open.as_ref().map(|o| &o.view)
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingKind> {
        self.open.as_ref().and_then(|o| o.pending)
    }

    #[must_use]
    pub fn position(&self) -> &PanelPosition {
        &self.position
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Renders performed since creation.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn open_mut(&mut self) -> HudResult<&mut OpenPanel> {
        self.open.as_mut().ok_or(HudError::PanelClosed)
    }

    /// Flip collapsed/expanded. Returns the new collapsed flag.
    pub fn toggle_collapse(&mut self) -> HudResult<bool> {
        let collapsed = !self.collapsed;
        self.open_mut()?.view.collapsed = collapsed;
        self.collapsed = collapsed;
        Ok(collapsed)
    }

    /// Follow the pointer during a drag.
    pub fn drag_to(&mut self, left: i32, top: i32) -> HudResult<()> {
        let position = PanelPosition::from_pixels(left, top);
        self.open_mut()?.view.position = position.clone();
        self.position = position;
        Ok(())
    }

    /// Ask for a draw count. Fails if the deck does not resolve.
    pub fn request_draw<S: PileStore + ?Sized>(
        &mut self,
        store: &S,
        default: u32,
    ) -> HudResult<PanelRequest> {
        let open = self.open_mut()?;
        if store.resolve(&open.config.deck).is_none() {
            return Err(HudError::PileNotFound(open.config.deck.clone()));
        }
        open.pending = Some(PendingKind::DrawCount);
        Ok(PanelRequest::DrawCount { default })
    }

    /// Ask which discarded card to recover.
    ///
    /// Returns `None` when the discard is empty; nothing is left pending.
    pub fn request_recovery<S: PileStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> HudResult<Option<PanelRequest>> {
        let name_len = self.name_len;
        let open = self.open_mut()?;
        let discard = store
            .resolve(&open.config.discard)
            .ok_or_else(|| HudError::PileNotFound(open.config.discard.clone()))?;

        let Some(first) = discard.cards().first() else {
            open.pending = None;
            return Ok(None);
        };

        let defaults = RecoveryChoice::new(first.id.clone());
        let candidates = discard
            .cards()
            .iter()
            .map(|card| CardFace::from_card(card, name_len))
            .collect();
        open.pending = Some(PendingKind::Recovery);
        Ok(Some(PanelRequest::RecoverySelection {
            candidates,
            defaults,
        }))
    }

    /// Consume the pending request if `reply` answers it.
    ///
    /// A mismatched reply leaves the request pending.
    pub fn take_pending(&mut self, reply: &PanelReply) -> HudResult<PendingKind> {
        let open = self.open_mut()?;
        let expected = open.pending.ok_or(HudError::NoPendingRequest)?;
        match (expected, reply) {
            (PendingKind::DrawCount, PanelReply::DrawCount(_))
            | (PendingKind::Recovery, PanelReply::Recovery(_)) => {
                open.pending = None;
                Ok(expected)
            }
            _ => Err(HudError::UnexpectedReply),
        }
    }

    /// Deal `count` cards from deck to hand. Non-positive counts do nothing.
    pub fn draw<S: PileStore + ?Sized>(&mut self, store: &mut S, count: i64) -> HudResult<usize> {
        let (deck, hand) = {
            let open = self.open_mut()?;
            (open.config.deck.clone(), open.config.hand.clone())
        };

        let dealt = migration::deal(store, &deck, &hand, count)?;
        if !dealt.is_empty() {
            self.refresh(&*store)?;
        }
        Ok(dealt.len())
    }

    /// Send one hand card to the discard.
    pub fn discard<S: PileStore + ?Sized>(
        &mut self,
        store: &mut S,
        card: &CardId,
    ) -> HudResult<CardMovedAnnouncement> {
        let (hand, discard) = {
            let open = self.open_mut()?;
            (open.config.hand.clone(), open.config.discard.clone())
        };

        let (card_name, img) = {
            let pile = store
                .resolve(&hand)
                .ok_or_else(|| HudError::PileNotFound(hand.clone()))?;
            let found = pile.get(card).ok_or_else(|| HudError::CardNotFound {
                card: card.clone(),
                pile: hand.clone(),
            })?;
            (found.data.name.clone(), found.data.img.clone())
        };

        migration::move_cards(store, std::slice::from_ref(card), &hand, &discard, MoveOptions::new())?;
        self.refresh(&*store)?;

        Ok(CardMovedAnnouncement {
            card_name,
            img,
            destination: DISCARD_LABEL.to_string(),
            audience: Audience::GameMasters,
        })
    }

    /// Move a discarded card back to the hand or the deck.
    ///
    /// The deck is shuffled only when the card goes to the deck and the
    /// choice asks for it.
    pub fn recover<S: PileStore + ?Sized>(
        &mut self,
        store: &mut S,
        choice: &RecoveryChoice,
    ) -> HudResult<Recovered> {
        let (discard, destination) = {
            let open = self.open_mut()?;
            let destination = if choice.send_to_hand {
                open.config.hand.clone()
            } else {
                open.config.deck.clone()
            };
            (open.config.discard.clone(), destination)
        };

        let card_name = {
            let pile = store
                .resolve(&discard)
                .ok_or_else(|| HudError::PileNotFound(discard.clone()))?;
            pile.get(&choice.card)
                .ok_or_else(|| HudError::CardNotFound {
                    card: choice.card.clone(),
                    pile: discard.clone(),
                })?
                .data
                .name
                .clone()
        };
        if store.resolve(&destination).is_none() {
            return Err(HudError::PileNotFound(destination));
        }

        let options = MoveOptions::new()
            .unmark_drawn(choice.unmark_drawn)
            .shuffle_after(choice.shuffle_deck && !choice.send_to_hand);
        let moved = migration::move_cards(
            store,
            std::slice::from_ref(&choice.card),
            &discard,
            &destination,
            options,
        )?;
        self.refresh(&*store)?;

        Ok(Recovered {
            card_name,
            new_id: moved.into_iter().next().unwrap_or_default(),
            to_hand: choice.send_to_hand,
        })
    }
}
