//! Panel integration tests.
//!
//! Drives the coordinator the way a UI would: commands in, requests out,
//! replies back in. Checks pile contents, notices and persisted settings.

use card_hud::cards::CardData;
use card_hud::coordinator::{AutomationCoordinator, EMPTY_DISCARD, NO_DECKS};
use card_hud::core::{CardId, ConfigId, HudError, HudOptions, ParticipantConfig, ParticipantConfigs, PileRef};
use card_hud::notify::{Audience, NoticeLevel, NoticeLog};
use card_hud::panel::{ActionOutcome, PanelCommand, PanelPosition, PanelReply, PanelRequest, RecoveryChoice};
use card_hud::piles::{MemoryPileStore, PileStore};
use card_hud::settings::{load_position, save_participants, MemorySettings, SettingsStore};
use serde_json::json;

type Hud = AutomationCoordinator<MemoryPileStore, MemorySettings, NoticeLog>;

fn ranger() -> ParticipantConfig {
    ParticipantConfig::new("Ranger", "deck", "hand", "discard", "Actor.r")
}

fn hud_with(configs: ParticipantConfigs) -> Hud {
    let options = HudOptions::default().with_shuffle_seed(3);
    let mut piles = MemoryPileStore::new(options.shuffle_seed)
        .with_pile("deck", "Deck")
        .with_pile("hand", "Hand")
        .with_pile("discard", "Discard");
    piles
        .fill(
            &PileRef::new("deck"),
            (1..=6).map(|i| CardData::new(format!("Card {i}")).with_sort(i)),
        )
        .unwrap();

    let mut settings = MemorySettings::new();
    save_participants(&mut settings, &options, &configs).unwrap();
    AutomationCoordinator::new(options, piles, settings, NoticeLog::new())
}

/// Coordinator with the ranger's panel already open.
fn open_hud() -> Hud {
    let mut hud = hud_with(ParticipantConfigs::new().with("ranger", ranger()));
    hud.open(&ConfigId::new("ranger")).unwrap();
    hud
}

fn ids(hud: &Hud, pile: &str) -> Vec<CardId> {
    hud.piles()
        .resolve(&PileRef::new(pile))
        .map(|p| p.cards().iter().map(|c| c.id.clone()).collect())
        .unwrap_or_default()
}

fn draw(hud: &mut Hud, count: i64) {
    hud.dispatch(PanelCommand::Draw).unwrap();
    hud.reply(PanelReply::DrawCount(Some(count))).unwrap();
}

// =============================================================================
// Selector and opening
// =============================================================================

/// With nothing configured the selector warns once and offers nothing.
#[test]
fn test_selector_warns_when_empty() {
    let mut hud = hud_with(ParticipantConfigs::new());

    assert!(hud.selector_entries().is_empty());
    assert_eq!(hud.notifier().messages(NoticeLevel::Warning), vec![NO_DECKS]);
}

/// Selector entries carry labels, with a fallback for blank names.
#[test]
fn test_selector_lists_labels() {
    let configs = ParticipantConfigs::new()
        .with("a", ranger())
        .with("b", ParticipantConfig::new("  ", "deck", "hand", "discard", "Actor.x"));
    let mut hud = hud_with(configs);

    let labels: Vec<String> = hud.selector_entries().into_iter().map(|e| e.label).collect();

    assert_eq!(labels, vec!["Ranger".to_string(), "Unnamed deck".to_string()]);
}

/// Unknown configuration ids are rejected.
#[test]
fn test_open_unknown_config() {
    let mut hud = hud_with(ParticipantConfigs::new().with("ranger", ranger()));

    let err = hud.open(&ConfigId::new("wizard")).unwrap_err();

    assert!(matches!(err, HudError::ConfigNotFound(_)));
    assert!(!hud.panel().is_open());
    assert_eq!(
        hud.notifier().messages(NoticeLevel::Error),
        vec!["Deck configuration not found."]
    );
}

/// Unreadable configurations are reported when the user picks a deck.
#[test]
fn test_open_with_unreadable_settings() {
    let mut hud = hud_with(ParticipantConfigs::new().with("ranger", ranger()));
    let options = hud.options().clone();
    hud.settings_mut()
        .set(&options.namespace, &options.configs_key, json!("not a map"))
        .unwrap();

    let err = hud.open(&ConfigId::new("ranger")).unwrap_err();

    assert!(matches!(err, HudError::Settings { .. }));
    assert!(!hud.panel().is_open());
    assert_eq!(
        hud.notifier().messages(NoticeLevel::Error),
        vec!["Deck configurations could not be read."]
    );
}

/// A hand that does not resolve keeps the panel closed and tells the user.
#[test]
fn test_open_without_hand() {
    let mut hud = hud_with(ParticipantConfigs::new().with("ranger", ranger()));
    hud.piles_mut().remove_pile(&PileRef::new("hand"));

    assert!(hud.open(&ConfigId::new("ranger")).is_err());
    assert!(!hud.panel().is_open());
    assert!(hud.registry().is_empty());
    assert_eq!(hud.notifier().messages(NoticeLevel::Error), vec!["Hand not found."]);
}

/// Opening renders the hand, title and action bar.
#[test]
fn test_open_renders_view() {
    let hud = open_hud();

    let view = hud.panel().view().unwrap();
    assert_eq!(view.title, "Ranger");
    assert!(view.cards.is_empty());
    assert_eq!(view.discard_count, Some(0));
    assert_eq!(view.position, PanelPosition::default());
}

/// Commands need an open panel.
#[test]
fn test_dispatch_when_closed() {
    let mut hud = hud_with(ParticipantConfigs::new().with("ranger", ranger()));

    let err = hud.dispatch(PanelCommand::Draw).unwrap_err();

    assert!(matches!(err, HudError::PanelClosed));
}

/// The close button closes the panel and stops automation.
#[test]
fn test_close_command() {
    let mut hud = open_hud();

    assert_eq!(hud.dispatch(PanelCommand::Close).unwrap(), ActionOutcome::Closed);
    assert!(!hud.panel().is_open());
    assert!(hud.registry().is_empty());
}

// =============================================================================
// Drawing
// =============================================================================

/// The draw button asks for a count, the reply deals it.
#[test]
fn test_draw_request_and_reply() {
    let mut hud = open_hud();

    let outcome = hud.dispatch(PanelCommand::Draw).unwrap();
    assert_eq!(outcome, ActionOutcome::Request(PanelRequest::DrawCount { default: 1 }));

    let outcome = hud.reply(PanelReply::DrawCount(Some(3))).unwrap();
    assert_eq!(outcome, ActionOutcome::Updated);
    assert_eq!(ids(&hud, "hand").len(), 3);
    assert_eq!(
        hud.panel().view().unwrap().card_names(),
        vec!["Card 4", "Card 5", "Card 6"]
    );
}

/// Zero, negative and cancelled draws change nothing.
#[test]
fn test_draw_non_positive_is_noop() {
    let mut hud = open_hud();
    let before = ids(&hud, "deck");

    for reply in [Some(0), Some(-2), None] {
        hud.dispatch(PanelCommand::Draw).unwrap();
        assert_eq!(hud.reply(PanelReply::DrawCount(reply)).unwrap(), ActionOutcome::Unchanged);
    }

    assert_eq!(ids(&hud, "deck"), before);
    assert!(ids(&hud, "hand").is_empty());
}

/// Overdrawing fails without dealing anything.
#[test]
fn test_overdraw_reports_error() {
    let mut hud = open_hud();

    hud.dispatch(PanelCommand::Draw).unwrap();
    assert!(hud.reply(PanelReply::DrawCount(Some(10))).is_err());

    assert_eq!(ids(&hud, "deck").len(), 6);
    assert!(!hud.notifier().messages(NoticeLevel::Error).is_empty());
}

/// A missing deck is reported when the draw button is pressed.
#[test]
fn test_draw_without_deck() {
    let mut hud = open_hud();
    hud.piles_mut().remove_pile(&PileRef::new("deck"));

    assert!(hud.dispatch(PanelCommand::Draw).is_err());
    assert_eq!(hud.notifier().messages(NoticeLevel::Error), vec!["Deck not found."]);
    assert!(hud.panel().pending().is_none());
}

/// Replies must answer the pending request.
#[test]
fn test_reply_protocol_errors() {
    let mut hud = open_hud();

    let err = hud.reply(PanelReply::DrawCount(Some(1))).unwrap_err();
    assert!(matches!(err, HudError::NoPendingRequest));

    hud.dispatch(PanelCommand::Draw).unwrap();
    let err = hud.reply(PanelReply::Recovery(None)).unwrap_err();
    assert!(matches!(err, HudError::UnexpectedReply));

    // still pending after the mismatch
    assert_eq!(hud.reply(PanelReply::DrawCount(Some(1))).unwrap(), ActionOutcome::Updated);
}

// =============================================================================
// Discarding
// =============================================================================

/// Clicking a hand card discards it and announces it to game masters.
#[test]
fn test_discard_announces_to_game_masters() {
    let mut hud = open_hud();
    draw(&mut hud, 2);
    let card = hud.panel().view().unwrap().cards[0].id.clone();

    let outcome = hud.dispatch(PanelCommand::Discard(card)).unwrap();

    assert_eq!(outcome, ActionOutcome::Updated);
    assert_eq!(ids(&hud, "hand").len(), 1);
    assert_eq!(ids(&hud, "discard").len(), 1);
    assert_eq!(hud.panel().view().unwrap().discard_count, Some(1));

    let announcements = &hud.notifier().announcements;
    assert_eq!(announcements.len(), 1);
    assert_eq!(announcements[0].card_name, "Card 5");
    assert_eq!(announcements[0].audience, Audience::GameMasters);
    assert_eq!(announcements[0].text(), "Card 5 was sent to Discard.");
}

/// Discarding a card that is not in the hand notifies and keeps the panel.
#[test]
fn test_discard_unknown_card() {
    let mut hud = open_hud();

    let err = hud.dispatch(PanelCommand::Discard(CardId::new("ghost"))).unwrap_err();

    assert!(matches!(err, HudError::CardNotFound { .. }));
    assert_eq!(hud.notifier().messages(NoticeLevel::Error), vec!["Card not found!"]);
    assert!(hud.panel().is_open());
    assert!(hud.notifier().announcements.is_empty());
}

// =============================================================================
// Recovery
// =============================================================================

/// Discard one card and return the coordinator ready for recovery.
fn hud_with_discard() -> (Hud, CardId) {
    let mut hud = open_hud();
    draw(&mut hud, 1);
    let card = ids(&hud, "hand")[0].clone();
    hud.dispatch(PanelCommand::Discard(card)).unwrap();
    let discarded = ids(&hud, "discard")[0].clone();
    (hud, discarded)
}

/// Recovery on an empty discard warns and asks nothing.
#[test]
fn test_recover_empty_discard_warns() {
    let mut hud = open_hud();

    assert_eq!(hud.dispatch(PanelCommand::Recover).unwrap(), ActionOutcome::Unchanged);
    assert_eq!(hud.notifier().messages(NoticeLevel::Warning), vec![EMPTY_DISCARD]);
    assert!(hud.panel().pending().is_none());
}

/// The recovery request lists discarded cards and defaults to the first.
#[test]
fn test_recover_request_lists_candidates() {
    let (mut hud, discarded) = hud_with_discard();

    let outcome = hud.dispatch(PanelCommand::Recover).unwrap();

    let ActionOutcome::Request(PanelRequest::RecoverySelection { candidates, defaults }) = outcome else {
        panic!("expected a recovery selection, got {outcome:?}");
    };
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, discarded);
    assert_eq!(defaults, RecoveryChoice::new(discarded));
}

/// Recovering to the deck unmarks and shuffles by default.
#[test]
fn test_recover_to_deck_shuffles() {
    let (mut hud, discarded) = hud_with_discard();
    let shuffles = hud.piles().shuffle_count();

    hud.dispatch(PanelCommand::Recover).unwrap();
    let outcome = hud
        .reply(PanelReply::Recovery(Some(RecoveryChoice::new(discarded))))
        .unwrap();

    assert_eq!(outcome, ActionOutcome::Updated);
    assert!(ids(&hud, "discard").is_empty());
    assert_eq!(ids(&hud, "deck").len(), 6);
    assert_eq!(hud.piles().shuffle_count(), shuffles + 1);
    let deck = hud.piles().resolve(&PileRef::new("deck")).unwrap();
    assert!(deck.cards().iter().all(|c| !c.is_drawn()));
    assert_eq!(
        hud.notifier().messages(NoticeLevel::Info),
        vec!["Card \"Card 6\" returned to the deck."]
    );
}

/// Recovering to the hand unmarks on request and never shuffles.
#[test]
fn test_recover_to_hand_unmarks_without_shuffle() {
    let (mut hud, discarded) = hud_with_discard();
    let shuffles = hud.piles().shuffle_count();

    hud.dispatch(PanelCommand::Recover).unwrap();
    let choice = RecoveryChoice::new(discarded).to_hand().unmark_drawn(true).shuffle_deck(true);
    hud.reply(PanelReply::Recovery(Some(choice))).unwrap();

    assert_eq!(hud.piles().shuffle_count(), shuffles);
    let hand = hud.piles().resolve(&PileRef::new("hand")).unwrap();
    assert_eq!(hand.len(), 1);
    assert!(!hand.cards()[0].is_drawn());
    assert_eq!(hud.panel().view().unwrap().card_names(), vec!["Card 6"]);
    assert_eq!(
        hud.notifier().messages(NoticeLevel::Info),
        vec!["Card \"Card 6\" returned to the hand."]
    );
}

/// Keeping the drawn flag is honoured.
#[test]
fn test_recover_keeps_drawn_flag() {
    let (mut hud, discarded) = hud_with_discard();

    hud.dispatch(PanelCommand::Recover).unwrap();
    let choice = RecoveryChoice::new(discarded).to_hand().unmark_drawn(false);
    hud.reply(PanelReply::Recovery(Some(choice))).unwrap();

    let hand = hud.piles().resolve(&PileRef::new("hand")).unwrap();
    assert!(hand.cards()[0].is_drawn());
}

/// A stale selection is reported and nothing moves.
#[test]
fn test_recover_missing_card() {
    let (mut hud, _) = hud_with_discard();

    hud.dispatch(PanelCommand::Recover).unwrap();
    let err = hud
        .reply(PanelReply::Recovery(Some(RecoveryChoice::new("ghost"))))
        .unwrap_err();

    assert!(matches!(err, HudError::CardNotFound { .. }));
    assert_eq!(ids(&hud, "discard").len(), 1);
    assert_eq!(
        hud.notifier().messages(NoticeLevel::Error),
        vec!["Card not found in the discard pile."]
    );
}

/// An unresolvable destination is reported and the discard is untouched.
#[test]
fn test_recover_missing_destination() {
    let (mut hud, discarded) = hud_with_discard();
    hud.dispatch(PanelCommand::Recover).unwrap();
    hud.piles_mut().remove_pile(&PileRef::new("deck"));

    let err = hud
        .reply(PanelReply::Recovery(Some(RecoveryChoice::new(discarded))))
        .unwrap_err();

    assert!(matches!(err, HudError::PileNotFound(_)));
    assert_eq!(ids(&hud, "discard").len(), 1);
    assert_eq!(hud.notifier().messages(NoticeLevel::Error), vec!["Destination not found."]);
}

// =============================================================================
// Layout
// =============================================================================

/// Dragging moves the panel; releasing persists the position for next time.
#[test]
fn test_drag_release_persists_position() {
    let mut hud = open_hud();

    hud.dispatch(PanelCommand::Drag { left: 100, top: 200 }).unwrap();
    hud.dispatch(PanelCommand::Release).unwrap();

    let expected = PanelPosition::from_pixels(100, 200);
    let stored = load_position(hud.settings(), hud.options());
    assert_eq!(stored, expected);

    hud.close();
    hud.open(&ConfigId::new("ranger")).unwrap();
    assert_eq!(hud.panel().view().unwrap().position, expected);
}

/// Dragging without releasing does not persist anything.
#[test]
fn test_drag_without_release() {
    let mut hud = open_hud();

    hud.dispatch(PanelCommand::Drag { left: 5, top: 5 }).unwrap();

    assert_eq!(load_position(hud.settings(), hud.options()), PanelPosition::default());
}

/// The collapsed state survives re-renders.
#[test]
fn test_collapse_survives_refresh() {
    let mut hud = open_hud();

    hud.dispatch(PanelCommand::ToggleCollapse).unwrap();
    draw(&mut hud, 1);

    assert!(hud.panel().is_collapsed());
    assert!(hud.panel().view().unwrap().collapsed);
}

/// Long names are shortened on the card face.
#[test]
fn test_long_names_are_truncated() {
    let mut hud = open_hud();
    hud.piles_mut()
        .fill(
            &PileRef::new("deck"),
            [CardData::new("Magnificent Fireball").with_sort(99)],
        )
        .unwrap();

    draw(&mut hud, 1);

    let face = &hud.panel().view().unwrap().cards[0];
    assert_eq!(face.name, "Magnificent Fireball");
    assert_eq!(face.short_name, "Magnifice…");
    assert_eq!(face.suit, "?");
}
