//! The automation coordinator.

use crate::automation::{
    Activation, AutomationRegistry, CombatEvent, DrawOrder, EventRouter,
};
use crate::core::config::{HudOptions, ParticipantConfig, ParticipantConfigs};
use crate::core::error::{HudError, HudResult};
use crate::core::ids::{CardId, ConfigId};
use crate::migration;
use crate::notify::Notifier;
use crate::panel::{ActionOutcome, PanelCommand, PanelController, PanelReply, RecoveryChoice};
use crate::piles::PileStore;
use crate::settings::{self, SettingsStore};

use super::report::{DrawOutcome, DrawReport, SelectorEntry};

/// Warning shown when the selector has nothing to offer.
pub const NO_DECKS: &str = "No deck configured!";

/// Warning shown when recovery is asked for on an empty discard.
pub const EMPTY_DISCARD: &str = "No cards in the discard pile.";

/// Owner of all automation state and of the single panel.
///
/// Constructed once at application startup with the host collaborators and
/// passed by reference to whatever needs it. Combat events go to
/// [`handle_event`](Self::handle_event); UI input goes to
/// [`dispatch`](Self::dispatch) and [`reply`](Self::reply).
///
/// ```
/// use card_hud::cards::CardData;
/// use card_hud::coordinator::AutomationCoordinator;
/// use card_hud::core::{ConfigId, HudOptions, ParticipantConfig, ParticipantConfigs};
/// use card_hud::notify::NoticeLog;
/// use card_hud::piles::MemoryPileStore;
/// use card_hud::settings::{save_participants, MemorySettings};
///
/// let options = HudOptions::default();
/// let mut piles = MemoryPileStore::new(1)
///     .with_pile("deck", "Deck")
///     .with_pile("hand", "Hand")
///     .with_pile("discard", "Discard");
/// piles.fill(&"deck".into(), (0..5).map(|i| CardData::new(format!("Card {i}")))).unwrap();
///
/// let mut settings = MemorySettings::new();
/// let configs = ParticipantConfigs::new().with(
///     "ranger",
///     ParticipantConfig::new("Ranger", "deck", "hand", "discard", "Actor.r"),
/// );
/// save_participants(&mut settings, &options, &configs).unwrap();
///
/// let mut hud = AutomationCoordinator::new(options, piles, settings, NoticeLog::new());
/// let activation = hud.open(&ConfigId::new("ranger")).unwrap();
/// assert!(!activation.already_active);
/// assert!(hud.panel().is_open());
/// ```
pub struct AutomationCoordinator<P, C, N> {
    options: HudOptions,
    piles: P,
    settings: C,
    notifier: N,
    registry: AutomationRegistry,
    router: EventRouter,
    panel: PanelController,
}

impl<P: PileStore, C: SettingsStore, N: Notifier> AutomationCoordinator<P, C, N> {
    pub fn new(options: HudOptions, piles: P, settings: C, notifier: N) -> Self {
        let panel = PanelController::new(&options);
        Self {
            options,
            piles,
            settings,
            notifier,
            registry: AutomationRegistry::new(),
            router: EventRouter::new(),
            panel,
        }
    }

    pub fn options(&self) -> &HudOptions {
        &self.options
    }

    pub fn piles(&self) -> &P {
        &self.piles
    }

    pub fn piles_mut(&mut self) -> &mut P {
        &mut self.piles
    }

    pub fn settings(&self) -> &C {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut C {
        &mut self.settings
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn registry(&self) -> &AutomationRegistry {
        &self.registry
    }

    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    pub fn panel(&self) -> &PanelController {
        &self.panel
    }

    /// Current participant configurations, read from the settings store.
    pub fn configs(&self) -> HudResult<ParticipantConfigs> {
        settings::load_participants(&self.settings, &self.options)
    }

    /// Entries for the deck selector.
    ///
    /// Warns once and returns nothing when no participant is configured.
    pub fn selector_entries(&mut self) -> Vec<SelectorEntry> {
        let configs = match self.configs() {
            Ok(configs) => configs,
            Err(err) => {
                log::error!("participant configurations unreadable: {err}");
                self.notifier.error("Deck configurations could not be read.");
                return Vec::new();
            }
        };
        if configs.is_empty() {
            self.notifier.warn(NO_DECKS);
            return Vec::new();
        }

        configs
            .iter()
            .map(|(id, config)| SelectorEntry {
                id: id.clone(),
                label: config.label().to_string(),
            })
            .collect()
    }

    /// Open the panel for a configured participant and activate its automation.
    ///
    /// An open panel is replaced. Its participant's automation stays active
    /// until that participant's panel is explicitly closed.
    pub fn open(&mut self, config_id: &ConfigId) -> HudResult<Activation> {
        let configs = match self.configs() {
            Ok(configs) => configs,
            Err(err) => return Err(self.report_failure("Deck configurations could not be read.", err)),
        };
        let Some(config) = configs.get(config_id).cloned() else {
            let err = HudError::ConfigNotFound(config_id.clone());
            return Err(self.report_failure("Deck configuration not found.", err));
        };

        let position = settings::load_position(&self.settings, &self.options);
        if let Err(err) = self
            .panel
            .open(config_id.clone(), config.clone(), position, &self.piles)
        {
            log::warn!("cannot open panel for {}: {err}", config.name);
            self.notifier.error("Hand not found.");
            return Err(err);
        }

        Ok(self
            .registry
            .activate(&config.actor_id, config_id, &mut self.router))
    }

    /// Close the panel and deactivate its participant's automation.
    ///
    /// Returns false when no panel was open.
    pub fn close(&mut self) -> bool {
        let Some((_, config)) = self.panel.close() else {
            return false;
        };
        self.registry.deactivate(&config.actor_id, &mut self.router);
        true
    }

    /// Re-render the open panel from the store.
    pub fn refresh(&mut self) -> HudResult<()> {
        self.panel.refresh(&self.piles)
    }

    /// Close the panel and drop every subscription.
    pub fn shutdown(&mut self) {
        self.panel.close();
        let dropped = self.registry.deactivate_all(&mut self.router);
        log::info!("automation shut down, {dropped} subscription(s) dropped");
    }

    /// Handle a combat event. Never fails: problems are logged and reported.
    pub fn handle_event(&mut self, event: &CombatEvent) -> Vec<DrawReport> {
        if self.router.is_empty() {
            return Vec::new();
        }
        let configs = match self.configs() {
            Ok(configs) => configs,
            Err(err) => {
                log::error!("automation skipped, configurations unreadable: {err}");
                return Vec::new();
            }
        };

        let orders = self.router.route(event, &configs);
        let mut reports = Vec::with_capacity(orders.len());
        for order in orders {
            let Some(config) = configs.get(&order.config_id) else {
                continue;
            };
            let outcome = self.perform_draw(config, &order);

            if matches!(outcome, DrawOutcome::Drawn(_)) && self.panel.owner() == Some(&order.owner) {
                if let Err(err) = self.panel.refresh(&self.piles) {
                    log::warn!("panel refresh after {} draw failed: {err}", order.reason);
                }
            }

            reports.push(DrawReport {
                config_id: order.config_id,
                owner: order.owner,
                reason: order.reason,
                outcome,
            });
        }
        reports
    }

    fn perform_draw(&mut self, config: &ParticipantConfig, order: &DrawOrder) -> DrawOutcome {
        if self.piles.resolve(&config.deck).is_none() || self.piles.resolve(&config.hand).is_none() {
            log::warn!(
                "{}: {} draw skipped, deck or hand does not resolve",
                config.name,
                order.reason
            );
            return DrawOutcome::Skipped;
        }

        match migration::deal(&mut self.piles, &config.deck, &config.hand, order.count as i64) {
            Ok(ids) => {
                log::info!("{}: drew {} card(s) on {}", config.name, ids.len(), order.reason);
                DrawOutcome::Drawn(ids)
            }
            Err(err) => {
                log::error!("{}: automatic draw on {} failed: {err}", config.name, order.reason);
                DrawOutcome::Failed(err.to_string())
            }
        }
    }

    /// Apply a user command to the open panel.
    pub fn dispatch(&mut self, command: PanelCommand) -> HudResult<ActionOutcome> {
        if !self.panel.is_open() {
            return Err(HudError::PanelClosed);
        }

        match command {
            PanelCommand::Draw => {
                match self
                    .panel
                    .request_draw(&self.piles, self.options.default_draw_count)
                {
                    Ok(request) => Ok(ActionOutcome::Request(request)),
                    Err(err) => Err(self.report_failure("Deck not found.", err)),
                }
            }
            PanelCommand::Discard(card) => self.discard(&card),
            PanelCommand::Recover => match self.panel.request_recovery(&self.piles) {
                Ok(Some(request)) => Ok(ActionOutcome::Request(request)),
                Ok(None) => {
                    self.notifier.warn(EMPTY_DISCARD);
                    Ok(ActionOutcome::Unchanged)
                }
                Err(err) => Err(self.report_failure("Discard pile not found.", err)),
            },
            PanelCommand::Close => {
                self.close();
                Ok(ActionOutcome::Closed)
            }
            PanelCommand::ToggleCollapse => {
                self.panel.toggle_collapse()?;
                Ok(ActionOutcome::Updated)
            }
            PanelCommand::Drag { left, top } => {
                self.panel.drag_to(left, top)?;
                Ok(ActionOutcome::Updated)
            }
            PanelCommand::Release => {
                let position = self.panel.position().clone();
                settings::save_position(&mut self.settings, &self.options, &position)?;
                log::debug!("panel position saved at {}/{}", position.top, position.left);
                Ok(ActionOutcome::Unchanged)
            }
        }
    }

    /// Answer the panel's pending request.
    pub fn reply(&mut self, reply: PanelReply) -> HudResult<ActionOutcome> {
        self.panel.take_pending(&reply)?;

        match reply {
            PanelReply::DrawCount(None) | PanelReply::Recovery(None) => Ok(ActionOutcome::Unchanged),
            PanelReply::DrawCount(Some(count)) if count <= 0 => Ok(ActionOutcome::Unchanged),
            PanelReply::DrawCount(Some(count)) => match self.panel.draw(&mut self.piles, count) {
                Ok(_) => Ok(ActionOutcome::Updated),
                Err(err) => Err(self.report_failure("The draw failed.", err)),
            },
            PanelReply::Recovery(Some(choice)) => self.recover(&choice),
        }
    }

    fn discard(&mut self, card: &CardId) -> HudResult<ActionOutcome> {
        match self.panel.discard(&mut self.piles, card) {
            Ok(announcement) => {
                self.notifier.announce(announcement);
                Ok(ActionOutcome::Updated)
            }
            Err(err @ HudError::CardNotFound { .. }) => Err(self.report_failure("Card not found!", err)),
            Err(err) => Err(self.report_failure("The card could not be discarded.", err)),
        }
    }

    fn recover(&mut self, choice: &RecoveryChoice) -> HudResult<ActionOutcome> {
        match self.panel.recover(&mut self.piles, choice) {
            Ok(recovered) => {
                let destination = if recovered.to_hand { "hand" } else { "deck" };
                self.notifier.info(format!(
                    "Card \"{}\" returned to the {destination}.",
                    recovered.card_name
                ));
                Ok(ActionOutcome::Updated)
            }
            Err(err) => {
                let message = match &err {
                    HudError::CardNotFound { .. } => "Card not found in the discard pile.",
                    HudError::PileNotFound(pile)
                        if self.panel.config().is_some_and(|c| &c.discard == pile) =>
                    {
                        "Discard pile not found."
                    }
                    HudError::PileNotFound(_) => "Destination not found.",
                    _ => "The card could not be recovered.",
                };
                Err(self.report_failure(message, err))
            }
        }
    }

    fn report_failure(&mut self, message: &str, err: HudError) -> HudError {
        log::warn!("{message} ({err})");
        self.notifier.error(message);
        err
    }
}
