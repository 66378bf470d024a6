//! Coordination of automation, panel and host collaborators.
//!
//! [`AutomationCoordinator`] is the only stateful entry point a host needs:
//! it owns the automation registry, the event router and the single panel,
//! and holds the pile store, settings store and notifier it was built with.
//!
//! Control flow: the user opens a participant's panel, which activates (or
//! reuses) that participant's subscription; combat events routed to the
//! subscription deal cards and re-render the panel; closing the panel
//! deactivates the subscription.

mod hud;
mod report;

pub use hud::{AutomationCoordinator, EMPTY_DISCARD, NO_DECKS};
pub use report::{DrawOutcome, DrawReport, SelectorEntry};
