//! Combat/turn automation.
//!
//! Participants with an open panel get two draw handlers: one for combat
//! start, one for each change of active combatant. The registry guarantees
//! at most one handler pair per owner; the router decides, per event, which
//! handlers pass their guards.
//!
//! ## Key Components
//!
//! - [`CombatEvent`]: what the host's combat system reports
//! - [`EventRouter`]: handlers indexed by event kind, guard evaluation
//! - [`AutomationRegistry`]: owner → [`Subscription`] bookkeeping
//!
//! ## Example Usage
//!
//! ```
//! use card_hud::automation::{
//!     AutomationRegistry, CombatEvent, CombatState, Combatant, EventRouter,
//! };
//! use card_hud::core::{ActorId, ConfigId, ParticipantConfig, ParticipantConfigs};
//!
//! let configs = ParticipantConfigs::new().with(
//!     "ranger",
//!     ParticipantConfig::new("Ranger", "deck", "hand", "discard", "Actor.r"),
//! );
//!
//! let mut router = EventRouter::new();
//! let mut registry = AutomationRegistry::new();
//! registry.activate(&ActorId::new("Actor.r"), &ConfigId::new("ranger"), &mut router);
//!
//! let event = CombatEvent::turn_changed(
//!     CombatState::new(1, 1).with_current(Combatant::for_actor("Actor.r")),
//! );
//! let orders = router.route(&event, &configs);
//! assert_eq!(orders.len(), 1);
//! assert_eq!(orders[0].count, 1);
//! ```

mod event;
mod registry;
mod router;

pub use event::{CombatEvent, CombatState, Combatant, EventKind, TokenRef, TurnChange};
pub use registry::{Activation, AutomationRegistry, Subscription};
pub use router::{DrawOrder, EventRouter, Handler, HandlerId};
