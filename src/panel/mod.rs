//! Interactive panel: behavioral contract of the floating hand display.
//!
//! Only one panel exists at a time. It shows a participant's hand, exposes
//! draw/recover/close actions and discard-on-click, and re-renders after
//! every mutation. Visual chrome belongs to the UI layer; this module holds
//! state and dispatches user actions into the migration protocol.
//!
//! ## Key Types
//!
//! - `PanelController`: open/close/refresh and the user actions
//! - `PanelView`: what the UI draws
//! - `PanelCommand` / `PanelRequest` / `PanelReply`: UI protocol
//! - `PanelPosition`: persisted screen offset

pub mod controller;
pub mod position;
pub mod protocol;
pub mod view;

pub use controller::{PanelController, PendingKind, Recovered, DISCARD_LABEL};
pub use position::PanelPosition;
pub use protocol::{ActionOutcome, PanelCommand, PanelReply, PanelRequest, RecoveryChoice};
pub use view::{PanelButton, PanelView, ACTION_BAR};
