//! Piles and the host store that owns them.
//!
//! Each participant has three piles in fixed roles: deck (source of draws),
//! hand (player-visible working set) and discard (sink). The engine never
//! holds a pile; it resolves references through a [`PileStore`] each time.
//!
//! ## Key Types
//!
//! - `Pile`: ordered keyed card collection
//! - `PileStore`: resolver plus mutations, implemented by the host
//! - `MemoryPileStore`: in-process `PileStore`

pub mod pile;
pub mod store;
pub mod memory;

pub use pile::Pile;
pub use store::PileStore;
pub use memory::MemoryPileStore;
