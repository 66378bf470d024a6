//! Opaque identifiers.
//!
//! The host addresses every object (pile, card, actor, token, stored
//! configuration) by an opaque string. The engine never interprets these
//! strings; it only compares them. Each kind gets its own newtype so a pile
//! reference can never be passed where an actor identity is expected.
//!
//! ```
//! use card_hud::core::{ActorId, PileRef};
//!
//! let deck = PileRef::new("Cards.deck01");
//! assert_eq!(deck.as_str(), "Cards.deck01");
//!
//! let nobody = ActorId::default();
//! assert!(nobody.is_empty());
//! ```

use serde::{Deserialize, Serialize};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the host left the reference blank.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Reference to a pile (deck, hand or discard) owned by the host.
    PileRef
);

opaque_id!(
    /// Identity of one card item inside a pile.
    ///
    /// Identities are not stable across migrations: a moved card is
    /// recreated in its destination under a fresh id.
    CardId
);

opaque_id!(
    /// Key of a stored participant configuration.
    ConfigId
);

opaque_id!(
    /// Owner identity of a participant (the actor whose turns drive draws).
    ActorId
);

opaque_id!(
    /// A placed token; may stand in for its actor on a combatant.
    TokenId
);
