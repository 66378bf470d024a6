//! Combat events as seen by the automation engine.
//!
//! The host's combat system owns round, turn and the active combatant. The
//! engine only reads a snapshot of that state attached to each event.
//!
//! Only two events drive draws: a dedicated combat-started signal and a
//! change of active combatant. Generic combat updates are modelled too, so
//! hosts can forward everything; they never trigger a draw even when the
//! snapshot looks like a fresh combat (round 1, turn 0).

use serde::{Deserialize, Serialize};

use crate::core::ids::{ActorId, TokenId};

/// Event kinds a handler can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CombatStarted,
    TurnChanged,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::CombatStarted => f.write_str("combat start"),
            EventKind::TurnChanged => f.write_str("turn start"),
        }
    }
}

/// A placed token, possibly standing in for an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRef {
    pub id: TokenId,
    pub actor_id: Option<ActorId>,
}

/// One entry of the combat tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,

    /// Direct actor reference.
    pub actor_id: Option<ActorId>,

    /// Token the combatant was created from.
    pub token: Option<TokenRef>,
}

impl Combatant {
    /// A combatant referencing its actor directly.
    pub fn for_actor(actor: impl Into<ActorId>) -> Self {
        Self {
            actor_id: Some(actor.into()),
            ..Self::default()
        }
    }

    /// A combatant known only through a placed token.
    pub fn for_token(token: impl Into<TokenId>, actor: Option<ActorId>) -> Self {
        Self {
            token: Some(TokenRef {
                id: token.into(),
                actor_id: actor,
            }),
            ..Self::default()
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The actor that owns this combatant.
    ///
    /// The direct reference wins; the token's actor is used only when the
    /// direct reference is absent or blank.
    ///
    /// ```
    /// use card_hud::automation::Combatant;
    /// use card_hud::core::ActorId;
    ///
    /// let c = Combatant::for_token("Token.t", Some(ActorId::new("Actor.a")));
    /// assert_eq!(c.owning_actor(), Some(&ActorId::new("Actor.a")));
    /// ```
    #[must_use]
    pub fn owning_actor(&self) -> Option<&ActorId> {
        let direct = self.actor_id.as_ref().filter(|a| !a.is_empty());
        direct.or_else(|| {
            self.token
                .as_ref()
                .and_then(|t| t.actor_id.as_ref())
                .filter(|a| !a.is_empty())
        })
    }
}

/// Snapshot of the combat attached to an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    pub round: u32,
    pub turn: u32,
    pub current: Option<Combatant>,
}

impl CombatState {
    pub fn new(round: u32, turn: u32) -> Self {
        Self {
            round,
            turn,
            current: None,
        }
    }

    /// Set the active combatant (builder pattern).
    #[must_use]
    pub fn with_current(mut self, combatant: Combatant) -> Self {
        self.current = Some(combatant);
        self
    }
}

/// What changed on a turn change, for logging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnChange {
    pub previous_round: Option<u32>,
    pub previous_turn: Option<u32>,
}

/// An event emitted by the host's combat system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A combat encounter has just begun.
    Started { combat: CombatState },

    /// The active combatant changed.
    TurnChanged {
        combat: CombatState,
        change: TurnChange,
    },

    /// Any other change to the combat. Never triggers a draw.
    Updated { combat: CombatState },
}

impl CombatEvent {
    pub fn started(combat: CombatState) -> Self {
        CombatEvent::Started { combat }
    }

    pub fn turn_changed(combat: CombatState) -> Self {
        CombatEvent::TurnChanged {
            combat,
            change: TurnChange::default(),
        }
    }

    pub fn updated(combat: CombatState) -> Self {
        CombatEvent::Updated { combat }
    }

    /// Kind of handler this event is routed to, if any.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            CombatEvent::Started { .. } => Some(EventKind::CombatStarted),
            CombatEvent::TurnChanged { .. } => Some(EventKind::TurnChanged),
            CombatEvent::Updated { .. } => None,
        }
    }

    #[must_use]
    pub fn combat(&self) -> &CombatState {
        match self {
            CombatEvent::Started { combat }
            | CombatEvent::TurnChanged { combat, .. }
            | CombatEvent::Updated { combat } => combat,
        }
    }

    /// Owning actor of the active combatant.
    #[must_use]
    pub fn active_actor(&self) -> Option<&ActorId> {
        self.combat().current.as_ref()?.owning_actor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_actor_wins_over_token() {
        let mut c = Combatant::for_actor("Actor.direct");
        c.token = Some(TokenRef {
            id: TokenId::new("Token.t"),
            actor_id: Some(ActorId::new("Actor.token")),
        });

        assert_eq!(c.owning_actor(), Some(&ActorId::new("Actor.direct")));
    }

    #[test]
    fn test_token_fallback() {
        let c = Combatant::for_token("Token.t", Some(ActorId::new("Actor.a")));
        assert_eq!(c.owning_actor(), Some(&ActorId::new("Actor.a")));

        let mut blank = c.clone();
        blank.actor_id = Some(ActorId::new(""));
        assert_eq!(blank.owning_actor(), Some(&ActorId::new("Actor.a")));
    }

    #[test]
    fn test_no_actor_at_all() {
        let c = Combatant::for_token("Token.t", None);
        assert_eq!(c.owning_actor(), None);
        assert_eq!(Combatant::default().owning_actor(), None);
    }

    #[test]
    fn test_event_kinds() {
        let combat = CombatState::new(1, 0);
        assert_eq!(
            CombatEvent::started(combat.clone()).kind(),
            Some(EventKind::CombatStarted)
        );
        assert_eq!(
            CombatEvent::turn_changed(combat.clone()).kind(),
            Some(EventKind::TurnChanged)
        );
        assert_eq!(CombatEvent::updated(combat).kind(), None);
    }

    #[test]
    fn test_active_actor() {
        let event = CombatEvent::turn_changed(
            CombatState::new(2, 1).with_current(Combatant::for_actor("Actor.a")),
        );
        assert_eq!(event.active_actor(), Some(&ActorId::new("Actor.a")));
        assert_eq!(CombatEvent::started(CombatState::new(1, 0)).active_actor(), None);
    }
}
