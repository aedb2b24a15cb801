//! Action domain.
//!
//! External input arrives as a [`PlayerAction`]. Everything except `Quit`
//! resolves into a [`CharacterAction`] bound to an actor, which is the same
//! shape enemy policies produce. Each concrete action implements
//! [`ActionTransition`] and is driven through pre-validation, application and
//! post-validation by the engine.
//!
//! # Module Structure
//!
//! - `movement`: single-step moves with wall/bounds/blocker checks
//! - `combat`: melee attacks, damage and death
//! - `wait`: no-op turn

mod combat;
mod movement;
mod wait;

pub use combat::{AttackReport, MeleeAction, MeleeError};
pub use movement::{MoveAction, MoveError};
pub use wait::WaitAction;

use crate::state::{EntityId, GameMap, Position};

/// Defines how a concrete action mutates the map.
///
/// Hooks receive the map explicitly; implementations never reach for global
/// state. `apply` may assume `pre_validate` has already succeeded.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the map **before** mutation.
    fn pre_validate(&self, _map: &GameMap) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the map directly.
    fn apply(&self, map: &mut GameMap) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the map **after** mutation.
    fn post_validate(&self, _map: &GameMap) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Pre-resolved input accepted by the turn engine.
///
/// Key and mouse translation happens outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// Step by `(dx, dy)`.
    Move { dx: i32, dy: i32 },
    /// Attack whatever living fighter stands at `(dx, dy)` from the player.
    Melee { dx: i32, dy: i32 },
    /// Pass the turn.
    Wait,
    /// Leave the game.
    Quit,
}

impl PlayerAction {
    /// Binds this input to `player`. `Quit` has no in-world counterpart.
    pub fn resolve(self, player: EntityId) -> Option<CharacterAction> {
        match self {
            PlayerAction::Move { dx, dy } => {
                Some(CharacterAction::Move(MoveAction::new(player, dx, dy)))
            }
            PlayerAction::Melee { dx, dy } => {
                Some(CharacterAction::Melee(MeleeAction::new(player, dx, dy)))
            }
            PlayerAction::Wait => Some(CharacterAction::Wait(WaitAction::new(player))),
            PlayerAction::Quit => None,
        }
    }
}

/// An in-world action bound to the actor performing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterAction {
    Move(MoveAction),
    Melee(MeleeAction),
    Wait(WaitAction),
}

impl CharacterAction {
    pub fn actor(&self) -> EntityId {
        match self {
            CharacterAction::Move(action) => action.actor(),
            CharacterAction::Melee(action) => action.actor(),
            CharacterAction::Wait(action) => action.actor(),
        }
    }

    /// Short label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterAction::Move(_) => "move",
            CharacterAction::Melee(_) => "melee",
            CharacterAction::Wait(_) => "wait",
        }
    }
}

/// What an applied action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Move { from: Position, to: Position },
    Attack(AttackReport),
    Wait,
}

impl ActionResult {
    pub fn attack(&self) -> Option<&AttackReport> {
        match self {
            ActionResult::Attack(report) => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_has_no_character_action() {
        assert_eq!(PlayerAction::Quit.resolve(EntityId(0)), None);
    }

    #[test]
    fn resolve_binds_the_player() {
        let player = EntityId(4);
        let action = PlayerAction::Move { dx: 1, dy: -1 }.resolve(player).unwrap();
        assert_eq!(action, CharacterAction::Move(MoveAction::new(player, 1, -1)));
        assert_eq!(action.actor(), player);
        assert_eq!(action.as_str(), "move");

        let melee = PlayerAction::Melee { dx: 0, dy: 1 }.resolve(player).unwrap();
        assert_eq!(melee.as_str(), "melee");
        assert_eq!(
            PlayerAction::Wait.resolve(player),
            Some(CharacterAction::Wait(WaitAction::new(player)))
        );
    }
}
