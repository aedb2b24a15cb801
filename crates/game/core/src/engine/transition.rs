//! Runs a [`CharacterAction`] through its transition pipeline.

use super::{ExecuteError, TransitionPhase, TransitionPhaseError};
use crate::action::{ActionResult, ActionTransition, CharacterAction};
use crate::state::GameMap;

type TransitionResult<R, E> = Result<R, TransitionPhaseError<E>>;

/// Executes `action` against `map`: pre_validate → apply → post_validate.
pub(super) fn execute(
    action: &CharacterAction,
    map: &mut GameMap,
) -> Result<ActionResult, ExecuteError> {
    match action {
        CharacterAction::Move(transition) => drive_transition(transition, map)
            .map(|(from, to)| ActionResult::Move { from, to })
            .map_err(ExecuteError::Move),
        CharacterAction::Melee(transition) => drive_transition(transition, map)
            .map(ActionResult::Attack)
            .map_err(ExecuteError::Melee),
        CharacterAction::Wait(transition) => drive_transition(transition, map)
            .map(|()| ActionResult::Wait)
            .map_err(ExecuteError::Wait),
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    map: &mut GameMap,
) -> TransitionResult<T::Result, T::Error>
where
    T: ActionTransition,
{
    transition
        .pre_validate(map)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(map)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(map)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{MoveAction, MoveError, WaitAction};
    use crate::env::{MapDimensions, Tile};
    use crate::state::{ActorTemplate, Position};

    #[test]
    fn rejection_is_tagged_with_pre_validate() {
        let mut map = GameMap::filled(MapDimensions::new(3, 3), Tile::FLOOR);
        let player = map
            .spawn(&ActorTemplate::player(), Position::new(0, 0))
            .unwrap();
        let before = map.clone();

        let error = execute(
            &CharacterAction::Move(MoveAction::new(player, -1, 0)),
            &mut map,
        )
        .unwrap_err();

        assert_eq!(
            error,
            ExecuteError::Move(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                MoveError::OutOfBounds {
                    destination: Position::new(-1, 0)
                },
            ))
        );
        assert_eq!(
            error.to_string(),
            "move action failed: pre_validate failed: destination (-1, 0) is out of bounds"
        );
        assert_eq!(map, before);
    }

    #[test]
    fn wait_always_succeeds() {
        let mut map = GameMap::filled(MapDimensions::new(1, 1), Tile::FLOOR);
        let player = map.spawn(&ActorTemplate::player(), Position::ORIGIN).unwrap();
        let result = execute(&CharacterAction::Wait(WaitAction::new(player)), &mut map);
        assert_eq!(result, Ok(ActionResult::Wait));
    }
}
