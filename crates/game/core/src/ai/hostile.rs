//! Melee chaser.
//!
//! Acts only while standing on a cell the player can currently see. Adjacent
//! (including diagonally) it attacks; otherwise it takes the single step that
//! most reduces the distance to the player, and waits when no step helps.

use arrayvec::ArrayVec;
use tracing::debug;

use super::AiContext;
use crate::action::{CharacterAction, MeleeAction, MoveAction};
use crate::state::Position;

const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(super) fn decide(ctx: &AiContext<'_>) -> CharacterAction {
    let (Some(actor), Some(player)) = (ctx.actor(), ctx.living_player()) else {
        return ctx.wait();
    };
    let origin = actor.position();
    if !ctx.map.is_visible(origin) {
        return ctx.wait();
    }

    let target = player.position();
    if origin.chebyshev_distance(target) <= 1 {
        return CharacterAction::Melee(MeleeAction::new(
            ctx.entity,
            target.x - origin.x,
            target.y - origin.y,
        ));
    }

    match next_step(ctx, origin, target) {
        Some(step) => CharacterAction::Move(MoveAction::toward(ctx.entity, origin, step)),
        None => {
            debug!(entity = %ctx.entity, %origin, "no step brings hostile closer");
            ctx.wait()
        }
    }
}

/// Picks the open neighbour closest to `target`, preferring king-move distance
/// and breaking ties on straight-line distance then scan order.
fn next_step(ctx: &AiContext<'_>, origin: Position, target: Position) -> Option<Position> {
    let key = |cell: Position| {
        (
            cell.chebyshev_distance(target),
            cell.distance_squared(target),
        )
    };

    let candidates: ArrayVec<Position, 8> = NEIGHBOURS
        .iter()
        .map(|&(dx, dy)| origin.offset(dx, dy))
        .filter(|&cell| ctx.map.is_walkable(cell) && ctx.map.blocking_entity_at(cell).is_none())
        .collect();

    candidates
        .into_iter()
        .min_by_key(|&cell| key(cell))
        .filter(|&cell| key(cell) < key(origin))
}
