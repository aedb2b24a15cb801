//! Enemy turn dispatch.

use tracing::{debug, warn};

use super::transition;
use crate::action::{ActionResult, AttackReport};
use crate::ai::{AiContext, AiKind};
use crate::state::{Entity, EntityId, GameMap};

/// Gives every living non-player actor with a policy exactly one action.
///
/// The roster is fixed before anyone acts, in insertion order. An actor killed
/// earlier in the batch is skipped. Rejected enemy actions are absorbed.
/// Returns the attacks that landed, in the order they happened.
pub(super) fn run_enemy_turns(map: &mut GameMap, player: EntityId) -> Vec<AttackReport> {
    let roster: Vec<(EntityId, AiKind)> = map
        .living_actors()
        .filter(|entity| entity.id() != player)
        .filter_map(|entity| Some((entity.id(), entity.as_actor()?.ai()?)))
        .collect();

    let mut attacks = Vec::new();
    for (entity, ai) in roster {
        if !map.entity(entity).is_some_and(Entity::is_living_actor) {
            continue;
        }

        let action = ai.decide(&AiContext::new(entity, player, map));
        if action.actor() != entity {
            warn!(%entity, actor = %action.actor(), %ai, "policy acted for another entity");
            continue;
        }
        match transition::execute(&action, map) {
            Ok(ActionResult::Attack(report)) => attacks.push(report),
            Ok(_) => {}
            Err(error) => {
                debug!(%entity, action = action.as_str(), %error, "enemy action rejected");
            }
        }
    }

    attacks
}
