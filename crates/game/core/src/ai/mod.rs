//! Enemy decision policies.
//!
//! A policy reads the map through an [`AiContext`] and returns the
//! [`CharacterAction`] its actor wants to take. Policies never mutate state;
//! the engine validates and applies whatever they choose with the same rules
//! as player input.

mod hostile;

use tracing::trace;

use crate::action::{CharacterAction, WaitAction};
use crate::state::{Entity, EntityId, GameMap};

/// Which policy an actor runs during enemy turns.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AiKind {
    /// Never does anything.
    Idle,
    /// Chases and attacks the player while the player can see it.
    Hostile,
}

impl AiKind {
    /// Chooses the action `ctx.entity` takes this turn.
    pub fn decide(self, ctx: &AiContext<'_>) -> CharacterAction {
        let action = match self {
            AiKind::Idle => ctx.wait(),
            AiKind::Hostile => hostile::decide(ctx),
        };
        trace!(entity = %ctx.entity, ai = %self, action = action.as_str(), "ai decided");
        action
    }
}

/// Read-only view handed to a policy for one decision.
#[derive(Clone, Copy, Debug)]
pub struct AiContext<'a> {
    /// The entity making the decision.
    pub entity: EntityId,
    /// The player the policy reacts to.
    pub player: EntityId,
    pub map: &'a GameMap,
}

impl<'a> AiContext<'a> {
    pub fn new(entity: EntityId, player: EntityId, map: &'a GameMap) -> Self {
        Self {
            entity,
            player,
            map,
        }
    }

    pub fn actor(&self) -> Option<&'a Entity> {
        self.map.entity(self.entity)
    }

    /// The player, if still alive.
    pub fn living_player(&self) -> Option<&'a Entity> {
        self.map
            .entity(self.player)
            .filter(|entity| entity.is_living_actor())
    }

    fn wait(&self) -> CharacterAction {
        CharacterAction::Wait(WaitAction::new(self.entity))
    }
}
