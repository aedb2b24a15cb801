use tracing::info;

use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, GameMap, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeleeError {
    #[error("attacker {0} not found")]
    ActorNotFound(EntityId),

    #[error("attacker {0} is dead")]
    ActorDead(EntityId),

    #[error("attacker {0} has no fighter")]
    NoFighter(EntityId),

    #[error("nothing to attack at {target}")]
    NoTarget { target: Position },
}

impl GameError for MeleeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MeleeError::NoTarget { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MeleeError::ActorNotFound(_) => "MELEE_ACTOR_NOT_FOUND",
            MeleeError::ActorDead(_) => "MELEE_ACTOR_DEAD",
            MeleeError::NoFighter(_) => "MELEE_NO_FIGHTER",
            MeleeError::NoTarget { .. } => "MELEE_NO_TARGET",
        }
    }
}

/// Outcome of one melee exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: EntityId,
    pub target: EntityId,
    /// Hit points actually removed. Zero when defense absorbs the blow.
    pub damage: i32,
    pub killed: bool,
}

/// Strike the living fighter standing at `(dx, dy)` from the attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MeleeAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    /// Resolves the attacker's power and the target's id.
    fn resolve(&self, map: &GameMap) -> Result<(i32, EntityId), MeleeError> {
        let attacker = map
            .entity(self.actor)
            .ok_or(MeleeError::ActorNotFound(self.actor))?;
        if !attacker.is_living_actor() {
            return Err(MeleeError::ActorDead(self.actor));
        }
        let power = attacker
            .fighter()
            .ok_or(MeleeError::NoFighter(self.actor))?
            .power();

        let target = attacker.position().offset(self.dx, self.dy);
        let defender = map
            .living_actors()
            .find(|entity| {
                entity.is_at(target) && entity.id() != self.actor && entity.fighter().is_some()
            })
            .ok_or(MeleeError::NoTarget { target })?;

        Ok((power, defender.id()))
    }
}

impl ActionTransition for MeleeAction {
    type Error = MeleeError;
    type Result = AttackReport;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, map: &GameMap) -> Result<(), Self::Error> {
        self.resolve(map).map(|_| ())
    }

    fn apply(&self, map: &mut GameMap) -> Result<Self::Result, Self::Error> {
        let (power, target) = self.resolve(map)?;
        let defender = map
            .entity_mut(target)
            .ok_or(MeleeError::ActorNotFound(target))?;
        let position = defender.position();
        let fighter = defender
            .fighter_mut()
            .ok_or(MeleeError::NoTarget { target: position })?;

        let raw = power.saturating_sub(fighter.defense());
        let damage = if raw > 0 { fighter.take_damage(raw) } else { 0 };
        let killed = fighter.is_dead() && defender.die();

        if killed {
            info!(
                attacker = %self.actor,
                target = %target,
                corpse = defender.name(),
                "actor killed"
            );
        }

        Ok(AttackReport {
            attacker: self.actor,
            target,
            damage,
            killed,
        })
    }
}
