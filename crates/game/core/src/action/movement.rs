use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, GameMap, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("actor {0} is dead")]
    ActorDead(EntityId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is not walkable")]
    Blocked { destination: Position },

    #[error("destination {destination} is occupied by {blocker}")]
    Occupied {
        destination: Position,
        blocker: EntityId,
    },

    #[error("actor {actor} is not the blocker at {position} after moving")]
    OccupancyDesync { actor: EntityId, position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        use MoveError::*;
        match self {
            OutOfBounds { .. } | Blocked { .. } | Occupied { .. } => ErrorSeverity::Recoverable,
            ActorNotFound(_) | ActorDead(_) => ErrorSeverity::Validation,
            OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MoveError::*;
        match self {
            ActorNotFound(_) => "MOVE_ACTOR_NOT_FOUND",
            ActorDead(_) => "MOVE_ACTOR_DEAD",
            OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Blocked { .. } => "MOVE_BLOCKED",
            Occupied { .. } => "MOVE_OCCUPIED",
            OccupancyDesync { .. } => "MOVE_OCCUPANCY_DESYNC",
        }
    }
}

/// One step by `(dx, dy)` from the actor's current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MoveAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    /// Builds the step that carries `actor` from `from` onto `to`.
    pub fn toward(actor: EntityId, from: Position, to: Position) -> Self {
        Self::new(actor, to.x - from.x, to.y - from.y)
    }

    fn origin(&self, map: &GameMap) -> Result<Position, MoveError> {
        let entity = map
            .entity(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        if !entity.is_living_actor() {
            return Err(MoveError::ActorDead(self.actor));
        }
        Ok(entity.position())
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = (Position, Position);

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, map: &GameMap) -> Result<(), Self::Error> {
        let destination = self.origin(map)?.offset(self.dx, self.dy);

        let tile = map
            .tile(destination)
            .ok_or(MoveError::OutOfBounds { destination })?;
        if !tile.is_walkable() {
            return Err(MoveError::Blocked { destination });
        }

        if let Some(blocker) = map.blocking_entity_at(destination)
            && blocker.id() != self.actor
        {
            return Err(MoveError::Occupied {
                destination,
                blocker: blocker.id(),
            });
        }

        Ok(())
    }

    fn apply(&self, map: &mut GameMap) -> Result<Self::Result, Self::Error> {
        let origin = self.origin(map)?;
        let destination = origin.offset(self.dx, self.dy);

        map.entity_mut(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?
            .set_position(destination);

        Ok((origin, destination))
    }

    fn post_validate(&self, map: &GameMap) -> Result<(), Self::Error> {
        let position = self.origin(map)?;
        match map.blocking_entity_at(position) {
            Some(blocker) if blocker.id() == self.actor => Ok(()),
            _ => Err(MoveError::OccupancyDesync {
                actor: self.actor,
                position,
            }),
        }
    }
}
