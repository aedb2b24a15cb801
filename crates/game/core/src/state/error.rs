//! Map and entity-set errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors raised by coordinate-addressed map operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    /// Coordinate lies outside the grid.
    #[error("position {position} is out of bounds")]
    OutOfBounds { position: Position },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MapError::OutOfBounds { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapError::OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
        }
    }
}

/// Errors raised while placing new entities on a map.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnError {
    #[error("spawn position {position} is out of bounds")]
    OutOfBounds { position: Position },

    #[error("spawn position {position} is not walkable")]
    NotWalkable { position: Position },

    #[error("spawn position {position} is already occupied by entity {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    #[error("entity list is full (max: {max})")]
    CapacityExceeded { max: usize },
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use SpawnError::*;
        match self {
            OutOfBounds { .. } => "SPAWN_OUT_OF_BOUNDS",
            NotWalkable { .. } => "SPAWN_NOT_WALKABLE",
            Occupied { .. } => "SPAWN_OCCUPIED",
            CapacityExceeded { .. } => "SPAWN_CAPACITY_EXCEEDED",
        }
    }
}
