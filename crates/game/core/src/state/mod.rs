//! Authoritative world state.
//!
//! [`GameMap`] owns the tile grid, the visible/explored layers and the entity
//! set. Readers query it freely; mutation is crate-private and happens only
//! inside the turn engine's phases.
mod error;
mod game_map;
pub mod types;

pub use error::{MapError, SpawnError};
pub use game_map::GameMap;
pub use types::{
    ActorState, ActorTemplate, Entity, EntityId, EntityKind, Fighter, FighterStats, Grid,
    Position, RenderOrder,
};
