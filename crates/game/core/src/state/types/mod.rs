pub mod common;
pub mod entity;
pub mod fighter;
pub mod grid;

pub use common::{EntityId, Position};
pub use entity::{ActorState, ActorTemplate, Entity, EntityKind, RenderOrder};
pub use fighter::{Fighter, FighterStats};
pub use grid::Grid;
