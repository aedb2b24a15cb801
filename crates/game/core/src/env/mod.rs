//! Static environment: tile descriptors, map dimensions and the field-of-view
//! collaborator.
//!
//! Nothing in this module holds mutable game state. Tiles are templates that
//! get copied into a [`crate::state::GameMap`]; the field-of-view function is a
//! pure computation over a transparency grid.
mod fov;
mod map;
mod tiles;

pub use fov::{FieldOfView, RayCastFov};
pub use map::MapDimensions;
pub use tiles::{Glyph, Rgb, SHROUD, TerrainKind, Tile, TileFlags};
