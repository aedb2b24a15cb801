//! Map data loader.
//!
//! Loads pure terrain data from map RON files. Entity placement is handled
//! separately via scenario files.
//!
//! ```ron
//! (
//!     dimensions: (40, 20),
//!     fill: Wall,
//!     rooms: [(x: 1, y: 1, width: 10, height: 8)],
//!     tiles: [(11, 4, Floor)],
//! )
//! ```
//!
//! Layers are applied in order: `fill` everywhere, then each room's interior
//! is carved to floor, then individual `tiles` override whatever is below.

use std::ops::Range;
use std::path::Path;

use serde::Deserialize;
use shroud_core::{Grid, MapDimensions, Position, TerrainKind, Tile};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files (terrain only).
#[derive(Debug, Clone, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default = "default_fill")]
    fill: TerrainKind,
    #[serde(default)]
    rooms: Vec<RoomRon>,
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, y, terrain)
}

/// Axis-aligned room. The outer ring stays as it was; the interior becomes floor.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RoomRon {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl RoomRon {
    /// Column and row ranges of the carved interior, `None` on overflow.
    fn interior(&self) -> Option<(Range<i32>, Range<i32>)> {
        let columns = self.x.checked_add(1)?..self.x.checked_add(self.width)?.checked_sub(1)?;
        let rows = self.y.checked_add(1)?..self.y.checked_add(self.height)?.checked_sub(1)?;
        Some((columns, rows))
    }
}

fn default_fill() -> TerrainKind {
    TerrainKind::Wall
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<Grid<Tile>> {
        let content = read_file(path)?;
        let tiles = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))?;

        tracing::info!(
            path = %path.display(),
            width = tiles.width(),
            height = tiles.height(),
            "loaded map"
        );
        Ok(tiles)
    }

    /// Parse a map layout from RON text.
    pub fn parse(content: &str) -> LoadResult<Grid<Tile>> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let (width, height) = data.dimensions;
        if width == 0 || height == 0 {
            anyhow::bail!("Map dimensions must be non-zero (got {}x{})", width, height);
        }
        let dimensions = MapDimensions::new(width, height);
        let mut tiles = Grid::filled(dimensions, data.fill.tile());

        for room in &data.rooms {
            if room.width < 0 || room.height < 0 {
                anyhow::bail!("Room {:?} has a negative size", room);
            }
            let Some((columns, rows)) = room.interior() else {
                anyhow::bail!("Room {:?} overflows the coordinate range", room);
            };
            for x in columns {
                for y in rows.clone() {
                    let position = Position::new(x, y);
                    tiles
                        .set(position, Tile::FLOOR)
                        .map_err(|e| anyhow::anyhow!("Room {:?} does not fit: {}", room, e))?;
                }
            }
        }

        for (x, y, terrain) in data.tiles {
            tiles
                .set(Position::new(x, y), terrain.tile())
                .map_err(|e| anyhow::anyhow!("Invalid tile entry: {}", e))?;
        }

        Ok(tiles)
    }
}
