//! Scenario loader.
//!
//! A scenario names a map and places the player, enemies and loose items on
//! it. Actor references are catalog ids resolved by [`crate::ContentFactory`].
//!
//! ```ron
//! (
//!     map: "starter",
//!     player: (actor: "player", position: (x: 5, y: 5)),
//!     npcs: [(actor: "orc", position: (x: 12, y: 4))],
//!     items: [(name: "Healing Potion", glyph: '!', color: (127, 0, 255), position: (x: 3, y: 3))],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shroud_core::{Position, Rgb};

use crate::loaders::{LoadResult, read_file};

/// An actor catalog entry placed at a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub actor: String,
    pub position: Position,
}

/// A loose item placed at a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Map file name under `maps/`, without extension.
    pub map: String,
    pub player: Placement,
    #[serde(default)]
    pub npcs: Vec<Placement>,
    #[serde(default)]
    pub items: Vec<ItemPlacement>,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load scenario {}: {}", path.display(), e))?;

        tracing::info!(
            path = %path.display(),
            map = %scenario.map,
            npcs = scenario.npcs.len(),
            items = scenario.items.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
