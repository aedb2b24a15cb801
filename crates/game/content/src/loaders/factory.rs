//! Content factory for assembling a playable world from data files.

use std::path::{Path, PathBuf};

use shroud_core::{ActorTemplate, EntityId, GameConfig, GameMap, Grid, Tile};

use crate::loaders::{
    ActorLoader, ConfigLoader, LoadResult, MapLoader, Placement, Scenario, ScenarioLoader,
};

/// Everything `TurnEngine::new` needs.
#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub map: GameMap,
    pub player: EntityId,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actors.ron
/// ├── maps/
/// │   └── starter.ron
/// └── scenarios/
///     └── starter.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load actor catalog from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let path = self.data_dir.join("actors.ron");
        ActorLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// Returns terrain data only (no entities).
    /// For entity placement, use `load_scenario()`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<Grid<Tile>> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{scenario_name}.ron`.
    pub fn load_scenario(&self, scenario_name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", scenario_name));
        ScenarioLoader::load(&path)
    }

    /// Loads a scenario with its map and actors and spawns everything.
    ///
    /// The player is spawned first so it always gets the lowest entity id.
    pub fn build_world(&self, scenario_name: &str) -> LoadResult<World> {
        let config = self.load_config()?;
        let actors = self.load_actors()?;
        let scenario = self.load_scenario(scenario_name)?;
        let mut map = GameMap::new(self.load_map(&scenario.map)?);

        let player = spawn(&mut map, &actors, &scenario.player)?;
        for npc in &scenario.npcs {
            spawn(&mut map, &actors, npc)?;
        }
        for item in &scenario.items {
            map.place_item(item.name.clone(), item.glyph, item.color, item.position)
                .map_err(|e| anyhow::anyhow!("Failed to place item '{}': {}", item.name, e))?;
        }

        tracing::info!(
            scenario = scenario_name,
            entities = map.entity_count(),
            "built world"
        );
        Ok(World {
            config,
            map,
            player,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn spawn(
    map: &mut GameMap,
    actors: &[(String, ActorTemplate)],
    placement: &Placement,
) -> LoadResult<EntityId> {
    let template = actors
        .iter()
        .find(|(id, _)| *id == placement.actor)
        .map(|(_, template)| template)
        .ok_or_else(|| anyhow::anyhow!("Unknown actor '{}'", placement.actor))?;

    map.spawn(template, placement.position).map_err(|e| {
        anyhow::anyhow!(
            "Failed to spawn '{}' at {}: {}",
            placement.actor,
            placement.position,
            e
        )
    })
}
