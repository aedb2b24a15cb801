//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into `shroud-core` values. Errors carry
//! the offending path so a broken data directory is easy to track down.

pub mod actors;
pub mod config;
pub mod factory;
pub mod map;
pub mod scenario;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, World};
pub use map::MapLoader;
pub use scenario::{ItemPlacement, Placement, Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
