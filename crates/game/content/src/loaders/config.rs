//! Game configuration loader.

use std::path::Path;

use shroud_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;

        tracing::info!(path = %path.display(), view_radius = config.view_radius, "loaded config");
        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.view_radius, GameConfig::DEFAULT_VIEW_RADIUS);
    }

    #[test]
    fn view_radius_is_read() {
        let config = ConfigLoader::parse("view_radius = 5\n").unwrap();
        assert_eq!(config.view_radius, 5);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(ConfigLoader::parse("view_radius = \"far\"").is_err());
        assert!(ConfigLoader::parse("view_radius = -1").is_err());
    }
}
