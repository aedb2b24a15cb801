//! Actor catalog loader.
//!
//! RON format: `[(id, ActorTemplate)]`, for example
//!
//! ```ron
//! [
//!     ("orc", (
//!         name: "Orc",
//!         glyph: 'o',
//!         color: (63, 127, 63),
//!         fighter: Some((hp: 10, defense: 0, power: 3)),
//!         ai: Some(Hostile),
//!     )),
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use shroud_core::ActorTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// Returns `(actor_id, template)` pairs in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        let actors = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load actors {}: {}", path.display(), e))?;

        tracing::info!(path = %path.display(), count = actors.len(), "loaded actor catalog");
        Ok(actors)
    }

    /// Parse an actor catalog from RON text. Ids must be unique.
    pub fn parse(content: &str) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let actors: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for (actor_id, template) in &actors {
            if !seen.insert(actor_id.as_str()) {
                anyhow::bail!("Duplicate actor id '{}'", actor_id);
            }
            if let Some(stats) = &template.fighter
                && stats.hp <= 0
            {
                anyhow::bail!("Actor '{}' must start with positive hp", actor_id);
            }
        }

        Ok(actors)
    }
}
