/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Radius of the player's field of view, in cells.
    pub view_radius: u32,
}

impl GameConfig {
    // ===== compile-time capacity limits =====
    /// Maximum number of entities (actors, corpses, items) a single map holds.
    pub const MAX_ENTITIES: usize = 256;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_VIEW_RADIUS: u32 = 8;

    pub fn new() -> Self {
        Self {
            view_radius: Self::DEFAULT_VIEW_RADIUS,
        }
    }

    pub fn with_view_radius(view_radius: u32) -> Self {
        Self { view_radius }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
