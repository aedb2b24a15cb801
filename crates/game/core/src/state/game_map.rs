use arrayvec::ArrayVec;
use tracing::debug;

use super::{ActorTemplate, Entity, EntityId, Grid, MapError, Position, SpawnError};
use crate::config::GameConfig;
use crate::env::{Glyph, MapDimensions, Rgb, SHROUD, Tile};

/// Tile grid, per-cell visibility layers and the entities living on them.
///
/// # Invariants
///
/// - `tiles`, `visible` and `explored` share one set of dimensions for the
///   map's lifetime.
/// - `explored` never loses a cell: it only grows by union with `visible`.
/// - `visible` is replaced wholesale on every refresh.
/// - Entity ids are unique and allocated in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameMap {
    tiles: Grid<Tile>,
    visible: Grid<bool>,
    explored: Grid<bool>,
    entities: ArrayVec<Entity, { GameConfig::MAX_ENTITIES }>,
    next_entity_id: u32,
}

impl GameMap {
    /// Creates a map over the given terrain with nothing seen yet.
    pub fn new(tiles: Grid<Tile>) -> Self {
        let dimensions = tiles.dimensions();
        Self {
            tiles,
            visible: Grid::filled(dimensions, false),
            explored: Grid::filled(dimensions, false),
            entities: ArrayVec::new(),
            next_entity_id: 0,
        }
    }

    /// Creates a map where every cell is a copy of `tile`.
    pub fn filled(dimensions: MapDimensions, tile: Tile) -> Self {
        Self::new(Grid::filled(dimensions, tile))
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.tiles.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.tiles.width()
    }

    pub fn height(&self) -> u32 {
        self.tiles.height()
    }

    /// `0 <= x < width && 0 <= y < height`.
    pub fn in_bounds(&self, position: Position) -> bool {
        self.tiles.contains(position)
    }

    // ========================================================================
    // Terrain
    // ========================================================================

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(position)
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    /// Places a copy of `tile` at `position`.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> Result<(), MapError> {
        self.tiles.set(position, tile).map(|_| ())
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_walkable)
    }

    /// Transparency layer handed to the field-of-view function.
    pub fn transparency(&self) -> Grid<bool> {
        self.tiles.map(Tile::is_transparent)
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    pub fn visible(&self) -> &Grid<bool> {
        &self.visible
    }

    pub fn explored(&self) -> &Grid<bool> {
        &self.explored
    }

    /// False for out-of-bounds positions.
    pub fn is_visible(&self, position: Position) -> bool {
        self.visible.get(position).copied().unwrap_or(false)
    }

    /// False for out-of-bounds positions.
    pub fn is_explored(&self, position: Position) -> bool {
        self.explored.get(position).copied().unwrap_or(false)
    }

    /// Replaces the visible layer and folds it into the explored layer.
    ///
    /// # Panics
    ///
    /// Panics if `field_of_view` does not match the map's dimensions.
    pub(crate) fn update_visibility(&mut self, field_of_view: Grid<bool>) {
        assert_eq!(
            field_of_view.dimensions(),
            self.dimensions(),
            "field of view dimensions do not match the map"
        );
        self.visible = field_of_view;
        self.explored.union_with(&self.visible);
    }

    // ========================================================================
    // Entities
    // ========================================================================

    /// All entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub(crate) fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    /// The blocking entity standing at `position`, if any.
    pub fn blocking_entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|entity| entity.blocks_movement() && entity.is_at(position))
    }

    /// First living actor at `position` in insertion order.
    pub fn actor_at(&self, position: Position) -> Option<&Entity> {
        self.living_actors().find(|entity| entity.is_at(position))
    }

    /// Living actors, recomputed on every call.
    pub fn living_actors(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter().filter(|entity| entity.is_living_actor())
    }

    /// Spawns an actor from `template` at `position`.
    pub fn spawn(
        &mut self,
        template: &ActorTemplate,
        position: Position,
    ) -> Result<EntityId, SpawnError> {
        let tile = self
            .tile(position)
            .ok_or(SpawnError::OutOfBounds { position })?;
        if !tile.is_walkable() {
            return Err(SpawnError::NotWalkable { position });
        }
        if let Some(occupant) = self.blocking_entity_at(position) {
            return Err(SpawnError::Occupied {
                position,
                occupant: occupant.id(),
            });
        }

        let entity = Entity::actor(self.next_id(), position, template);
        let id = self.insert(entity)?;
        debug!(entity = %id, name = %template.name, %position, "spawned actor");
        Ok(id)
    }

    /// Drops a non-blocking item at `position`.
    pub fn place_item(
        &mut self,
        name: impl Into<String>,
        glyph: char,
        color: Rgb,
        position: Position,
    ) -> Result<EntityId, SpawnError> {
        if !self.in_bounds(position) {
            return Err(SpawnError::OutOfBounds { position });
        }
        let item = Entity::item(self.next_id(), position, name, glyph, color);
        self.insert(item)
    }

    fn next_id(&self) -> EntityId {
        EntityId(self.next_entity_id)
    }

    /// Appends `entity`; the id counter only advances once the entity is stored.
    fn insert(&mut self, entity: Entity) -> Result<EntityId, SpawnError> {
        let id = entity.id();
        self.entities
            .try_push(entity)
            .map_err(|_| SpawnError::CapacityExceeded {
                max: GameConfig::MAX_ENTITIES,
            })?;
        self.next_entity_id += 1;
        Ok(id)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Builds the per-cell glyph grid for the current visibility state.
    ///
    /// Terrain uses the light variant when visible, the dark variant when only
    /// explored, and [`SHROUD`] otherwise. Entities standing on visible cells
    /// are then drawn in ascending `(render_order, id)` so the highest rank
    /// owns a shared cell; the terrain background is kept.
    pub fn render(&self) -> Grid<Glyph> {
        let mut cells = Grid::from_fn(self.dimensions(), |position| {
            let Some(tile) = self.tiles.get(position) else {
                return SHROUD;
            };
            if self.is_visible(position) {
                tile.light()
            } else if self.is_explored(position) {
                tile.dark()
            } else {
                SHROUD
            }
        });

        let mut drawn: Vec<&Entity> = self.entities.iter().collect();
        drawn.sort_by_key(|entity| (entity.render_order(), entity.id()));

        for entity in drawn {
            if !self.is_visible(entity.position()) {
                continue;
            }
            if let Some(cell) = cells.get_mut(entity.position()) {
                cell.ch = entity.glyph();
                cell.fg = entity.color();
            }
        }

        cells
    }
}
