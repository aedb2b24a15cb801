use tracing::debug;

use super::EngineError;
use crate::env::FieldOfView;
use crate::state::{EntityId, GameMap};

/// Recomputes the field of view around `player` and folds it into the map.
pub(super) fn refresh<F: FieldOfView>(
    map: &mut GameMap,
    player: EntityId,
    radius: u32,
    fov: &F,
) -> Result<(), EngineError> {
    let origin = map
        .entity(player)
        .ok_or(EngineError::PlayerNotFound(player))?
        .position();

    let visible = fov.compute(&map.transparency(), origin, radius);
    map.update_visibility(visible);

    debug!(
        %origin,
        radius,
        visible = map.visible().count_true(),
        explored = map.explored().count_true(),
        "visibility refreshed"
    );
    Ok(())
}
