use std::convert::Infallible;

use crate::action::ActionTransition;
use crate::state::{EntityId, GameMap};

/// Passes the turn without touching the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    type Error = Infallible;
    type Result = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, _map: &mut GameMap) -> Result<Self::Result, Self::Error> {
        Ok(())
    }
}
