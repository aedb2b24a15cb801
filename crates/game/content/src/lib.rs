//! Data-driven content definitions and loaders.
//!
//! This crate reads RON/TOML data files into `shroud-core` types:
//! - Game configuration (TOML)
//! - Map layouts (RON)
//! - Actor templates (RON)
//! - Scenarios placing the player, enemies and items on a map (RON)
//!
//! [`ContentFactory`] ties them together and hands back a [`World`] ready for
//! `TurnEngine::new`.

pub mod loaders;

pub use loaders::{
    ActorLoader, ConfigLoader, ContentFactory, ItemPlacement, LoadResult, MapLoader, Placement,
    Scenario, ScenarioLoader, World,
};
