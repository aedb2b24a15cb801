//! Turn-based world and visibility rules for a grid roguelike.
//!
//! `shroud-core` owns the tile grid with its visible/explored layers, the
//! entity set living on it, and the [`engine::TurnEngine`] that alternates one
//! player action with a batch of enemy reactions. All world mutation flows
//! through the engine's phases; renderers and input layers only read
//! snapshots and submit resolved [`PlayerAction`]s.
pub mod action;
pub mod ai;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    ActionResult, ActionTransition, AttackReport, CharacterAction, MeleeAction, MeleeError,
    MoveAction, MoveError, PlayerAction, WaitAction,
};
pub use ai::{AiContext, AiKind};
pub use config::GameConfig;
pub use engine::{
    EngineError, EnginePhase, ExecuteError, RenderSnapshot, TransitionPhase,
    TransitionPhaseError, TurnEngine, TurnOutcome,
};
pub use env::{
    FieldOfView, Glyph, MapDimensions, RayCastFov, Rgb, SHROUD, TerrainKind, Tile, TileFlags,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActorState, ActorTemplate, Entity, EntityId, EntityKind, Fighter, FighterStats, GameMap,
    Grid, MapError, Position, RenderOrder, SpawnError,
};
