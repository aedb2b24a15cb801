//! Turn sequencing.
//!
//! The [`TurnEngine`] is the single owner of the [`GameMap`] and the only
//! place world state changes. One call to [`TurnEngine::handle`] runs a full
//! turn to completion: apply the player's action, recompute visibility, then
//! give every living enemy one action. Every step is gated by [`EnginePhase`]
//! so the phases cannot run out of order.

mod errors;
mod phase;
mod transition;
mod turns;
mod visibility;

pub use errors::{EngineError, ExecuteError, TransitionPhase, TransitionPhaseError};
pub use phase::EnginePhase;

use tracing::{debug, info};

use crate::action::{ActionResult, AttackReport, PlayerAction};
use crate::config::GameConfig;
use crate::env::{FieldOfView, Glyph, RayCastFov};
use crate::state::{Entity, EntityId, GameMap, Grid};

/// What happened to one submitted [`PlayerAction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action was applied and enemies responded.
    Completed {
        /// Number of completed player turns so far, this one included.
        turn: u64,
        result: ActionResult,
        /// Attacks made by enemies during their turns.
        attacks: Vec<AttackReport>,
    },
    /// The action was illegal. Nothing changed and no turn passed.
    Rejected(ExecuteError),
    /// The player quit.
    Exited,
    /// The player died during the enemy turns.
    Defeated {
        turn: u64,
        attacks: Vec<AttackReport>,
    },
}

impl TurnOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, TurnOutcome::Rejected(_))
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub cells: Grid<Glyph>,
    /// `"{hp}/{max_hp}"` for the player, when the player has a fighter.
    pub health: Option<String>,
}

/// Drives the player/enemy turn cycle over an owned [`GameMap`].
#[derive(Debug)]
pub struct TurnEngine<F = RayCastFov> {
    map: GameMap,
    player: EntityId,
    config: GameConfig,
    fov: F,
    phase: EnginePhase,
    turn: u64,
}

impl TurnEngine<RayCastFov> {
    /// Creates an engine using [`RayCastFov`].
    pub fn with_default_fov(
        map: GameMap,
        player: EntityId,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        Self::new(map, player, config, RayCastFov)
    }
}

impl<F: FieldOfView> TurnEngine<F> {
    /// Takes ownership of `map` and runs the initial visibility pass.
    ///
    /// `player` must name a living actor already spawned on `map`.
    pub fn new(
        map: GameMap,
        player: EntityId,
        config: GameConfig,
        fov: F,
    ) -> Result<Self, EngineError> {
        let entity = map
            .entity(player)
            .ok_or(EngineError::PlayerNotFound(player))?;
        if !entity.is_living_actor() {
            return Err(EngineError::PlayerNotActor(player));
        }

        let mut engine = Self {
            map,
            player,
            config,
            fov,
            phase: EnginePhase::RecomputingVisibility,
            turn: 0,
        };
        engine.refresh_visibility()?;
        engine.transition(EnginePhase::AwaitingPlayerInput)?;

        info!(
            player = %player,
            width = engine.map.width(),
            height = engine.map.height(),
            view_radius = engine.config.view_radius,
            "turn engine ready"
        );
        Ok(engine)
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn player_entity(&self) -> Option<&Entity> {
        self.map.entity(self.player)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Completed player turns.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// The player's `"{hp}/{max_hp}"` string.
    pub fn health_label(&self) -> Option<String> {
        self.player_entity()?.fighter().map(|fighter| fighter.health_label())
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            cells: self.map.render(),
            health: self.health_label(),
        }
    }

    /// Processes one player action to completion.
    ///
    /// Illegal in-world actions come back as [`TurnOutcome::Rejected`]; they
    /// never mutate the map or run enemy turns. `Err` is reserved for input
    /// the engine cannot accept in its current phase.
    pub fn handle(&mut self, action: PlayerAction) -> Result<TurnOutcome, EngineError> {
        match self.phase {
            EnginePhase::AwaitingPlayerInput => {}
            EnginePhase::Defeated if action == PlayerAction::Quit => {
                self.transition(EnginePhase::Exited)?;
                return Ok(TurnOutcome::Exited);
            }
            EnginePhase::Defeated => return Err(EngineError::PlayerDefeated),
            EnginePhase::Exited => return Err(EngineError::Exited),
            from => {
                return Err(EngineError::PhaseViolation {
                    from,
                    to: EnginePhase::ApplyingPlayerAction,
                });
            }
        }

        let Some(character_action) = action.resolve(self.player) else {
            self.transition(EnginePhase::Exited)?;
            info!(turn = self.turn, "player quit");
            return Ok(TurnOutcome::Exited);
        };

        self.transition(EnginePhase::ApplyingPlayerAction)?;
        let result = match transition::execute(&character_action, &mut self.map) {
            Ok(result) => result,
            Err(error) => {
                debug!(
                    actor = %character_action.actor(),
                    action = character_action.as_str(),
                    %error,
                    "player action rejected"
                );
                self.transition(EnginePhase::AwaitingPlayerInput)?;
                return Ok(TurnOutcome::Rejected(error));
            }
        };

        self.transition(EnginePhase::RecomputingVisibility)?;
        self.refresh_visibility()?;

        self.transition(EnginePhase::EnemyTurns)?;
        let attacks = turns::run_enemy_turns(&mut self.map, self.player);
        self.turn += 1;

        if self.player_is_dead() {
            self.transition(EnginePhase::Defeated)?;
            info!(turn = self.turn, "player defeated");
            return Ok(TurnOutcome::Defeated {
                turn: self.turn,
                attacks,
            });
        }

        self.transition(EnginePhase::AwaitingPlayerInput)?;
        Ok(TurnOutcome::Completed {
            turn: self.turn,
            result,
            attacks,
        })
    }

    fn player_is_dead(&self) -> bool {
        !self
            .player_entity()
            .is_some_and(Entity::is_living_actor)
    }

    fn refresh_visibility(&mut self) -> Result<(), EngineError> {
        visibility::refresh(&mut self.map, self.player, self.config.view_radius, &self.fov)
    }

    fn transition(&mut self, to: EnginePhase) -> Result<(), EngineError> {
        if !self.phase.can_transition_to(to) {
            return Err(EngineError::PhaseViolation {
                from: self.phase,
                to,
            });
        }
        debug!(from = %self.phase, %to, "engine phase");
        self.phase = to;
        Ok(())
    }
}
