//! Error types for the action pipeline and the turn engine.

use std::convert::Infallible;

use super::EnginePhase;
use crate::action::{MeleeError, MoveError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

impl<E: GameError> GameError for TransitionPhaseError<E> {
    fn severity(&self) -> ErrorSeverity {
        self.error.severity()
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}

/// An in-world action that was rejected. The map is left untouched when the
/// failure happens in `pre_validate`, which is where every player-reachable
/// rejection is raised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("melee action failed: {0}")]
    Melee(TransitionPhaseError<MeleeError>),

    #[error("wait action failed: {0}")]
    Wait(TransitionPhaseError<Infallible>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Move(e) => e.phase,
            ExecuteError::Melee(e) => e.phase,
            ExecuteError::Wait(e) => e.phase,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(e) => e.severity(),
            ExecuteError::Melee(e) => e.severity(),
            ExecuteError::Wait(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(e) => e.error_code(),
            ExecuteError::Melee(e) => e.error_code(),
            ExecuteError::Wait(e) => e.error_code(),
        }
    }
}

/// Errors that stop the engine from processing input at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("player {0} is not on the map")]
    PlayerNotFound(EntityId),

    #[error("player {0} is not a living actor")]
    PlayerNotActor(EntityId),

    #[error("the player has been defeated; only quit is accepted")]
    PlayerDefeated,

    #[error("engine has exited")]
    Exited,

    #[error("illegal engine phase transition {from} -> {to}")]
    PhaseViolation { from: EnginePhase, to: EnginePhase },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        use EngineError::*;
        match self {
            PlayerNotFound(_) | PlayerNotActor(_) | PlayerDefeated => ErrorSeverity::Validation,
            PhaseViolation { .. } => ErrorSeverity::Internal,
            Exited => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use EngineError::*;
        match self {
            PlayerNotFound(_) => "ENGINE_PLAYER_NOT_FOUND",
            PlayerNotActor(_) => "ENGINE_PLAYER_NOT_ACTOR",
            PlayerDefeated => "ENGINE_PLAYER_DEFEATED",
            Exited => "ENGINE_EXITED",
            PhaseViolation { .. } => "ENGINE_PHASE_VIOLATION",
        }
    }
}
