/// Where the engine is inside one player turn.
///
/// ```text
/// RecomputingVisibility ──(construction)──▶ AwaitingPlayerInput
/// AwaitingPlayerInput ──▶ ApplyingPlayerAction ──▶ RecomputingVisibility
///                                 │ (rejected)             │
///                                 ▼                        ▼
///                         AwaitingPlayerInput         EnemyTurns ──▶ AwaitingPlayerInput
///                                                          │
///                                                          ▼
///                                                      Defeated
/// AwaitingPlayerInput | Defeated ──(quit)──▶ Exited
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnginePhase {
    AwaitingPlayerInput,
    ApplyingPlayerAction,
    RecomputingVisibility,
    EnemyTurns,
    /// The player died. Only quitting is possible.
    Defeated,
    /// Terminal.
    Exited,
}

impl EnginePhase {
    /// Whether the engine may move from `self` straight to `next`.
    pub fn can_transition_to(self, next: EnginePhase) -> bool {
        use EnginePhase::*;
        matches!(
            (self, next),
            (AwaitingPlayerInput, ApplyingPlayerAction)
                | (AwaitingPlayerInput, Exited)
                | (ApplyingPlayerAction, RecomputingVisibility)
                | (ApplyingPlayerAction, AwaitingPlayerInput)
                | (RecomputingVisibility, EnemyTurns)
                | (RecomputingVisibility, AwaitingPlayerInput)
                | (EnemyTurns, AwaitingPlayerInput)
                | (EnemyTurns, Defeated)
                | (Defeated, Exited)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, EnginePhase::Exited)
    }
}
