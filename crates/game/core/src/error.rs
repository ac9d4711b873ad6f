//! Error types for the battle engine API.
//!
//! The rules themselves have no failure paths: insufficient resources are a
//! branch (see resurrection's sacrifice mode) and every numeric write is
//! clamped. What remains are contract violations by the caller, such as
//! submitting a decision the scheduler did not ask for.

use crate::action::ActionKind;
use crate::state::{Phase, UnitRef};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input - should not retry without changes.
    Validation,
    /// The encounter is over; nothing further will be accepted.
    Terminal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Terminal => "terminal",
        }
    }
}

/// Errors surfaced while driving the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("encounter already ended ({phase:?})")]
    EncounterOver { phase: Phase },

    #[error("no decision is pending (phase {phase:?})")]
    NotAwaitingDecision { phase: Phase },

    #[error("action {action:?} is not legal for ally #{actor}")]
    IllegalAction { actor: usize, action: ActionKind },

    #[error("target {target:?} is not offered for action {action:?}")]
    IllegalTarget {
        action: ActionKind,
        target: Option<UnitRef>,
    },
}

impl BattleError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EncounterOver { .. } => ErrorSeverity::Terminal,
            Self::NotAwaitingDecision { .. }
            | Self::IllegalAction { .. }
            | Self::IllegalTarget { .. } => ErrorSeverity::Validation,
        }
    }
}
