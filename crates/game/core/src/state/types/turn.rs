use super::common::EnemyId;

/// Scheduler state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Party member at this index is (or is about to be) acting.
    PlayerTurn(usize),
    /// Every fielded enemy acts once, in lineup order.
    EnemyPhase,
    /// All enemies are dead. Terminal.
    Victory,
    /// All party members are dead. Terminal.
    Defeat,
}

impl Phase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Victory | Phase::Defeat)
    }
}

/// Turn bookkeeping owned by the scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub phase: Phase,

    /// Completed enemy phases. Starts at 0.
    pub round: u32,

    /// Whether the current `PlayerTurn` has already requested a decision.
    ///
    /// Keeps repeated advances from re-announcing the same turn.
    pub awaiting: bool,

    /// Bosses that have trembled but whose roster replacement is still due.
    pub pending_splits: Vec<EnemyId>,

    /// Number of decisions resolved so far.
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            phase: Phase::PlayerTurn(0),
            round: 0,
            awaiting: false,
            pending_splits: Vec::new(),
            nonce: 0,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
