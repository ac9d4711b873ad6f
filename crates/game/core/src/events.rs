//! Events emitted by the engine for presentation collaborators.
//!
//! The engine never renders, sleeps or logs. Everything a collaborator needs to
//! narrate, animate or pace an encounter is carried by [`BattleEvent`]s, in the
//! order the underlying mutations happened.

use crate::action::ActionKind;
use crate::policy::EnemyIntent;
use crate::state::{EnemyId, Phase, UnitRef};

/// Kinds of timed or flagged status tracked by the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// Attack multiplier, counted in owner turns.
    Buff,
    /// Cover flag, cleared after the enemy phase.
    Guard,
    /// Heal over time, counted in owner turns.
    Regen,
}

/// How a unit came back to life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReviveMode {
    /// Resurrection paid with MP.
    Spell,
    /// Resurrection paid with the caster's life.
    Sacrifice,
    /// Revival item.
    Item,
}

/// Coarse scheduler phase reported by [`BattleEvent::PhaseChanged`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseKind {
    PlayerPhase,
    EnemyPhase,
    Victory,
    Defeat,
}

impl From<Phase> for PhaseKind {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::PlayerTurn(_) => PhaseKind::PlayerPhase,
            Phase::EnemyPhase => PhaseKind::EnemyPhase,
            Phase::Victory => PhaseKind::Victory,
            Phase::Defeat => PhaseKind::Defeat,
        }
    }
}

/// Final result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Action announced before it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclaredAction {
    Party(ActionKind),
    Enemy(EnemyIntent),
}

/// Discriminated event stream produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A unit's turn opened.
    TurnStarted { unit: UnitRef },

    /// A unit committed to an action; its effects follow.
    ActionDeclared {
        actor: UnitRef,
        action: DeclaredAction,
    },

    DamageDealt {
        target: UnitRef,
        amount: u32,
        critical: bool,
    },

    HealApplied { target: UnitRef, amount: u32 },

    /// Regeneration healed its owner at a turn boundary.
    RegenTicked { target: UnitRef, amount: u32 },

    MpSpent { unit: UnitRef, amount: u32 },

    MpRestored { target: UnitRef, amount: u32 },

    StatusGranted {
        target: UnitRef,
        kind: StatusKind,
        turns: u32,
    },

    StatusExpired { target: UnitRef, kind: StatusKind },

    /// A covering guardian took a hit meant for `intended`.
    GuardRedirected { guardian: UnitRef, intended: UnitRef },

    UnitDefeated { unit: UnitRef },

    UnitRevived {
        unit: UnitRef,
        mode: ReviveMode,
        hp: u32,
    },

    /// A revival aimed at a living unit did not apply.
    RevivalIgnored { unit: UnitRef },

    /// A boss crossed its split threshold; the roster change follows.
    BossTrembling { unit: EnemyId },

    /// A lineup slot was replaced by one or more new units.
    RosterChanged { removed: EnemyId, added: Vec<EnemyId> },

    PhaseChanged { to: PhaseKind },

    EncounterEnded { result: Outcome },

    /// Presentation should wait this long before showing what follows.
    Pause { millis: u32 },
}

impl BattleEvent {
    /// Whether this event records a change to unit state.
    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            BattleEvent::DamageDealt { .. }
                | BattleEvent::HealApplied { .. }
                | BattleEvent::RegenTicked { .. }
                | BattleEvent::MpSpent { .. }
                | BattleEvent::MpRestored { .. }
                | BattleEvent::StatusGranted { .. }
                | BattleEvent::StatusExpired { .. }
                | BattleEvent::GuardRedirected { .. }
                | BattleEvent::UnitDefeated { .. }
                | BattleEvent::UnitRevived { .. }
                | BattleEvent::RevivalIgnored { .. }
                | BattleEvent::BossTrembling { .. }
                | BattleEvent::RosterChanged { .. }
        )
    }

    /// Whether this event is a pacing directive.
    pub fn is_presentation(&self) -> bool {
        matches!(self, BattleEvent::Pause { .. })
    }
}

/// SHA-256 over the canonical bincode encoding of an event stream.
///
/// Each event is length-prefixed so that adjacent encodings cannot alias.
/// Two runs are byte-identical exactly when their digests match.
#[cfg(feature = "serde")]
pub fn stream_digest(events: &[BattleEvent]) -> Result<[u8; 32], bincode::Error> {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    for event in events {
        let bytes = bincode::serialize(event)?;
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(&bytes);
    }
    Ok(hasher.finalize().into())
}
