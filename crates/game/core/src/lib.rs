//! Deterministic combat rules for party-versus-enemy turn-based encounters.
//!
//! `battle-core` defines the canonical rules (combatants, combat math, status
//! ledger, enemy policy, turn scheduler) and exposes pure APIs that the async
//! runtime and offline tools reuse. All state mutation flows through
//! [`engine::BattleEngine`]; presentation layers only observe the
//! [`events::BattleEvent`] stream it produces.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod policy;
pub mod state;
pub mod status;

pub use action::{ActionKind, Decision, LegalAction, TargetSet, legal_actions};
pub use combat::{DamageRoll, HealProfile, heal_amount, magic_damage, physical_damage};
pub use config::{BattleConfig, PacingConfig};
pub use engine::{BattleEngine, Step, StepStatus};
pub use env::{PcgRng, RandomSource, ReplayRng};
pub use error::{BattleError, ErrorSeverity};
#[cfg(feature = "serde")]
pub use events::stream_digest;
pub use events::{BattleEvent, DeclaredAction, Outcome, PhaseKind, ReviveMode, StatusKind};
pub use policy::{EnemyIntent, EnemyPolicy};
pub use state::{
    Combatant, CombatantTemplate, EncounterState, EnemyId, HostileTraits, Inventory, ItemKind,
    Party, Phase, Role, Roster, Skill, SkillId, SkillKind, Stats, TargetMode, UnitRef,
};
