//! Authoritative encounter state representation.
//!
//! This module owns the data structures that describe the party, the enemy
//! roster, the shared inventory and turn bookkeeping. Runtime layers clone or
//! query this state but mutate it exclusively through the engine.
pub mod types;

pub use types::{
    Combatant, CombatantTemplate, EnemyId, HostileTraits, HpChange, Inventory, ItemKind, Party,
    Phase, Role, Roster, Skill, SkillId, SkillKind, Stats, TargetMode, TurnState, UnitRef,
};

/// Canonical snapshot of one encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    pub party: Party,
    pub roster: Roster,
    pub inventory: Inventory,
    pub turn: TurnState,
}

impl EncounterState {
    /// Creates a fresh encounter positioned at `PlayerTurn(0)`.
    pub fn new(party: Party, roster: Roster, inventory: Inventory) -> Self {
        Self {
            party,
            roster,
            inventory,
            turn: TurnState::new(),
        }
    }

    pub fn unit(&self, unit: UnitRef) -> Option<&Combatant> {
        match unit {
            UnitRef::Ally(index) => self.party.get(index),
            UnitRef::Enemy(id) => self.roster.get(id),
        }
    }

    pub fn unit_mut(&mut self, unit: UnitRef) -> Option<&mut Combatant> {
        match unit {
            UnitRef::Ally(index) => self.party.get_mut(index),
            UnitRef::Enemy(id) => self.roster.get_mut(id),
        }
    }

    /// Display name of a unit, or an empty string for a dangling reference.
    pub fn name_of(&self, unit: UnitRef) -> &str {
        self.unit(unit).map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Party member whose decision the scheduler is waiting for, if any.
    pub fn awaiting_actor(&self) -> Option<usize> {
        match self.turn.phase {
            Phase::PlayerTurn(index) if self.turn.awaiting => Some(index),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.turn.phase.is_terminal()
    }
}
