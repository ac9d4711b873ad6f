//! Encounter definitions.

use battle_core::{CombatantTemplate, EncounterState, Inventory, ItemKind, Party, Roster};

use crate::presets;

/// Everything needed to start an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSpec {
    pub party: Vec<CombatantTemplate>,
    pub enemies: Vec<CombatantTemplate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<(ItemKind, u32)>,
}

impl EncounterSpec {
    /// Hero, Wizard and Healer against King Slime with the stock items.
    pub fn standard() -> Self {
        Self {
            party: presets::standard_party(),
            enemies: presets::standard_enemies(),
            items: vec![
                (ItemKind::Potion, 3),
                (ItemKind::Ether, 2),
                (ItemKind::Phoenix, 1),
            ],
        }
    }

    /// Spawns every combatant at full resources, positioned at the first turn.
    pub fn build(&self) -> EncounterState {
        EncounterState::new(
            Party::new(self.party.iter().map(CombatantTemplate::spawn)),
            Roster::new(self.enemies.iter().map(CombatantTemplate::spawn)),
            Inventory::new(self.items.iter().copied()),
        )
    }
}

impl Default for EncounterSpec {
    fn default() -> Self {
        Self::standard()
    }
}
