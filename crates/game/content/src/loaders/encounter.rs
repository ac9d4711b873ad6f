//! Encounter loader.

use std::path::Path;

use crate::encounter::EncounterSpec;
use crate::loaders::{LoadResult, read_file};

/// Loader for encounter definitions from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load an encounter from a RON file.
    ///
    /// RON format: [`EncounterSpec`]
    pub fn load(path: &Path) -> LoadResult<EncounterSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse an encounter from RON text and check it can be played.
    pub fn parse(content: &str) -> LoadResult<EncounterSpec> {
        let spec: EncounterSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;

        if spec.party.is_empty() {
            anyhow::bail!("Encounter has no party members");
        }
        if spec.party.len() > battle_core::BattleConfig::MAX_PARTY {
            anyhow::bail!(
                "Encounter party has {} members, at most {} are supported",
                spec.party.len(),
                battle_core::BattleConfig::MAX_PARTY
            );
        }
        if spec.enemies.is_empty() {
            anyhow::bail!("Encounter has no enemies");
        }
        if let Some(enemy) = spec.enemies.iter().find(|e| e.role.hostile().is_none()) {
            anyhow::bail!("Enemy '{}' does not have the hostile role", enemy.name);
        }
        if let Some(member) = spec.party.iter().find(|m| m.role.hostile().is_some()) {
            anyhow::bail!("Party member '{}' has the hostile role", member.name);
        }
        let offspring = spec
            .enemies
            .iter()
            .filter_map(|e| e.role.hostile())
            .flat_map(|traits| traits.offspring.iter());
        if let Some(empty) = spec
            .party
            .iter()
            .chain(&spec.enemies)
            .chain(offspring)
            .find(|t| t.max_hp == 0)
        {
            anyhow::bail!("Combatant '{}' has max_hp 0", empty.name);
        }

        Ok(spec)
    }
}
