//! Party and enemy roster containers.
//!
//! The party has fixed membership. The roster is an arena of every enemy ever
//! created plus a lineup of the ids currently on the field; a split swaps one
//! lineup slot for two without invalidating the id of the retired boss.

use arrayvec::ArrayVec;

use super::combatant::Combatant;
use super::common::EnemyId;
use crate::config::BattleConfig;

/// Ordered party members. Members are never added or removed after creation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    members: ArrayVec<Combatant, { BattleConfig::MAX_PARTY }>,
}

impl Party {
    /// Builds a party, keeping at most [`BattleConfig::MAX_PARTY`] members.
    pub fn new(members: impl IntoIterator<Item = Combatant>) -> Self {
        Self {
            members: members
                .into_iter()
                .take(BattleConfig::MAX_PARTY)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Combatant> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut()
    }

    /// Indices of living members in party order.
    pub fn living(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.is_alive())
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of dead members in party order.
    pub fn fallen(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| !member.is_alive())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn all_dead(&self) -> bool {
        self.members.iter().all(|member| !member.is_alive())
    }

    /// First living guardian with its guard raised.
    pub fn active_guardian(&self) -> Option<usize> {
        self.members.iter().position(|member| {
            member.role.is_guardian() && member.is_alive() && member.is_covering()
        })
    }
}

/// Enemy arena plus the current lineup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    arena: Vec<Combatant>,
    lineup: Vec<EnemyId>,
}

impl Roster {
    pub fn new(enemies: impl IntoIterator<Item = Combatant>) -> Self {
        let mut roster = Self::default();
        for enemy in enemies {
            let id = roster.allocate(enemy);
            roster.lineup.push(id);
        }
        roster
    }

    fn allocate(&mut self, enemy: Combatant) -> EnemyId {
        let id = EnemyId(self.arena.len() as u32);
        self.arena.push(enemy);
        id
    }

    /// Ids currently on the field, in acting order.
    pub fn lineup(&self) -> &[EnemyId] {
        &self.lineup
    }

    pub fn get(&self, id: EnemyId) -> Option<&Combatant> {
        self.arena.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Combatant> {
        self.arena.get_mut(id.0 as usize)
    }

    /// Lineup entries with their records.
    pub fn fielded(&self) -> impl Iterator<Item = (EnemyId, &Combatant)> {
        self.lineup
            .iter()
            .filter_map(|&id| self.get(id).map(|enemy| (id, enemy)))
    }

    /// Living lineup ids in acting order.
    pub fn living(&self) -> Vec<EnemyId> {
        self.fielded()
            .filter(|(_, enemy)| enemy.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn all_dead(&self) -> bool {
        self.fielded().all(|(_, enemy)| !enemy.is_alive())
    }

    /// True when `id` is currently on the field.
    pub fn is_fielded(&self, id: EnemyId) -> bool {
        self.lineup.contains(&id)
    }

    /// Replaces the lineup slot of `id` with `replacements`, in order.
    ///
    /// The retired record stays in the arena. Returns the new ids, or an empty
    /// vector when `id` is not on the field.
    pub(crate) fn replace(&mut self, id: EnemyId, replacements: Vec<Combatant>) -> Vec<EnemyId> {
        let Some(slot) = self.lineup.iter().position(|&fielded| fielded == id) else {
            return Vec::new();
        };
        let added: Vec<EnemyId> = replacements
            .into_iter()
            .map(|enemy| self.allocate(enemy))
            .collect();
        self.lineup.splice(slot..=slot, added.iter().copied());
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::combatant::{HostileTraits, Role, Stats};

    fn slime(name: &str) -> Combatant {
        Combatant::new(name, 10, 0, Stats::default(), Role::Hostile(HostileTraits::minion()))
    }

    #[test]
    fn replace_keeps_position_and_retired_record() {
        let mut roster = Roster::new([slime("left"), slime("boss"), slime("right")]);
        let boss = roster.lineup()[1];

        let added = roster.replace(boss, vec![slime("a"), slime("b")]);

        assert_eq!(added.len(), 2);
        let names: Vec<&str> = roster.fielded().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(names, ["left", "a", "b", "right"]);
        assert!(!roster.is_fielded(boss));
        assert_eq!(roster.get(boss).map(|e| e.name.as_str()), Some("boss"));
    }

    #[test]
    fn replace_unknown_id_is_noop() {
        let mut roster = Roster::new([slime("only")]);
        assert!(roster.replace(EnemyId(42), vec![slime("x")]).is_empty());
        assert_eq!(roster.lineup().len(), 1);
    }

    #[test]
    fn party_caps_membership() {
        let members = (0..10).map(|i| {
            Combatant::new(format!("m{i}"), 10, 0, Stats::default(), Role::Guardian)
        });
        assert_eq!(Party::new(members).len(), BattleConfig::MAX_PARTY);
    }
}
