//! Combatant record and its clamped mutation primitives.
//!
//! Every write to `hp`/`mp` passes through [`Combatant::apply_hp_delta`] or
//! [`Combatant::apply_mp_delta`], which keep `0 ≤ value ≤ max`. A combatant at
//! 0 HP carries no enhancement state: buff, regen and guard are cleared by the
//! same write that kills it.

use super::skill::{Skill, SkillId};

/// Immutable base combat stats.
///
/// `spd` is carried for completeness; turn order is fixed by party position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub atk: u32,
    pub def: u32,
    pub matk: u32,
    pub mdef: u32,
    pub spd: u32,
    pub rec: u32,
}

impl Stats {
    pub const fn new(atk: u32, def: u32, matk: u32, mdef: u32, spd: u32, rec: u32) -> Self {
        Self {
            atk,
            def,
            matk,
            mdef,
            spd,
            rec,
        }
    }
}

/// Enemy-only bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileTraits {
    pub is_boss: bool,
    pub has_split: bool,
    pub death_logged: bool,
    /// Units that replace this boss when it splits. Empty for non-bosses.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offspring: Vec<CombatantTemplate>,
}

impl HostileTraits {
    pub fn minion() -> Self {
        Self::default()
    }

    pub fn boss(offspring: Vec<CombatantTemplate>) -> Self {
        Self {
            is_boss: true,
            offspring,
            ..Self::default()
        }
    }
}

/// Capability set of a combatant.
///
/// Roles are data attached to one common record; special actions are
/// dispatched on the variant rather than through a type hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Can cover allies and grant party-wide attack buffs.
    Guardian,
    /// Owns attack skills and can meditate.
    Caster { skills: Vec<Skill> },
    /// Owns heal/revive skills and can pray for regeneration.
    Restorer { skills: Vec<Skill> },
    /// Enemy unit driven by the enemy policy.
    Hostile(HostileTraits),
}

impl Role {
    pub fn skills(&self) -> &[Skill] {
        match self {
            Role::Caster { skills } | Role::Restorer { skills } => skills,
            Role::Guardian | Role::Hostile(_) => &[],
        }
    }

    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills().iter().find(|skill| skill.id == id)
    }

    #[inline]
    pub fn is_guardian(&self) -> bool {
        matches!(self, Role::Guardian)
    }

    #[inline]
    pub fn is_caster(&self) -> bool {
        matches!(self, Role::Caster { .. })
    }

    #[inline]
    pub fn is_restorer(&self) -> bool {
        matches!(self, Role::Restorer { .. })
    }

    pub fn hostile(&self) -> Option<&HostileTraits> {
        match self {
            Role::Hostile(traits) => Some(traits),
            _ => None,
        }
    }

    pub fn hostile_mut(&mut self) -> Option<&mut HostileTraits> {
        match self {
            Role::Hostile(traits) => Some(traits),
            _ => None,
        }
    }
}

/// Blueprint used to create combatants at full resources.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantTemplate {
    pub name: String,
    pub max_hp: u32,
    pub max_mp: u32,
    pub stats: Stats,
    pub role: Role,
}

impl CombatantTemplate {
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        max_mp: u32,
        stats: Stats,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            max_hp,
            max_mp,
            stats,
            role,
        }
    }

    /// Creates a fresh combatant at full HP and MP.
    pub fn spawn(&self) -> Combatant {
        Combatant::new(
            self.name.clone(),
            self.max_hp,
            self.max_mp,
            self.stats,
            self.role.clone(),
        )
    }
}

/// Before/after view of a single HP write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpChange {
    pub before: u32,
    pub after: u32,
}

impl HpChange {
    /// True when this write took the unit from alive to dead.
    #[inline]
    pub fn killed(self) -> bool {
        self.before > 0 && self.after == 0
    }
}

/// A party member or enemy unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    max_hp: u32,
    max_mp: u32,
    hp: u32,
    mp: u32,
    pub stats: Stats,
    is_covering: bool,
    buff_turns: u32,
    regen_turns: u32,
    pub role: Role,
}

impl Combatant {
    /// Creates a combatant at full HP and MP.
    pub fn new(name: impl Into<String>, max_hp: u32, max_mp: u32, stats: Stats, role: Role) -> Self {
        Self {
            name: name.into(),
            max_hp,
            max_mp,
            hp: max_hp,
            mp: max_mp,
            stats,
            is_covering: false,
            buff_turns: 0,
            regen_turns: 0,
            role,
        }
    }

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn mp(&self) -> u32 {
        self.mp
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[inline]
    pub fn max_mp(&self) -> u32 {
        self.max_mp
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn is_covering(&self) -> bool {
        self.is_covering
    }

    #[inline]
    pub fn buff_turns(&self) -> u32 {
        self.buff_turns
    }

    #[inline]
    pub fn regen_turns(&self) -> u32 {
        self.regen_turns
    }

    #[inline]
    pub fn is_buffed(&self) -> bool {
        self.buff_turns > 0
    }

    /// Adds a signed amount to HP, clamped to `[0, max_hp]`.
    ///
    /// Landing on 0 clears buff, regen and guard.
    pub fn apply_hp_delta(&mut self, amount: i64) -> HpChange {
        let before = self.hp;
        let next = (i64::from(self.hp) + amount).clamp(0, i64::from(self.max_hp));
        self.hp = next as u32;
        if self.hp == 0 {
            self.clear_enhancements();
        }
        HpChange {
            before,
            after: self.hp,
        }
    }

    /// Adds a signed amount to MP, clamped to `[0, max_mp]`.
    ///
    /// Returns the MP value after the write.
    pub fn apply_mp_delta(&mut self, amount: i64) -> u32 {
        let next = (i64::from(self.mp) + amount).clamp(0, i64::from(self.max_mp));
        self.mp = next as u32;
        self.mp
    }

    /// Brings a dead combatant back with `hp_amount` HP, at least 1 and at
    /// most `max_hp`.
    ///
    /// Returns `false` (and changes nothing) when the combatant is alive or
    /// has no HP pool to return to.
    pub fn revive(&mut self, hp_amount: u32) -> bool {
        if self.hp > 0 {
            return false;
        }
        self.hp = hp_amount.max(1).min(self.max_hp);
        self.hp > 0
    }

    /// Sets the remaining buff duration. Ignored on a dead combatant.
    pub(crate) fn grant_buff(&mut self, turns: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.buff_turns = turns;
        true
    }

    /// Sets the remaining regen duration. Ignored on a dead combatant.
    pub(crate) fn grant_regen(&mut self, turns: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.regen_turns = turns;
        true
    }

    /// Raises the guard flag. Ignored on a dead combatant.
    pub(crate) fn raise_guard(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.is_covering = true;
        true
    }

    /// Lowers the guard flag, returning whether it was raised.
    pub(crate) fn lower_guard(&mut self) -> bool {
        std::mem::replace(&mut self.is_covering, false)
    }

    /// Decrements the buff counter, returning the remaining turns.
    pub(crate) fn decrement_buff(&mut self) -> u32 {
        self.buff_turns = self.buff_turns.saturating_sub(1);
        self.buff_turns
    }

    /// Decrements the regen counter, returning the remaining turns.
    pub(crate) fn decrement_regen(&mut self) -> u32 {
        self.regen_turns = self.regen_turns.saturating_sub(1);
        self.regen_turns
    }

    fn clear_enhancements(&mut self) {
        self.buff_turns = 0;
        self.regen_turns = 0;
        self.is_covering = false;
    }
}
