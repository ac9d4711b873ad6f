//! Physical and magic damage.

use crate::env::RandomSource;
use crate::state::{Combatant, Skill, SkillId};

/// Attack multiplier while the attacker's buff is active.
pub const BUFF_MULTIPLIER: f64 = 1.25;

/// Probability that a physical attack is critical.
pub const PHYSICAL_CRIT_CHANCE: f64 = 0.20;

/// Damage multiplier of a critical physical attack.
pub const PHYSICAL_CRIT_MULTIPLIER: f64 = 1.5;

/// Result of a damage computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    /// Damage to apply as a negative HP delta. Always at least 1.
    pub amount: u32,
    pub critical: bool,
}

#[inline]
fn truncate(value: f64) -> u32 {
    value.max(0.0).floor() as u32
}

#[inline]
fn buffed(base: u32, attacker: &Combatant) -> u32 {
    if attacker.is_buffed() {
        truncate(f64::from(base) * BUFF_MULTIPLIER)
    } else {
        base
    }
}

/// Computes a physical attack from `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// base = floor(atk * uniform(0.9, 1.1))
/// if buffed:   base = floor(base * 1.25)
/// if crit:     base = floor(base * 1.5)       (p = 0.20)
/// final = max(1, base - floor(def / 2))
/// ```
pub fn physical_damage(
    attacker: &Combatant,
    defender: &Combatant,
    rng: &mut (impl RandomSource + ?Sized),
) -> DamageRoll {
    let variance = rng.uniform(0.9, 1.1);
    let mut base = truncate(f64::from(attacker.stats.atk) * variance);
    base = buffed(base, attacker);

    let critical = rng.chance(PHYSICAL_CRIT_CHANCE);
    if critical {
        base = truncate(f64::from(base) * PHYSICAL_CRIT_MULTIPLIER);
    }

    let reduction = defender.stats.def / 2;
    DamageRoll {
        amount: base.saturating_sub(reduction).max(1),
        critical,
    }
}

/// Spell multiplier keyed by skill id.
pub fn magic_multiplier(id: SkillId) -> f64 {
    match id {
        SkillId::Fire => 1.5,
        SkillId::Fira => 1.1,
        SkillId::Meteor => 2.5,
        _ => 1.5,
    }
}

/// Computes a spell hit from `caster` against `defender`.
///
/// # Formula
///
/// ```text
/// base = floor(matk * multiplier(skill) + uniform(0, 20))
/// if buffed:   base = floor(base * 1.25)
/// final = max(1, base - floor(mdef / 3))
/// ```
pub fn magic_damage(
    caster: &Combatant,
    defender: &Combatant,
    skill: &Skill,
    rng: &mut (impl RandomSource + ?Sized),
) -> DamageRoll {
    let scaled = f64::from(caster.stats.matk) * magic_multiplier(skill.id);
    let mut base = truncate(scaled + rng.uniform(0.0, 20.0));
    base = buffed(base, caster);

    let reduction = defender.stats.mdef / 3;
    DamageRoll {
        amount: base.saturating_sub(reduction).max(1),
        critical: false,
    }
}
