//! Healing amounts.

use crate::env::RandomSource;
use crate::state::Combatant;

/// Parameters of one healing computation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealProfile {
    pub multiplier: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
}

impl HealProfile {
    /// Single-target heal, also used by enemy self-heal.
    pub const SINGLE: Self = Self::new(1.0, 0.2, 1.5);

    /// Party-wide heal.
    pub const PARTY: Self = Self::new(0.9, 0.1, 1.5);

    pub const fn new(multiplier: f64, crit_chance: f64, crit_multiplier: f64) -> Self {
        Self {
            multiplier,
            crit_chance,
            crit_multiplier,
        }
    }
}

/// Computes a heal from `healer`'s `rec` stat.
///
/// # Formula
///
/// ```text
/// base = floor(rec * multiplier * uniform(0.9, 1.1))
/// if crit:  base = floor(base * crit_multiplier)    (p = crit_chance)
/// ```
pub fn heal_amount(
    healer: &Combatant,
    profile: HealProfile,
    rng: &mut (impl RandomSource + ?Sized),
) -> u32 {
    let variance = rng.uniform(0.9, 1.1);
    let mut base = (f64::from(healer.stats.rec) * profile.multiplier * variance)
        .max(0.0)
        .floor() as u32;
    if rng.chance(profile.crit_chance) {
        base = (f64::from(base) * profile.crit_multiplier).floor() as u32;
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ReplayRng;
    use crate::state::{Role, Stats};

    fn healer(rec: u32) -> Combatant {
        Combatant::new("healer", 100, 100, Stats::new(0, 0, 0, 0, 0, rec), Role::Guardian)
    }

    #[test]
    fn single_profile_crit() {
        // 75 * 1.0 * 1.0 = 75, crit -> 112
        let mut rng = ReplayRng::new([0.5, 0.1]);
        assert_eq!(heal_amount(&healer(75), HealProfile::SINGLE, &mut rng), 112);
    }

    #[test]
    fn party_profile_misses_crit_above_threshold() {
        // 75 * 0.9 * 1.0 = 67.5 -> 67, draw 0.15 >= 0.1 -> no crit
        let mut rng = ReplayRng::new([0.5, 0.15]);
        assert_eq!(heal_amount(&healer(75), HealProfile::PARTY, &mut rng), 67);
        assert_eq!(rng.consumed(), 2);
    }
}
