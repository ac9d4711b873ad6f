//! Carrying out enemy intents.

use crate::combat::{HealProfile, heal_amount, physical_damage};
use crate::env::RandomSource;
use crate::events::BattleEvent;
use crate::state::{EncounterState, EnemyId, UnitRef};

use super::EnemyIntent;

/// Fixed part of the area attack's raw damage.
pub const AREA_BASE: u32 = 40;
/// Width of the area attack's random part.
pub const AREA_SPREAD: f64 = 20.0;
/// Minimum area damage before guard mitigation.
pub const AREA_FLOOR: u32 = 5;
/// Share of damage that gets through an active guard.
pub const GUARD_RATIO: f64 = 0.5;

#[inline]
fn guarded(amount: u32) -> u32 {
    (f64::from(amount) * GUARD_RATIO).floor() as u32
}

/// Applies `amount` damage to party member `index`, reporting its death.
fn hit_ally(
    state: &mut EncounterState,
    index: usize,
    amount: u32,
    critical: bool,
    events: &mut Vec<BattleEvent>,
) {
    let Some(member) = state.party.get_mut(index) else {
        return;
    };
    let change = member.apply_hp_delta(-i64::from(amount));
    let target = UnitRef::Ally(index);
    events.push(BattleEvent::DamageDealt {
        target,
        amount,
        critical,
    });
    if change.killed() {
        events.push(BattleEvent::UnitDefeated { unit: target });
    }
}

/// Resolves `intent` for enemy `id`.
///
/// Does nothing when the enemy is missing or dead.
pub fn resolve(
    state: &mut EncounterState,
    id: EnemyId,
    intent: EnemyIntent,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    if !state.roster.get(id).is_some_and(|enemy| enemy.is_alive()) {
        return;
    }
    match intent {
        EnemyIntent::SelfHeal => self_heal(state, id, rng, events),
        EnemyIntent::Sweep => sweep(state, rng, events),
        EnemyIntent::Strike => strike(state, id, rng, events),
    }
}

fn self_heal(
    state: &mut EncounterState,
    id: EnemyId,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    let Some(enemy) = state.roster.get_mut(id) else {
        return;
    };
    let amount = heal_amount(enemy, HealProfile::SINGLE, rng);
    enemy.apply_hp_delta(i64::from(amount));
    events.push(BattleEvent::HealApplied {
        target: UnitRef::Enemy(id),
        amount,
    });
}

/// Area attack. Guard halves damage in place for every covered member.
fn sweep(
    state: &mut EncounterState,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    for index in state.party.living() {
        let Some(member) = state.party.get(index) else {
            continue;
        };
        let raw = rng.uniform(0.0, AREA_SPREAD).floor() as u32 + AREA_BASE;
        let mut amount = raw.saturating_sub(member.stats.def / 2).max(AREA_FLOOR);
        if state.party.active_guardian().is_some_and(|guardian| guardian != index) {
            amount = guarded(amount);
        }
        hit_ally(state, index, amount, false, events);
    }
}

/// Single-target attack. An active guard takes a fresh, halved hit instead.
fn strike(
    state: &mut EncounterState,
    id: EnemyId,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    let living = state.party.living();
    if living.is_empty() {
        return;
    }
    let intended = living[rng.pick_index(living.len())];

    let (Some(enemy), Some(member)) = (state.roster.get(id), state.party.get(intended)) else {
        return;
    };
    let roll = physical_damage(enemy, member, rng);

    match state.party.active_guardian() {
        Some(guardian) if guardian != intended => {
            let Some(cover) = state.party.get(guardian) else {
                return;
            };
            let redirected = physical_damage(enemy, cover, rng);
            events.push(BattleEvent::GuardRedirected {
                guardian: UnitRef::Ally(guardian),
                intended: UnitRef::Ally(intended),
            });
            hit_ally(
                state,
                guardian,
                guarded(redirected.amount),
                redirected.critical,
                events,
            );
        }
        _ => hit_ally(state, intended, roll.amount, roll.critical, events),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ReplayRng;
    use crate::state::{Combatant, HostileTraits, Inventory, Party, Role, Roster, Stats};
    use crate::events::StatusKind;
    use crate::status;

    fn encounter() -> EncounterState {
        let hero = Combatant::new("Hero", 240, 80, Stats::new(50, 45, 20, 30, 30, 25), Role::Guardian);
        let wizard = Combatant::new(
            "Wizard",
            180,
            150,
            Stats::new(20, 20, 60, 50, 50, 15),
            Role::Caster { skills: Vec::new() },
        );
        let slime = Combatant::new(
            "Slime",
            300,
            0,
            Stats::new(70, 25, 30, 20, 40, 40),
            Role::Hostile(HostileTraits::minion()),
        );
        EncounterState::new(Party::new([hero, wizard]), Roster::new([slime]), Inventory::default())
    }

    fn cover(state: &mut EncounterState) {
        let mut sink = Vec::new();
        status::grant(state, UnitRef::Ally(0), StatusKind::Guard, 1, &mut sink);
    }

    #[test]
    fn strike_redirects_to_guardian_with_fresh_halved_roll() {
        let mut state = encounter();
        cover(&mut state);
        let slime = state.roster.lineup()[0];
        // pick 0.99 -> wizard; wizard roll: variance, crit; guardian roll: variance, crit
        let mut rng = ReplayRng::new([0.99, 1.0, 1.0, 0.5, 1.0]);
        let mut events = Vec::new();

        resolve(&mut state, slime, EnemyIntent::Strike, &mut rng, &mut events);

        // guardian roll: floor(70 * 1.0) = 70 - 22 = 48, halved -> 24
        assert_eq!(rng.consumed(), 5);
        assert_eq!(state.party.get(1).map(Combatant::hp), Some(180));
        assert_eq!(state.party.get(0).map(Combatant::hp), Some(240 - 24));
        assert_eq!(
            events,
            [
                BattleEvent::GuardRedirected {
                    guardian: UnitRef::Ally(0),
                    intended: UnitRef::Ally(1)
                },
                BattleEvent::DamageDealt {
                    target: UnitRef::Ally(0),
                    amount: 24,
                    critical: false
                },
            ]
        );
    }

    #[test]
    fn strike_on_guardian_itself_is_not_redirected() {
        let mut state = encounter();
        cover(&mut state);
        let slime = state.roster.lineup()[0];
        let mut rng = ReplayRng::new([0.0, 0.5, 1.0]);
        let mut events = Vec::new();

        resolve(&mut state, slime, EnemyIntent::Strike, &mut rng, &mut events);

        assert_eq!(rng.consumed(), 3);
        assert_eq!(state.party.get(0).map(Combatant::hp), Some(240 - 48));
    }

    #[test]
    fn sweep_halves_in_place_for_covered_allies() {
        let mut state = encounter();
        cover(&mut state);
        let slime = state.roster.lineup()[0];
        // raw = 40 + floor(10) = 50 for both members
        let mut rng = ReplayRng::new([0.5]);
        let mut events = Vec::new();

        resolve(&mut state, slime, EnemyIntent::Sweep, &mut rng, &mut events);

        // hero: 50 - 22 = 28 (guardian not mitigated); wizard: (50 - 10) / 2 = 20
        assert_eq!(state.party.get(0).map(Combatant::hp), Some(240 - 28));
        assert_eq!(state.party.get(1).map(Combatant::hp), Some(180 - 20));
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn sweep_damage_respects_floor() {
        let mut state = encounter();
        let slime = state.roster.lineup()[0];
        if let Some(hero) = state.party.get_mut(0) {
            hero.stats.def = 500;
        }
        let mut rng = ReplayRng::new([0.0]);
        let mut events = Vec::new();

        resolve(&mut state, slime, EnemyIntent::Sweep, &mut rng, &mut events);

        assert_eq!(state.party.get(0).map(Combatant::hp), Some(240 - AREA_FLOOR));
    }

    #[test]
    fn self_heal_is_free_and_clamped() {
        let mut state = encounter();
        let slime = state.roster.lineup()[0];
        if let Some(enemy) = state.roster.get_mut(slime) {
            enemy.apply_hp_delta(-10);
        }
        let mut rng = ReplayRng::new([0.5, 1.0]);
        let mut events = Vec::new();

        resolve(&mut state, slime, EnemyIntent::SelfHeal, &mut rng, &mut events);

        assert_eq!(state.roster.get(slime).map(Combatant::hp), Some(300));
        assert_eq!(
            events,
            [BattleEvent::HealApplied {
                target: UnitRef::Enemy(slime),
                amount: 40
            }]
        );
    }

    #[test]
    fn lethal_hit_reports_defeat() {
        let mut state = encounter();
        let slime = state.roster.lineup()[0];
        if let Some(wizard) = state.party.get_mut(1) {
            wizard.apply_hp_delta(-175);
        }
        let mut rng = ReplayRng::new([0.99, 0.5, 1.0]);
        let mut events = Vec::new();

        resolve(&mut state, slime, EnemyIntent::Strike, &mut rng, &mut events);

        assert!(events.contains(&BattleEvent::UnitDefeated {
            unit: UnitRef::Ally(1)
        }));
        assert_eq!(state.party.living(), [0]);
    }
}
