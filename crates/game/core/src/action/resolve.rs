//! Resolving a chosen party action.
//!
//! Callers have already matched the decision against the legal-action list,
//! so affordability and target liveness hold on entry. Resolution only reads
//! the random source and writes through the combatant's clamped deltas.

use super::{ActionKind, Decision, LegalAction};
use crate::combat::{HealProfile, heal_amount, magic_damage, physical_damage};
use crate::env::RandomSource;
use crate::events::{BattleEvent, ReviveMode, StatusKind};
use crate::state::{EncounterState, ItemKind, Skill, SkillId, SkillKind, TargetMode, UnitRef};
use crate::status;

/// Applies `decision` for party member `actor`.
pub(crate) fn resolve(
    state: &mut EncounterState,
    actor: usize,
    decision: &Decision,
    legal: &LegalAction,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    match decision.action {
        ActionKind::Attack => {
            if let Some(target) = decision.target {
                attack(state, actor, target, rng, events);
            }
        }
        ActionKind::Encourage => {
            spend_mp(state, actor, legal.mp_cost, events);
            grant_party(state, actor, StatusKind::Buff, ActionKind::ENCOURAGE_TURNS, events);
        }
        ActionKind::Cover => {
            spend_mp(state, actor, legal.mp_cost, events);
            status::grant(state, UnitRef::Ally(actor), StatusKind::Guard, 1, events);
        }
        ActionKind::Cast(id) => cast(state, actor, id, decision.target, legal, rng, events),
        ActionKind::Meditate => {
            restore_mp(state, UnitRef::Ally(actor), ActionKind::MEDITATE_RESTORE, events);
        }
        ActionKind::Prayer => {
            grant_party(state, actor, StatusKind::Regen, ActionKind::PRAYER_TURNS, events);
        }
        ActionKind::UseItem(item) => {
            if let Some(target) = decision.target {
                use_item(state, item, target, events);
            }
        }
    }
}

fn spend_mp(state: &mut EncounterState, actor: usize, amount: u32, events: &mut Vec<BattleEvent>) {
    if amount == 0 {
        return;
    }
    if let Some(member) = state.party.get_mut(actor) {
        member.apply_mp_delta(-i64::from(amount));
        events.push(BattleEvent::MpSpent {
            unit: UnitRef::Ally(actor),
            amount,
        });
    }
}

fn restore_mp(state: &mut EncounterState, target: UnitRef, amount: u32, events: &mut Vec<BattleEvent>) {
    if let Some(unit) = state.unit_mut(target) {
        unit.apply_mp_delta(i64::from(amount));
        events.push(BattleEvent::MpRestored { target, amount });
    }
}

/// Applies damage to any unit. Party deaths are reported on the spot; enemy
/// deaths wait for the turn-close sweep.
fn damage(
    state: &mut EncounterState,
    target: UnitRef,
    amount: u32,
    critical: bool,
    events: &mut Vec<BattleEvent>,
) {
    let Some(unit) = state.unit_mut(target) else {
        return;
    };
    let change = unit.apply_hp_delta(-i64::from(amount));
    events.push(BattleEvent::DamageDealt {
        target,
        amount,
        critical,
    });
    if change.killed() && target.is_ally() {
        events.push(BattleEvent::UnitDefeated { unit: target });
    }
}

fn heal(state: &mut EncounterState, target: UnitRef, amount: u32, events: &mut Vec<BattleEvent>) {
    if let Some(unit) = state.unit_mut(target).filter(|unit| unit.is_alive()) {
        unit.apply_hp_delta(i64::from(amount));
        events.push(BattleEvent::HealApplied { target, amount });
    }
}

/// Grants `kind` to every living party member; the actor gets one extra turn.
fn grant_party(
    state: &mut EncounterState,
    actor: usize,
    kind: StatusKind,
    turns: u32,
    events: &mut Vec<BattleEvent>,
) {
    for index in state.party.living() {
        let turns = if index == actor { turns + 1 } else { turns };
        status::grant(state, UnitRef::Ally(index), kind, turns, events);
    }
}

fn attack(
    state: &mut EncounterState,
    actor: usize,
    target: UnitRef,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    let (Some(attacker), Some(defender)) = (state.party.get(actor), state.unit(target)) else {
        return;
    };
    let roll = physical_damage(attacker, defender, rng);
    damage(state, target, roll.amount, roll.critical, events);
}

fn cast(
    state: &mut EncounterState,
    actor: usize,
    id: SkillId,
    target: Option<UnitRef>,
    legal: &LegalAction,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    let Some(skill) = state
        .party
        .get(actor)
        .and_then(|member| member.role.skill(id))
        .cloned()
    else {
        return;
    };

    match skill.kind {
        SkillKind::Attack => {
            spend_mp(state, actor, legal.mp_cost, events);
            let targets = match (skill.target_mode, target) {
                (TargetMode::Single, Some(unit)) => vec![unit],
                (TargetMode::Single, None) => Vec::new(),
                (TargetMode::All, _) => state.roster.living().into_iter().map(UnitRef::Enemy).collect(),
            };
            for unit in targets {
                spell(state, actor, unit, &skill, rng, events);
            }
        }
        SkillKind::Heal => {
            spend_mp(state, actor, legal.mp_cost, events);
            match (skill.target_mode, target) {
                (TargetMode::Single, Some(unit)) => {
                    restore(state, actor, unit, HealProfile::SINGLE, rng, events);
                }
                (TargetMode::Single, None) => {}
                (TargetMode::All, _) => {
                    for index in state.party.living() {
                        restore(state, actor, UnitRef::Ally(index), HealProfile::PARTY, rng, events);
                    }
                }
            }
        }
        SkillKind::Resurrect => {
            if let Some(unit) = target {
                resurrect(state, actor, unit, &skill, events);
            }
        }
    }
}

fn spell(
    state: &mut EncounterState,
    actor: usize,
    target: UnitRef,
    skill: &Skill,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    let (Some(caster), Some(defender)) = (state.party.get(actor), state.unit(target)) else {
        return;
    };
    if !defender.is_alive() {
        return;
    }
    let roll = magic_damage(caster, defender, skill, rng);
    damage(state, target, roll.amount, roll.critical, events);
}

fn restore(
    state: &mut EncounterState,
    actor: usize,
    target: UnitRef,
    profile: HealProfile,
    rng: &mut (impl RandomSource + ?Sized),
    events: &mut Vec<BattleEvent>,
) {
    let Some(healer) = state.party.get(actor) else {
        return;
    };
    let amount = heal_amount(healer, profile, rng);
    heal(state, target, amount, events);
}

/// Revives `target`, spending MP when the caster can afford it and the
/// caster's life when it cannot.
fn resurrect(
    state: &mut EncounterState,
    actor: usize,
    target: UnitRef,
    skill: &Skill,
    events: &mut Vec<BattleEvent>,
) {
    if state.unit(target).is_none_or(|unit| unit.is_alive()) {
        events.push(BattleEvent::RevivalIgnored { unit: target });
        return;
    }
    let affordable = state
        .party
        .get(actor)
        .is_some_and(|caster| caster.mp() >= skill.mp_cost);

    if affordable {
        spend_mp(state, actor, skill.mp_cost, events);
        revive_share(state, target, ReviveMode::Spell, events);
        return;
    }

    // Sacrifice: the caster falls, the target returns at full strength.
    let caster = UnitRef::Ally(actor);
    if let Some(member) = state.party.get_mut(actor) {
        let remaining = member.hp();
        if member.apply_hp_delta(-i64::from(remaining)).killed() {
            events.push(BattleEvent::UnitDefeated { unit: caster });
        }
    }
    let Some(unit) = state.unit_mut(target) else {
        return;
    };
    let (max_hp, max_mp) = (unit.max_hp(), unit.max_mp());
    if unit.revive(max_hp) {
        unit.apply_mp_delta(i64::from(max_mp));
        events.push(BattleEvent::UnitRevived {
            unit: target,
            mode: ReviveMode::Sacrifice,
            hp: max_hp,
        });
        events.push(BattleEvent::MpRestored {
            target,
            amount: max_mp,
        });
    }
}

/// Revives `target` to half its max HP.
fn revive_share(
    state: &mut EncounterState,
    target: UnitRef,
    mode: ReviveMode,
    events: &mut Vec<BattleEvent>,
) {
    let Some(unit) = state.unit_mut(target) else {
        return;
    };
    let hp = (f64::from(unit.max_hp()) * ActionKind::REVIVE_RATIO).floor() as u32;
    if unit.revive(hp) {
        events.push(BattleEvent::UnitRevived {
            unit: target,
            mode,
            hp: unit.hp(),
        });
    } else {
        events.push(BattleEvent::RevivalIgnored { unit: target });
    }
}

fn use_item(state: &mut EncounterState, item: ItemKind, target: UnitRef, events: &mut Vec<BattleEvent>) {
    if !state.inventory.consume(item) {
        return;
    }
    match item {
        ItemKind::Potion => heal(state, target, ItemKind::POTION_HEAL, events),
        ItemKind::Ether => restore_mp(state, target, ItemKind::ETHER_RESTORE, events),
        ItemKind::Phoenix => revive_share(state, target, ReviveMode::Item, events),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::legal_actions;
    use crate::env::ReplayRng;
    use crate::state::{Combatant, HostileTraits, Inventory, Party, Role, Roster, Stats};

    fn healer() -> Combatant {
        Combatant::new(
            "Healer",
            200,
            150,
            Stats::new(25, 25, 40, 60, 35, 75),
            Role::Restorer {
                skills: vec![Skill::stock(SkillId::Medica), Skill::stock(SkillId::Raise)],
            },
        )
    }

    fn fallen_hero() -> Combatant {
        let mut hero =
            Combatant::new("Hero", 240, 80, Stats::new(50, 45, 20, 30, 30, 25), Role::Guardian);
        hero.apply_mp_delta(-80);
        hero.apply_hp_delta(-240);
        hero
    }

    fn encounter(healer_mp: u32) -> EncounterState {
        let mut restorer = healer();
        restorer.apply_mp_delta(i64::from(healer_mp) - 150);
        let slime = Combatant::new(
            "Slime",
            300,
            0,
            Stats::default(),
            Role::Hostile(HostileTraits::minion()),
        );
        EncounterState::new(
            Party::new([fallen_hero(), restorer]),
            Roster::new([slime]),
            Inventory::default(),
        )
    }

    fn raise(state: &mut EncounterState, events: &mut Vec<BattleEvent>) {
        let legal = legal_actions(state, 1)
            .into_iter()
            .find(|legal| legal.action == ActionKind::Cast(SkillId::Raise));
        let Some(legal) = legal else {
            panic!("raise should be offered");
        };
        let decision = legal.first_decision();
        let mut rng = ReplayRng::new([0.5]);
        resolve(state, 1, &decision, &legal, &mut rng, events);
    }

    #[test]
    fn raise_with_mp_revives_to_half() {
        let mut state = encounter(40);
        let mut events = Vec::new();

        raise(&mut state, &mut events);

        assert_eq!(state.party.get(0).map(Combatant::hp), Some(120));
        assert_eq!(state.party.get(1).map(Combatant::mp), Some(0));
        assert!(events.contains(&BattleEvent::UnitRevived {
            unit: UnitRef::Ally(0),
            mode: ReviveMode::Spell,
            hp: 120
        }));
    }

    #[test]
    fn raise_without_mp_sacrifices_caster() {
        let mut state = encounter(0);
        let mut events = Vec::new();

        raise(&mut state, &mut events);

        let hero = state.party.get(0);
        assert_eq!(hero.map(Combatant::hp), Some(240));
        assert_eq!(hero.map(Combatant::mp), Some(80));
        assert_eq!(state.party.get(1).map(Combatant::hp), Some(0));
        assert_eq!(
            events,
            [
                BattleEvent::UnitDefeated {
                    unit: UnitRef::Ally(1)
                },
                BattleEvent::UnitRevived {
                    unit: UnitRef::Ally(0),
                    mode: ReviveMode::Sacrifice,
                    hp: 240
                },
                BattleEvent::MpRestored {
                    target: UnitRef::Ally(0),
                    amount: 80
                },
            ]
        );
    }

    #[test]
    fn medica_rolls_once_per_living_ally() {
        let mut state = encounter(150);
        let legal = LegalAction::new(
            ActionKind::Cast(SkillId::Medica),
            crate::action::TargetSet::All(vec![UnitRef::Ally(1)]),
            30,
        );
        let decision = Decision::untargeted(legal.action);
        let mut rng = ReplayRng::new([0.5, 1.0]);
        let mut events = Vec::new();

        resolve(&mut state, 1, &decision, &legal, &mut rng, &mut events);

        // only the healer is alive: one variance draw, one crit draw
        assert_eq!(rng.consumed(), 2);
        assert_eq!(state.party.get(1).map(Combatant::mp), Some(120));
    }
}
