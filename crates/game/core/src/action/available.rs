//! Legal-action construction.
//!
//! Gating happens here, before a decision provider ever sees a choice:
//! actions the actor cannot afford are left out, and so are actions with
//! nothing to aim at. Resurrection is the exception to MP gating. When the
//! actor is short on MP it is still offered, flagged as a sacrifice.

use super::{ActionKind, LegalAction, TargetSet};
use crate::state::{Combatant, EncounterState, Role, Skill, SkillKind, TargetMode, UnitRef};

/// Every action party member `actor` may take right now, in menu order.
///
/// Returns an empty list for a dead or unknown actor.
pub fn legal_actions(state: &EncounterState, actor: usize) -> Vec<LegalAction> {
    let Some(member) = state.party.get(actor).filter(|m| m.is_alive()) else {
        return Vec::new();
    };

    let enemies: Vec<UnitRef> = state.roster.living().into_iter().map(UnitRef::Enemy).collect();
    let allies: Vec<UnitRef> = state.party.living().into_iter().map(UnitRef::Ally).collect();
    let fallen: Vec<UnitRef> = state.party.fallen().into_iter().map(UnitRef::Ally).collect();
    let targets = Targets {
        enemies: &enemies,
        allies: &allies,
        fallen: &fallen,
    };

    let mut offered = Vec::new();
    offered.push(LegalAction::new(
        ActionKind::Attack,
        TargetSet::Choose(enemies.clone()),
        0,
    ));

    match &member.role {
        Role::Guardian => {
            if member.mp() >= ActionKind::ENCOURAGE_COST {
                offered.push(LegalAction::new(
                    ActionKind::Encourage,
                    TargetSet::All(allies.clone()),
                    ActionKind::ENCOURAGE_COST,
                ));
            }
            if member.mp() >= ActionKind::COVER_COST {
                offered.push(LegalAction::new(
                    ActionKind::Cover,
                    TargetSet::Myself,
                    ActionKind::COVER_COST,
                ));
            }
        }
        Role::Caster { skills } => {
            offered.extend(skills.iter().filter_map(|skill| offer_skill(member, skill, &targets)));
            offered.push(LegalAction::new(ActionKind::Meditate, TargetSet::Myself, 0));
        }
        Role::Restorer { skills } => {
            offered.extend(skills.iter().filter_map(|skill| offer_skill(member, skill, &targets)));
            offered.push(LegalAction::new(
                ActionKind::Prayer,
                TargetSet::All(allies.clone()),
                0,
            ));
        }
        Role::Hostile(_) => {}
    }

    for item in state.inventory.available() {
        let pool = if item.targets_fallen() { &fallen } else { &allies };
        offered.push(LegalAction::new(
            ActionKind::UseItem(item),
            TargetSet::Choose(pool.clone()),
            0,
        ));
    }

    offered.retain(|legal| has_targets(&legal.targets));
    offered
}

struct Targets<'a> {
    enemies: &'a [UnitRef],
    allies: &'a [UnitRef],
    fallen: &'a [UnitRef],
}

fn offer_skill(member: &Combatant, skill: &Skill, targets: &Targets<'_>) -> Option<LegalAction> {
    let affordable = member.mp() >= skill.mp_cost;
    if !affordable && skill.kind != SkillKind::Resurrect {
        return None;
    }

    let pool = match skill.kind {
        SkillKind::Attack => targets.enemies,
        SkillKind::Heal => targets.allies,
        SkillKind::Resurrect => targets.fallen,
    };
    let set = match skill.target_mode {
        TargetMode::Single => TargetSet::Choose(pool.to_vec()),
        TargetMode::All => TargetSet::All(pool.to_vec()),
    };

    let mut legal = LegalAction::new(ActionKind::Cast(skill.id), set, skill.mp_cost);
    if !affordable {
        legal.mp_cost = 0;
        legal.sacrifice = true;
    }
    Some(legal)
}

fn has_targets(set: &TargetSet) -> bool {
    match set {
        TargetSet::Myself => true,
        TargetSet::Choose(units) | TargetSet::All(units) => !units.is_empty(),
    }
}
