//! Boss split.
//!
//! A boss at or below half HP splits once. The transformation has two halves:
//! [`mark_splits`] flags the boss and announces it, and [`complete_split`]
//! later retires it and fields its offspring in the same lineup slot. The
//! scheduler puts a presentation pause between the two.

use crate::events::BattleEvent;
use crate::state::{Combatant, EncounterState, EnemyId};

/// True when `enemy` is an unsplit, living boss at or below half HP.
pub fn is_split_due(enemy: &Combatant) -> bool {
    let Some(traits) = enemy.role.hostile() else {
        return false;
    };
    traits.is_boss
        && !traits.has_split
        && enemy.is_alive()
        && u64::from(enemy.hp()) * 2 <= u64::from(enemy.max_hp())
}

/// Flags every fielded boss whose split is due and queues its completion.
///
/// Returns the bosses flagged by this call.
pub fn mark_splits(state: &mut EncounterState, events: &mut Vec<BattleEvent>) -> Vec<EnemyId> {
    let due: Vec<EnemyId> = state
        .roster
        .fielded()
        .filter(|(_, enemy)| is_split_due(enemy))
        .map(|(id, _)| id)
        .collect();

    for &id in &due {
        if let Some(traits) = state.roster.get_mut(id).and_then(|boss| boss.role.hostile_mut()) {
            traits.has_split = true;
        }
        events.push(BattleEvent::BossTrembling { unit: id });
        state.turn.pending_splits.push(id);
    }
    due
}

/// Retires boss `id` and fields its offspring at the same lineup position.
///
/// The boss is dropped to 0 HP with a lethal delta and stays in the arena as
/// an inert record; it is never reported as defeated.
pub fn complete_split(state: &mut EncounterState, id: EnemyId, events: &mut Vec<BattleEvent>) {
    let Some(boss) = state.roster.get_mut(id) else {
        return;
    };
    let remaining = boss.hp();
    boss.apply_hp_delta(-i64::from(remaining));
    let offspring: Vec<Combatant> = match boss.role.hostile_mut() {
        Some(traits) => {
            traits.death_logged = true;
            traits.offspring.iter().map(|template| template.spawn()).collect()
        }
        None => Vec::new(),
    };

    if !state.roster.is_fielded(id) {
        return;
    }
    let added = state.roster.replace(id, offspring);
    events.push(BattleEvent::RosterChanged { removed: id, added });
}
