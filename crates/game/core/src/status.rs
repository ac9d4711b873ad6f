//! Status effect ledger.
//!
//! Buff and regen are per-combatant counters decremented at their owner's own
//! turn boundary. Guard is a flag raised by the guardian and cleared for the
//! whole party once the enemy phase finishes.

use crate::events::{BattleEvent, StatusKind};
use crate::state::{Combatant, EncounterState, UnitRef};

/// Fraction of max HP restored by one regen tick.
pub const REGEN_RATIO: f64 = 0.10;

/// Grants `kind` to `unit` for `turns`, emitting [`BattleEvent::StatusGranted`].
///
/// Dead units are skipped silently. Guard ignores `turns` (it is a flag) but
/// reports 1 so collaborators can render a duration.
pub fn grant(
    state: &mut EncounterState,
    unit: UnitRef,
    kind: StatusKind,
    turns: u32,
    events: &mut Vec<BattleEvent>,
) -> bool {
    let Some(combatant) = state.unit_mut(unit) else {
        return false;
    };
    let granted = match kind {
        StatusKind::Buff => combatant.grant_buff(turns),
        StatusKind::Regen => combatant.grant_regen(turns),
        StatusKind::Guard => combatant.raise_guard(),
    };
    if granted {
        let turns = if kind == StatusKind::Guard { 1 } else { turns };
        events.push(BattleEvent::StatusGranted {
            target: unit,
            kind,
            turns,
        });
    }
    granted
}

/// Decrements the buff counter of `unit` if one is running.
pub fn decay_buff(combatant: &mut Combatant, unit: UnitRef, events: &mut Vec<BattleEvent>) {
    if !combatant.is_buffed() {
        return;
    }
    if combatant.decrement_buff() == 0 {
        events.push(BattleEvent::StatusExpired {
            target: unit,
            kind: StatusKind::Buff,
        });
    }
}

/// Heals `floor(max_hp * 0.10)` and decrements regen if the owner is alive.
pub fn tick_regen(combatant: &mut Combatant, unit: UnitRef, events: &mut Vec<BattleEvent>) {
    if !combatant.is_alive() || combatant.regen_turns() == 0 {
        return;
    }
    let amount = (f64::from(combatant.max_hp()) * REGEN_RATIO).floor() as u32;
    combatant.apply_hp_delta(i64::from(amount));
    events.push(BattleEvent::RegenTicked {
        target: unit,
        amount,
    });
    if combatant.decrement_regen() == 0 {
        events.push(BattleEvent::StatusExpired {
            target: unit,
            kind: StatusKind::Regen,
        });
    }
}

/// Runs the owner-boundary ledger for party member `index`: buff decay, then
/// regen.
pub fn close_turn(state: &mut EncounterState, index: usize, events: &mut Vec<BattleEvent>) {
    let unit = UnitRef::Ally(index);
    if let Some(member) = state.party.get_mut(index) {
        decay_buff(member, unit, events);
        tick_regen(member, unit, events);
    }
}

/// Lowers every raised guard in the party.
pub fn clear_guards(state: &mut EncounterState, events: &mut Vec<BattleEvent>) {
    for (index, member) in state.party.iter_mut().enumerate() {
        if member.lower_guard() {
            events.push(BattleEvent::StatusExpired {
                target: UnitRef::Ally(index),
                kind: StatusKind::Guard,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Inventory, Party, Role, Roster, Stats};

    fn encounter() -> EncounterState {
        let member = |name: &str| Combatant::new(name, 200, 50, Stats::default(), Role::Guardian);
        EncounterState::new(
            Party::new([member("a"), member("b")]),
            Roster::default(),
            Inventory::default(),
        )
    }

    #[test]
    fn actor_extra_turn_gives_equal_uptime() {
        let mut state = encounter();
        let mut events = Vec::new();
        grant(&mut state, UnitRef::Ally(0), StatusKind::Buff, 3, &mut events);
        grant(&mut state, UnitRef::Ally(1), StatusKind::Buff, 2, &mut events);

        // actor's own boundary immediately follows the grant
        close_turn(&mut state, 0, &mut events);
        let remaining: Vec<u32> = state.party.iter().map(Combatant::buff_turns).collect();
        assert_eq!(remaining, [2, 2]);
    }

    #[test]
    fn buff_expiry_is_reported_once() {
        let mut state = encounter();
        let mut events = Vec::new();
        grant(&mut state, UnitRef::Ally(1), StatusKind::Buff, 1, &mut events);
        events.clear();

        close_turn(&mut state, 1, &mut events);
        close_turn(&mut state, 1, &mut events);

        assert_eq!(
            events,
            [BattleEvent::StatusExpired {
                target: UnitRef::Ally(1),
                kind: StatusKind::Buff
            }]
        );
    }

    #[test]
    fn regen_heals_ten_percent_then_expires() {
        let mut state = encounter();
        let mut events = Vec::new();
        if let Some(member) = state.party.get_mut(0) {
            member.apply_hp_delta(-100);
        }
        grant(&mut state, UnitRef::Ally(0), StatusKind::Regen, 1, &mut events);
        events.clear();

        close_turn(&mut state, 0, &mut events);

        assert_eq!(state.party.get(0).map(Combatant::hp), Some(120));
        assert_eq!(
            events,
            [
                BattleEvent::RegenTicked {
                    target: UnitRef::Ally(0),
                    amount: 20
                },
                BattleEvent::StatusExpired {
                    target: UnitRef::Ally(0),
                    kind: StatusKind::Regen
                },
            ]
        );
    }

    #[test]
    fn guards_clear_for_whole_party() {
        let mut state = encounter();
        let mut events = Vec::new();
        assert!(grant(&mut state, UnitRef::Ally(0), StatusKind::Guard, 0, &mut events));
        assert_eq!(
            events[0],
            BattleEvent::StatusGranted {
                target: UnitRef::Ally(0),
                kind: StatusKind::Guard,
                turns: 1
            }
        );

        events.clear();
        clear_guards(&mut state, &mut events);

        assert!(state.party.iter().all(|m| !m.is_covering()));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn dead_units_receive_nothing() {
        let mut state = encounter();
        if let Some(member) = state.party.get_mut(1) {
            member.apply_hp_delta(-1_000);
        }
        let mut events = Vec::new();
        assert!(!grant(&mut state, UnitRef::Ally(1), StatusKind::Regen, 3, &mut events));
        assert!(events.is_empty());
    }
}
