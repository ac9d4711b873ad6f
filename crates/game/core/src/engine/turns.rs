//! Turn boundaries and the enemy phase.

use crate::events::{BattleEvent, DeclaredAction};
use crate::policy::{self, mark_splits};
use crate::state::{EncounterState, Phase, UnitRef};
use crate::status;

use super::BattleEngine;

/// Reports each dead, fielded enemy once.
///
/// A boss that split is retired rather than defeated and is skipped.
pub(crate) fn log_enemy_deaths(state: &mut EncounterState, events: &mut Vec<BattleEvent>) {
    for id in state.roster.lineup().to_vec() {
        let Some(enemy) = state.roster.get_mut(id) else {
            continue;
        };
        if enemy.is_alive() {
            continue;
        }
        if let Some(traits) = enemy.role.hostile_mut()
            && !traits.death_logged
            && !traits.has_split
        {
            traits.death_logged = true;
            events.push(BattleEvent::UnitDefeated {
                unit: UnitRef::Enemy(id),
            });
        }
    }
}

/// Turn-boundary methods for BattleEngine.
impl<'a> BattleEngine<'a> {
    /// Closes party member `actor`'s turn: split check, enemy death logging,
    /// buff decay, regen tick. Then points the scheduler at the next member.
    pub(super) fn close_player_turn(&mut self, actor: usize, events: &mut Vec<BattleEvent>) {
        mark_splits(self.state, events);
        log_enemy_deaths(self.state, events);
        status::close_turn(self.state, actor, events);
        events.push(BattleEvent::Pause {
            millis: self.config.pacing.action,
        });
        self.state.turn.phase = Phase::PlayerTurn(actor + 1);
    }

    /// Every living fielded enemy acts once, in lineup order, while any party
    /// member stands. Guards drop afterwards.
    pub(super) fn run_enemy_phase(&mut self, events: &mut Vec<BattleEvent>) {
        for id in self.state.roster.lineup().to_vec() {
            if self.state.party.all_dead() {
                break;
            }
            if !self.state.roster.get(id).is_some_and(|enemy| enemy.is_alive()) {
                continue;
            }

            let unit = UnitRef::Enemy(id);
            events.push(BattleEvent::TurnStarted { unit });
            let roll = self.rng.next_f64();
            let intent = self.policy.choose(roll);
            events.push(BattleEvent::ActionDeclared {
                actor: unit,
                action: DeclaredAction::Enemy(intent),
            });
            policy::resolve(self.state, id, intent, &mut *self.rng, events);
            events.push(BattleEvent::Pause {
                millis: self.config.pacing.enemy_action,
            });
        }

        status::clear_guards(self.state, events);
        mark_splits(self.state, events);
        log_enemy_deaths(self.state, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Combatant, HostileTraits, Inventory, Party, Role, Roster, Stats};

    #[test]
    fn enemy_deaths_are_logged_once() {
        let slime = Combatant::new(
            "Slime",
            10,
            0,
            Stats::default(),
            Role::Hostile(HostileTraits::minion()),
        );
        let mut state = EncounterState::new(Party::default(), Roster::new([slime]), Inventory::default());
        let id = state.roster.lineup()[0];
        if let Some(enemy) = state.roster.get_mut(id) {
            enemy.apply_hp_delta(-10);
        }
        let mut events = Vec::new();

        log_enemy_deaths(&mut state, &mut events);
        log_enemy_deaths(&mut state, &mut events);

        assert_eq!(events, [BattleEvent::UnitDefeated { unit: UnitRef::Enemy(id) }]);
    }
}
