//! Turn scheduling.
//!
//! [`BattleEngine`] is the only component allowed to move the turn pointer.
//! It borrows the encounter state and the random source for the duration of a
//! call, runs the scheduler until it needs a player decision or the encounter
//! ends, and hands back the events produced on the way.
//!
//! ```text
//! PlayerTurn(0) ─▶ … ─▶ PlayerTurn(n) ─▶ EnemyPhase ─▶ PlayerTurn(0) ─▶ …
//!       │                                     │
//!       └──▶ Victory                          └──▶ Defeat
//! ```

mod turns;

use crate::action::{self, Decision, LegalAction};
use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::error::BattleError;
use crate::events::{BattleEvent, DeclaredAction, Outcome, PhaseKind};
use crate::policy::{EnemyPolicy, complete_split};
use crate::state::{EncounterState, Phase, UnitRef};

/// Where the scheduler stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepStatus {
    /// Party member `actor` must pick one of `legal`.
    AwaitingDecision {
        actor: usize,
        legal: Vec<LegalAction>,
    },
    /// The encounter is over.
    Finished(Outcome),
}

/// Events produced by one engine call and the state it stopped in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub events: Vec<BattleEvent>,
    pub status: StepStatus,
}

impl Step {
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            StepStatus::Finished(outcome) => Some(outcome),
            StepStatus::AwaitingDecision { .. } => None,
        }
    }
}

/// Turn scheduler over a borrowed encounter.
pub struct BattleEngine<'a> {
    state: &'a mut EncounterState,
    rng: &'a mut dyn RandomSource,
    config: &'a BattleConfig,
    policy: EnemyPolicy,
}

impl<'a> BattleEngine<'a> {
    pub fn new(
        state: &'a mut EncounterState,
        rng: &'a mut dyn RandomSource,
        config: &'a BattleConfig,
    ) -> Self {
        Self {
            state,
            rng,
            config,
            policy: EnemyPolicy::standard(),
        }
    }

    pub fn state(&self) -> &EncounterState {
        &*self.state
    }

    /// Runs the scheduler until a decision is needed or the encounter ends.
    ///
    /// Calling it again while a decision is pending returns the same request
    /// without emitting anything.
    pub fn advance(&mut self) -> Step {
        let mut events = Vec::new();
        let status = self.run(&mut events);
        Step { events, status }
    }

    /// Resolves the pending decision, closes the actor's turn and advances.
    pub fn submit(&mut self, decision: Decision) -> Result<Step, BattleError> {
        let phase = self.state.turn.phase;
        if phase.is_terminal() {
            return Err(BattleError::EncounterOver { phase });
        }
        let Some(actor) = self.state.awaiting_actor() else {
            return Err(BattleError::NotAwaitingDecision { phase });
        };

        let offered = action::legal_actions(self.state, actor);
        let Some(legal) = offered.iter().find(|legal| legal.action == decision.action) else {
            return Err(BattleError::IllegalAction {
                actor,
                action: decision.action,
            });
        };
        if !legal.targets.accepts(decision.target) {
            return Err(BattleError::IllegalTarget {
                action: decision.action,
                target: decision.target,
            });
        }

        let mut events = vec![BattleEvent::ActionDeclared {
            actor: UnitRef::Ally(actor),
            action: DeclaredAction::Party(decision.action),
        }];
        action::resolve(self.state, actor, &decision, legal, &mut *self.rng, &mut events);
        self.state.turn.nonce += 1;
        self.state.turn.awaiting = false;
        self.close_player_turn(actor, &mut events);

        let status = self.run(&mut events);
        Ok(Step { events, status })
    }

    fn run(&mut self, events: &mut Vec<BattleEvent>) -> StepStatus {
        loop {
            for id in std::mem::take(&mut self.state.turn.pending_splits) {
                events.push(BattleEvent::Pause {
                    millis: self.config.pacing.split,
                });
                complete_split(self.state, id, events);
            }

            match self.state.turn.phase {
                Phase::PlayerTurn(index) => {
                    if self.state.roster.all_dead() {
                        return self.finish(Outcome::Victory, events);
                    }
                    if index >= self.state.party.len() {
                        events.push(BattleEvent::Pause {
                            millis: self.config.pacing.phase_change,
                        });
                        self.enter(Phase::EnemyPhase, events);
                        continue;
                    }
                    if !self.state.party.get(index).is_some_and(|m| m.is_alive()) {
                        self.state.turn.phase = Phase::PlayerTurn(index + 1);
                        continue;
                    }
                    if !self.state.turn.awaiting {
                        self.state.turn.awaiting = true;
                        events.push(BattleEvent::TurnStarted {
                            unit: UnitRef::Ally(index),
                        });
                    }
                    return StepStatus::AwaitingDecision {
                        actor: index,
                        legal: action::legal_actions(self.state, index),
                    };
                }
                Phase::EnemyPhase => {
                    self.run_enemy_phase(events);
                    if self.state.party.all_dead() {
                        return self.finish(Outcome::Defeat, events);
                    }
                    self.state.turn.round += 1;
                    self.enter(Phase::PlayerTurn(0), events);
                }
                Phase::Victory => return StepStatus::Finished(Outcome::Victory),
                Phase::Defeat => return StepStatus::Finished(Outcome::Defeat),
            }
        }
    }

    fn enter(&mut self, phase: Phase, events: &mut Vec<BattleEvent>) {
        self.state.turn.phase = phase;
        events.push(BattleEvent::PhaseChanged {
            to: PhaseKind::from(phase),
        });
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<BattleEvent>) -> StepStatus {
        let phase = match outcome {
            Outcome::Victory => Phase::Victory,
            Outcome::Defeat => Phase::Defeat,
        };
        self.state.turn.awaiting = false;
        self.enter(phase, events);
        events.push(BattleEvent::EncounterEnded { result: outcome });
        StepStatus::Finished(outcome)
    }
}
