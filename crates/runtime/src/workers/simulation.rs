//! Simulation worker that owns the authoritative [`EncounterState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], drives
//! [`battle_core::BattleEngine`], and republishes every produced event on the
//! [`EventBus`].
//!
//! With pacing on, a [`BattleEvent::Pause`] is published and then waited out
//! before the next event goes out, so subscribers see the gaps. The command
//! reply is sent once the whole step has been published.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use battle_core::{BattleConfig, BattleEngine, BattleEvent, Decision, EncounterState, PcgRng, Step};

use crate::api::Result;
use crate::events::{Event, EventBus};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Run the scheduler until it needs a decision or the encounter ends.
    Advance { reply: oneshot::Sender<Step> },
    /// Resolve the pending decision and keep running.
    Submit {
        decision: Decision,
        reply: oneshot::Sender<Result<Step>>,
    },
    /// Query the current encounter state (read-only).
    QueryState {
        reply: oneshot::Sender<EncounterState>,
    },
}

/// Background task that processes encounter commands.
pub struct SimulationWorker {
    state: EncounterState,
    rng: PcgRng,
    config: BattleConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    honor_pacing: bool,
    sequence: u64,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: EncounterState,
        rng: PcgRng,
        config: BattleConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        honor_pacing: bool,
    ) -> Self {
        Self {
            state,
            rng,
            config,
            command_rx,
            event_bus,
            honor_pacing,
            sequence: 0,
        }
    }

    /// Main worker loop. Ends when every handle is dropped.
    pub async fn run(mut self) {
        info!(target: "runtime::worker", "simulation worker started");
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        info!(
            target: "runtime::worker",
            events = self.sequence,
            round = self.state.turn.round,
            "simulation worker stopped"
        );
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Advance { reply } => {
                let step = self.engine().advance();
                self.publish(&step).await;
                if reply.send(step).is_err() {
                    debug!(target: "runtime::worker", "advance reply dropped");
                }
            }
            Command::Submit { decision, reply } => {
                let result = self.submit(decision).await;
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "submit reply dropped");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!(target: "runtime::worker", "state reply dropped");
                }
            }
        }
    }

    fn engine(&mut self) -> BattleEngine<'_> {
        BattleEngine::new(&mut self.state, &mut self.rng, &self.config)
    }

    async fn submit(&mut self, decision: Decision) -> Result<Step> {
        let result = self.engine().submit(decision);
        match result {
            Ok(step) => {
                self.publish(&step).await;
                Ok(step)
            }
            Err(error) => {
                debug!(
                    target: "runtime::worker",
                    decision = ?decision,
                    severity = error.severity().as_str(),
                    error = %error,
                    "Decision rejected"
                );
                Err(error.into())
            }
        }
    }

    async fn publish(&mut self, step: &Step) {
        for event in &step.events {
            debug!(target: "runtime::worker", seq = self.sequence, event = ?event, "publish");
            self.event_bus.publish(Event {
                sequence: self.sequence,
                event: event.clone(),
            });
            self.sequence += 1;

            if self.honor_pacing
                && let BattleEvent::Pause { millis } = event
                && *millis > 0
            {
                tokio::time::sleep(Duration::from_millis(u64::from(*millis))).await;
            }
        }
    }
}
