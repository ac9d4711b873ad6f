//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive an encounter.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use battle_content::EncounterSpec;
use battle_core::{BattleConfig, EncounterState, Outcome, PcgRng, Step, StepStatus};

use crate::api::{DecisionProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Wait out every `Pause` directive between publishes. Game state and
    /// the returned steps are the same either way.
    pub honor_pacing: bool,
    /// Seed of the encounter's random source.
    pub seed: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 256,
            command_buffer_size: 32,
            honor_pacing: false,
            seed: 0,
        }
    }
}

/// Main runtime that orchestrates an encounter
///
/// Runtime owns the worker and the decision provider.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    provider: Option<Box<dyn DecisionProvider>>,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Set the decision provider
    pub fn set_provider(&mut self, provider: impl DecisionProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Performs one advance, decide, submit cycle.
    ///
    /// The returned step carries the events of both engine calls. If the
    /// encounter is already over, no decision is requested.
    pub async fn step(&mut self) -> Result<Step> {
        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;

        let Step { mut events, status } = self.handle.advance().await?;

        let step = match status {
            StepStatus::AwaitingDecision { actor, legal } => {
                let snapshot = self.handle.query_state().await?;
                let decision = provider.decide(actor, &snapshot, &legal).await?;
                debug!(
                    target: "runtime",
                    actor,
                    decision = ?decision,
                    "decision provided"
                );

                let submitted = self.handle.submit(decision).await?;
                events.extend(submitted.events);
                Step {
                    events,
                    status: submitted.status,
                }
            }
            finished @ StepStatus::Finished(_) => Step {
                events,
                status: finished,
            },
        };

        Ok(step)
    }

    /// Steps until the encounter ends and returns its outcome.
    pub async fn run_to_end(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.step().await?.outcome() {
                info!(target: "runtime", %outcome, "encounter ended");
                return Ok(outcome);
            }
        }
    }

    /// Current encounter state.
    pub async fn state(&self) -> Result<EncounterState> {
        self.handle.query_state().await
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<EncounterState>,
    provider: Option<Box<dyn DecisionProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the battle configuration
    pub fn battle_config(mut self, battle: BattleConfig) -> Self {
        self.config.battle = battle;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn honor_pacing(mut self, honor: bool) -> Self {
        self.config.honor_pacing = honor;
        self
    }

    /// Provide initial encounter state
    ///
    /// Defaults to [`EncounterSpec::standard`].
    pub fn initial_state(mut self, state: EncounterState) -> Self {
        self.state = Some(state);
        self
    }

    /// Start from an encounter definition
    pub fn encounter(mut self, spec: &EncounterSpec) -> Self {
        self.state = Some(spec.build());
        self
    }

    /// Set the decision provider (optional, can be set later)
    pub fn provider(mut self, provider: impl DecisionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let state = self
            .state
            .unwrap_or_else(|| EncounterSpec::standard().build());

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        info!(
            target: "runtime",
            seed = self.config.seed,
            party = state.party.len(),
            enemies = state.roster.lineup().len(),
            "starting encounter"
        );

        let sim_worker = SimulationWorker::new(
            state,
            PcgRng::seed_from_u64(self.config.seed),
            self.config.battle,
            command_rx,
            event_bus,
            self.config.honor_pacing,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            provider: self.provider,
            sim_worker_handle,
        })
    }
}
