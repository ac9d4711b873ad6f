//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the encounter or streaming events from specific topics.

use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{Decision, EncounterState, Step};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Run the scheduler until a decision is needed or the encounter ends.
    ///
    /// Idempotent while a decision is pending.
    pub async fn advance(&self) -> Result<Step> {
        self.request(|reply| Command::Advance { reply }).await
    }

    /// Submit the pending party member's decision.
    ///
    /// Rejected decisions leave the encounter untouched and surface as
    /// [`RuntimeError::Battle`].
    pub async fn submit(&self, decision: Decision) -> Result<Step> {
        self.request(|reply| Command::Submit { decision, reply })
            .await?
    }

    /// Query the current encounter state (read-only snapshot)
    pub async fn query_state(&self) -> Result<EncounterState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Combat` - Damage, heals, status, deaths, revivals, roster changes
    /// - `Topic::Flow` - Turns, declared actions, phase changes, encounter end
    /// - `Topic::Presentation` - Pause directives
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut combat_rx = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = combat_rx.recv().await {
    ///     // Animate the change
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
