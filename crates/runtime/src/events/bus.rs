//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use battle_core::BattleEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Unit state changes (damage, heals, status, deaths, revivals, roster)
    Combat,
    /// Turn, phase and encounter flow, including declared actions
    Flow,
    /// Pacing directives
    Presentation,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Combat, Topic::Flow, Topic::Presentation];

    /// Topic a battle event is routed to.
    pub fn of(event: &BattleEvent) -> Self {
        if event.is_presentation() {
            Topic::Presentation
        } else if event.is_combat() {
            Topic::Combat
        } else {
            Topic::Flow
        }
    }
}

/// A battle event stamped with its position in the encounter's stream.
///
/// `sequence` is global across topics, so subscribers to several topics can
/// restore the original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub sequence: u64,
    pub event: BattleEvent,
}

impl Event {
    pub fn topic(&self) -> Topic {
        Topic::of(&self.event)
    }
}

struct Channels {
    combat: broadcast::Sender<Event>,
    flow: broadcast::Sender<Event>,
    presentation: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                combat: broadcast::channel(capacity).0,
                flow: broadcast::channel(capacity).0,
                presentation: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.channels.combat,
            Topic::Flow => &self.channels.flow,
            Topic::Presentation => &self.channels.presentation,
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Never blocks. Events are best-effort: a topic without subscribers drops
    /// them, and a lagging subscriber loses the oldest ones.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
