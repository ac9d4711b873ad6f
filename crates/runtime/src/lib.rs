//! Async orchestration for battle encounters.
//!
//! This crate wires together the decision provider abstraction, the simulation
//! worker and a topic-based event bus into a cohesive runtime API. Consumers
//! embed [`Runtime`] to drive turns and subscribe to events through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    DecisionProvider, FirstLegalProvider, Result, RuntimeError, RuntimeHandle, ScriptedProvider,
};
pub use events::{Event, EventBus, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
