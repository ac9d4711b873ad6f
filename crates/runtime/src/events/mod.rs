//! Topic-based event bus for runtime events.
//!
//! The simulation worker republishes every [`battle_core::BattleEvent`] on the
//! topic it belongs to, so consumers subscribe only to what they render.

mod bus;

pub use bus::{Event, EventBus, Topic};
