//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker is the single owner of the encounter state and the
//! random source; everything else talks to it through commands.

mod simulation;

pub use simulation::{Command, SimulationWorker};
