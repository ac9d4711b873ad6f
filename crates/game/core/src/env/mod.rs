//! Environment inputs the engine draws from.
//!
//! The only ambient input of the rules engine is randomness; everything else
//! (stats, skills, rosters) lives in [`crate::state`].
mod rng;

pub use rng::{PcgRng, RandomSource, ReplayRng};
