//! Static battle content and data-file loaders.
//!
//! This crate houses the stock roster and provides loaders for RON/TOML data files:
//! - Stock party, boss and split offspring (code presets)
//! - Encounter definitions (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! Content only seeds an [`EncounterState`](battle_core::EncounterState); once a
//! battle starts, the engine owns every value.

pub mod encounter;
pub mod presets;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::EncounterSpec;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EncounterLoader, LoadResult};
