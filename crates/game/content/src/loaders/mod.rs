//! Content loaders for reading battle data from files.
//!
//! Loaders convert RON/TOML files into battle-core types. Every failure carries
//! the offending path and format in its context.

pub mod config;
pub mod encounter;
pub mod factory;

pub use config::ConfigLoader;
pub use encounter::EncounterLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
