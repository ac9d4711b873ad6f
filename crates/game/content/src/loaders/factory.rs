//! Content factory for loading battle content from a data directory.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::encounter::EncounterSpec;
use crate::loaders::{ConfigLoader, EncounterLoader, LoadResult};

/// Content factory that loads battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── encounters/
///     └── king_slime.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load `encounters/<name>.ron`.
    pub fn load_encounter(&self, name: &str) -> LoadResult<EncounterSpec> {
        let path = self
            .data_dir
            .join("encounters")
            .join(format!("{name}.ron"));
        EncounterLoader::load(&path)
    }
}
