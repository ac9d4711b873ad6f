//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BattleConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("[pacing]\naction = 0\n").expect("valid toml");

        assert_eq!(config.pacing.action, 0);
        assert_eq!(config.pacing.split, 800);
        assert_eq!(config.pacing.enemy_action, 1000);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[pacing]\nphase_change = 250").expect("write");

        let config = ConfigLoader::load(file.path()).expect("loads");

        assert_eq!(config.pacing.phase_change, 250);
    }

    #[test]
    fn bad_toml_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[pacing\naction = ").expect("write");

        let error = ConfigLoader::load(file.path()).expect_err("malformed");

        assert!(error.to_string().contains(&file.path().display().to_string()));
    }
}
