//! User configuration for designkb
//!
//! Stored in `~/.config/designkb/config.toml`; the directory can be
//! overridden with `DESIGNKB_CONFIG_DIR`. A missing file means defaults.

pub mod types;

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::corpus::CorpusSource;
use crate::error::{DesignKbError, Result};
use crate::search::{SearchOptions, DEFAULT_TOP_N};

pub use types::Config;

const CONFIG_DIR: &str = "designkb";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "DESIGNKB_CONFIG_DIR";
const CORPUS_DIR_ENV_VAR: &str = "DESIGNKB_CORPUS_DIR";

impl Config {
    /// Location of the user config file, if a config directory can be determined
    pub fn config_path() -> Option<PathBuf> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DesignKbError::invalid_config(path, format!("failed to read: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| DesignKbError::invalid_config(path, format!("failed to parse: {}", e)))?;

        config.validate(path)?;
        debug!(path = %path.display(), "load_config");
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.default_results == 0 {
            return Err(DesignKbError::invalid_config(
                path,
                "default_results must be a positive integer",
            ));
        }
        if !self.weights.is_valid() {
            return Err(DesignKbError::invalid_config(
                path,
                "weights must be positive finite numbers",
            ));
        }
        Ok(())
    }

    /// Result count used when the caller does not pass `-n`
    pub fn default_top_n(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.default_results)
            .or(NonZeroUsize::new(DEFAULT_TOP_N))
            .unwrap_or(NonZeroUsize::MIN)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            weights: self.weights,
            stemming: self.stemming,
        }
    }

    /// Resolve the corpus source: CLI flag, then `DESIGNKB_CORPUS_DIR`, then config, then built-in
    pub fn corpus_source(&self, cli_dir: Option<&Path>) -> CorpusSource {
        if let Some(dir) = cli_dir {
            return CorpusSource::Directory(dir.to_path_buf());
        }
        if let Some(dir) = std::env::var_os(CORPUS_DIR_ENV_VAR) {
            return CorpusSource::Directory(PathBuf::from(dir));
        }
        match &self.corpus_dir {
            Some(dir) => CorpusSource::Directory(dir.clone()),
            None => CorpusSource::Builtin,
        }
    }
}
