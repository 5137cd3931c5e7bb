//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::search::{Weights, DEFAULT_TOP_N};

/// User configuration, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of results when `-n` is not given
    #[serde(default = "default_results")]
    pub default_results: usize,

    /// External corpus root replacing the built-in data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_dir: Option<PathBuf>,

    /// Enable stemming for query and entry text (optional; default false)
    #[serde(default)]
    pub stemming: bool,

    /// Field weights used by the scorer
    #[serde(default)]
    pub weights: Weights,
}

fn default_results() -> usize {
    DEFAULT_TOP_N
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_results: default_results(),
            corpus_dir: None,
            stemming: false,
            weights: Weights::default(),
        }
    }
}
