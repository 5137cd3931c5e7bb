//! Field weighting for relevance scoring
//!
//! - `keywords`: weight 3.0 (curated tags)
//! - `body`: weight 1.0 (baseline, free-text fallback)

use serde::{Deserialize, Serialize};

/// Default weight multiplier for keyword matches
pub const KEYWORD_WEIGHT: f64 = 3.0;

/// Default weight multiplier for body matches
pub const BODY_WEIGHT: f64 = 1.0;

/// Per-field weights applied by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_keyword_weight")]
    pub keyword: f64,
    #[serde(default = "default_body_weight")]
    pub body: f64,
}

fn default_keyword_weight() -> f64 {
    KEYWORD_WEIGHT
}

fn default_body_weight() -> f64 {
    BODY_WEIGHT
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            keyword: KEYWORD_WEIGHT,
            body: BODY_WEIGHT,
        }
    }
}

impl Weights {
    /// Both weights must be positive and finite for ranking to stay meaningful
    pub fn is_valid(&self) -> bool {
        [self.keyword, self.body]
            .iter()
            .all(|w| w.is_finite() && *w > 0.0)
    }
}
