use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Central configuration for shape dispatch.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    pub rank_policy: RankPolicy,
}

/// How arrays with more than two axes are handled.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RankPolicy {
    /// Only 1-D and 2-D arrays are accepted.
    #[default]
    Strict,
    /// N-D arrays are reduced along the first axis whose extent exceeds 1.
    FirstNonSingleton,
}

impl FromStr for RankPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(RankPolicy::Strict),
            "first_non_singleton" | "first-non-singleton" => Ok(RankPolicy::FirstNonSingleton),
            _ => Err(format!(
                "Unknown rank policy: {}. Expected one of `strict`, `first_non_singleton`",
                s
            )),
        }
    }
}

impl DispatchConfig {
    pub fn new(rank_policy: RankPolicy) -> Self {
        Self { rank_policy }
    }

    /// Parse a configuration from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse dispatch configuration")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read dispatch configuration {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("invalid dispatch configuration in {}", path.display()))?;
        log::debug!("loaded {:?} from {}", config, path.display());
        Ok(config)
    }
}
