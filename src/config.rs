// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration.
//!
//! A pass needs two things up front: how many suggestions to keep, and the
//! optional auxiliary weight to report alongside them. Both can come from a
//! small JSON file:
//!
//! ```json
//! { "capacity": 18, "weight": 0.65 }
//! ```
//!
//! Missing keys fall back to defaults. Unknown keys are an error so a typo
//! doesn't silently leave the default in place.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::DEFAULT_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RankingConfig {
    /// Maximum number of retained candidates.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Auxiliary weight reported with the results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            capacity: DEFAULT_CAPACITY,
            weight: None,
        }
    }
}

impl RankingConfig {
    /// Parse and validate a JSON config string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RankingConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RankingConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            })?;
        config.validate()
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, capacity: Option<usize>, weight: Option<f32>) -> Self {
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        if weight.is_some() {
            self.weight = weight;
        }
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() {
                return Err(ConfigError::InvalidWeight { weight });
            }
        }
        Ok(self)
    }
}
