// This file is part of the product DocSpot.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const GUARD_CONFIG_FILE: &str = "guard.yaml";

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Throttle settings for one form. The defaults match the shipped forms:
/// five attempts per five-minute window.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FormLimitConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
}

fn default_max_attempts() -> u32 {
    5
}

fn default_window_seconds() -> u64 {
    300
}

impl Default for FormLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            window_seconds: default_window_seconds(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GuardConfig {
    #[serde(default)]
    pub login: FormLimitConfig,
    #[serde(default)]
    pub register: FormLimitConfig,
}

impl GuardConfig {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(GUARD_CONFIG_FILE);
        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        let config: GuardConfig = serde_yaml::from_str(&config_content).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Loads and validates configuration at startup. The embedding shell may
    /// fall back to `GuardConfig::default()` when no file is present.
    pub fn load_and_validate(root: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(root)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, limits) in [("login", &self.login), ("register", &self.register)] {
            if limits.max_attempts == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} max_attempts must be at least 1, got: 0",
                    label
                )));
            }
            if limits.window_seconds == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} window_seconds must be at least 1, got: 0",
                    label
                )));
            }
            if limits.window_seconds > SECONDS_PER_DAY {
                warn!(
                    "{} window_seconds ({}) exceeds one day. Users locked out of the {} form \
                    will stay locked out until the page is reloaded.",
                    label, limits.window_seconds, label
                );
            }
        }
        Ok(())
    }
}
