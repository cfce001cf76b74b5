// This file is part of the product DocSpot.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use docspot_guard::config::{ConfigError, GUARD_CONFIG_FILE, GuardConfig};
use std::fs;

#[test]
fn loads_and_validates_a_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(GUARD_CONFIG_FILE),
        "login:\n  max_attempts: 3\n  window_seconds: 120\nregister:\n  max_attempts: 2\n",
    )
    .expect("write config");

    let config = GuardConfig::load_and_validate(dir.path()).expect("load");
    assert_eq!(config.login.max_attempts, 3);
    assert_eq!(config.login.window_seconds, 120);
    assert_eq!(config.register.max_attempts, 2);
    assert_eq!(config.register.window_seconds, 300);
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        GuardConfig::load_and_validate(dir.path()),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn malformed_yaml_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(GUARD_CONFIG_FILE), "login: [not a map").expect("write config");
    assert!(matches!(
        GuardConfig::load_and_validate(dir.path()),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn zero_window_fails_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(GUARD_CONFIG_FILE),
        "login:\n  window_seconds: 0\n",
    )
    .expect("write config");
    assert!(matches!(
        GuardConfig::load_and_validate(dir.path()),
        Err(ConfigError::ValidationError(_))
    ));
}
