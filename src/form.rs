// This file is part of the product DocSpot.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::FormLimitConfig;
use crate::security::{
    PasswordStrength, SlidingWindowLimiter, validate_email, validate_name, validate_password,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Patient,
    Doctor,
    Admin,
}

/// Per-field validation outcome handed to the rendering layer. Produced
/// fresh on every call and never stored by the guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<PasswordStrength>,
}

impl FieldOutcome {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            strength: None,
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            error: Some(message.to_string()),
            strength: None,
        }
    }

    pub fn email(email: &str) -> Self {
        match validate_email(email) {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(err.message()),
        }
    }

    pub fn password(password: &str) -> Self {
        match validate_password(password) {
            Ok(strength) => Self {
                is_valid: true,
                error: None,
                strength: Some(strength),
            },
            Err(err) => Self::invalid(err.message()),
        }
    }

    pub fn name(name: &str) -> Self {
        match validate_name(name) {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(err.message()),
        }
    }
}

/// Raw sign-in field values as collected by the UI.
#[derive(Debug, Clone)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Raw sign-up field values as collected by the UI. The guard validates
/// against sanitized copies where the validators call for it, but never
/// rewrites these values.
#[derive(Debug, Clone)]
pub struct RegisterFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormDecision {
    Allowed,
    Rejected { errors: BTreeMap<&'static str, String> },
    RateLimited { message: String },
}

/// Aggregate guard wrapped around one form: throttles submissions, then runs
/// every field validator and collects the errors for inline display. One
/// guard per form instance, like the limiter it owns.
pub struct FormGuard {
    limiter: SlidingWindowLimiter,
}

impl FormGuard {
    pub fn new(limits: &FormLimitConfig) -> Self {
        let window = Duration::from_secs(limits.window_seconds);
        Self {
            limiter: SlidingWindowLimiter::new(limits.max_attempts, window),
        }
    }

    pub fn check_login(&mut self, fields: &LoginFields) -> FormDecision {
        let key = format!("login-{}", fields.email);
        if !self.limiter.check(&key) {
            return self.rate_limited();
        }

        let mut errors = BTreeMap::new();
        if let Err(err) = validate_email(&fields.email) {
            errors.insert("email", err.message().to_string());
        }
        if let Err(err) = validate_password(&fields.password) {
            errors.insert("password", err.message().to_string());
        }
        Self::decide(errors)
    }

    pub fn check_register(&mut self, fields: &RegisterFields) -> FormDecision {
        let key = format!("register-{}", fields.email);
        if !self.limiter.check(&key) {
            return self.rate_limited();
        }

        let mut errors = BTreeMap::new();
        if let Err(err) = validate_name(&fields.first_name) {
            errors.insert("first_name", err.message().to_string());
        }
        if let Err(err) = validate_name(&fields.last_name) {
            errors.insert("last_name", err.message().to_string());
        }
        if let Err(err) = validate_email(&fields.email) {
            errors.insert("email", err.message().to_string());
        }
        if let Err(err) = validate_password(&fields.password) {
            errors.insert("password", err.message().to_string());
        }
        if fields.confirm_password.is_empty() {
            errors.insert("confirm_password", "Please confirm your password".to_string());
        } else if fields.confirm_password != fields.password {
            errors.insert("confirm_password", "Passwords do not match".to_string());
        }
        Self::decide(errors)
    }

    fn decide(errors: BTreeMap<&'static str, String>) -> FormDecision {
        if errors.is_empty() {
            FormDecision::Allowed
        } else {
            FormDecision::Rejected { errors }
        }
    }

    fn rate_limited(&self) -> FormDecision {
        let minutes = self.limiter.window().as_secs().div_ceil(60).max(1);
        FormDecision::RateLimited {
            message: format!(
                "Too many attempts. Please wait {} minutes before trying again.",
                minutes
            ),
        }
    }
}
