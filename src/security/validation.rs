// This file is part of the product DocSpot.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::security::sanitize::sanitize_input;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MAX_EMAIL_CHARS: usize = 320;
pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MAX_PASSWORD_CHARS: usize = 128;
pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 50;

static EMAIL_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

/// Markup-injection signatures rejected in email input. Advisory hygiene
/// only; the sanitizer remains the authoritative defense against markup.
const SUSPICIOUS_PATTERNS: &[&str] =
    &["<script", "javascript:", "vbscript:", "onload=", "onerror="];

const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "123456789",
];

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    Required,
    TooLong,
    BadFormat,
}

impl EmailError {
    pub fn code(&self) -> &'static str {
        match self {
            EmailError::Required => "email_required",
            EmailError::TooLong => "email_too_long",
            EmailError::BadFormat => "email_bad_format",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EmailError::Required => "Email is required",
            EmailError::TooLong => "Email address too long",
            EmailError::BadFormat => "Invalid email format",
        }
    }
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EmailError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    Required,
    TooShort,
    TooLong,
    TooCommon,
    TooWeak,
}

impl PasswordError {
    pub fn code(&self) -> &'static str {
        match self {
            PasswordError::Required => "password_required",
            PasswordError::TooShort => "password_too_short",
            PasswordError::TooLong => "password_too_long",
            PasswordError::TooCommon => "password_too_common",
            PasswordError::TooWeak => "password_too_weak",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PasswordError::Required => "Password is required",
            PasswordError::TooShort => "Password must be at least 8 characters long",
            PasswordError::TooLong => "Password too long",
            PasswordError::TooCommon => "Password is too common",
            PasswordError::TooWeak => {
                "Password must contain at least 3 of: uppercase, lowercase, numbers, special characters"
            }
        }
    }
}

impl std::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PasswordError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Required,
    TooShort,
    TooLong,
    BadCharacters,
}

impl NameError {
    pub fn code(&self) -> &'static str {
        match self {
            NameError::Required => "name_required",
            NameError::TooShort => "name_too_short",
            NameError::TooLong => "name_too_long",
            NameError::BadCharacters => "name_bad_characters",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            NameError::Required => "Name is required",
            NameError::TooShort => "Name must be at least 2 characters long",
            NameError::TooLong => "Name must be less than 50 characters",
            NameError::BadCharacters => {
                "Name can only contain letters, spaces, hyphens, and apostrophes"
            }
        }
    }
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for NameError {}

/// Validate user email input
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.trim().is_empty() {
        return Err(EmailError::Required);
    }
    if email.chars().count() > MAX_EMAIL_CHARS {
        return Err(EmailError::TooLong);
    }
    let regex = match EMAIL_REGEX.as_ref() {
        Ok(regex) => regex,
        Err(err) => {
            warn!("Email regex failed to compile: {}", err);
            return Err(EmailError::BadFormat);
        }
    };
    if !regex.is_match(email) {
        return Err(EmailError::BadFormat);
    }
    let lowered = email.to_lowercase();
    for pattern in SUSPICIOUS_PATTERNS {
        if lowered.contains(pattern) {
            debug!("Rejected email carrying markup signature {:?}", pattern);
            return Err(EmailError::BadFormat);
        }
    }
    Ok(())
}

fn criteria_count(password: &str) -> usize {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|met| **met)
        .count()
}

/// Validate password input and score its strength. A password that passes
/// the gate is always `Medium` or `Strong`; `Weak` is only produced by
/// [`password_strength`] for partial input.
pub fn validate_password(password: &str) -> Result<PasswordStrength, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Required);
    }
    let length = password.chars().count();
    if length < MIN_PASSWORD_CHARS {
        return Err(PasswordError::TooShort);
    }
    if length > MAX_PASSWORD_CHARS {
        return Err(PasswordError::TooLong);
    }
    if COMMON_PASSWORDS.contains(&password.to_lowercase().as_str()) {
        return Err(PasswordError::TooCommon);
    }
    match criteria_count(password) {
        4 => Ok(PasswordStrength::Strong),
        3 => Ok(PasswordStrength::Medium),
        _ => Err(PasswordError::TooWeak),
    }
}

/// Ungated strength score for live feedback while the user is still typing.
pub fn password_strength(password: &str) -> PasswordStrength {
    match criteria_count(password) {
        4 => PasswordStrength::Strong,
        3 => PasswordStrength::Medium,
        _ => PasswordStrength::Weak,
    }
}

/// Validate a person-name field. Length and character checks run against the
/// sanitized value; the raw value is what callers keep in form state.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Required);
    }

    let sanitized = sanitize_input(name);

    let length = sanitized.chars().count();
    if length < MIN_NAME_CHARS {
        return Err(NameError::TooShort);
    }
    if length > MAX_NAME_CHARS {
        return Err(NameError::TooLong);
    }
    for ch in sanitized.chars() {
        if !ch.is_ascii_alphabetic() && !ch.is_whitespace() && ch != '-' && ch != '\'' {
            return Err(NameError::BadCharacters);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@clinic-mail.co.uk").is_ok());

        assert_eq!(validate_email(""), Err(EmailError::Required));
        assert_eq!(validate_email("   "), Err(EmailError::Required));
        assert_eq!(validate_email("not-an-email"), Err(EmailError::BadFormat));
        assert_eq!(validate_email("user@localhost"), Err(EmailError::BadFormat));
        assert_eq!(validate_email("user@example.c"), Err(EmailError::BadFormat));
        assert_eq!(validate_email("user example@x.com"), Err(EmailError::BadFormat));

        let long_email = format!("{}@example.com", "a".repeat(MAX_EMAIL_CHARS));
        assert_eq!(validate_email(&long_email), Err(EmailError::TooLong));
    }

    #[test]
    fn test_validate_email_rejects_markup_signatures() {
        // Same error kind as a plain format miss, never a distinct one.
        for input in [
            "<script>alert(1)</script>@x.com",
            "user<SCRIPT>@example.com",
            "javascript:alert(1)@example.com",
            "vbscript:msgbox@example.com",
            "onload=evil@example.com",
            "onerror=evil@example.com",
        ] {
            assert_eq!(validate_email(input), Err(EmailError::BadFormat), "{}", input);
        }
    }

    #[test]
    fn test_validate_password_gate() {
        assert_eq!(validate_password(""), Err(PasswordError::Required));
        assert_eq!(validate_password("Ab1!x"), Err(PasswordError::TooShort));
        assert_eq!(
            validate_password(&"Aa1!".repeat(33)),
            Err(PasswordError::TooLong)
        );
        assert_eq!(validate_password("password"), Err(PasswordError::TooCommon));
        assert_eq!(validate_password("PASSWORD"), Err(PasswordError::TooCommon));
        assert_eq!(validate_password("12345678"), Err(PasswordError::TooCommon));
        // Only two of the four criteria.
        assert_eq!(validate_password("abcdef12"), Err(PasswordError::TooWeak));
        assert_eq!(
            validate_password("abcdef12").unwrap_err().message(),
            "Password must contain at least 3 of: uppercase, lowercase, numbers, special characters"
        );
    }

    #[test]
    fn test_validate_password_strength() {
        assert_eq!(validate_password("Abcd123!"), Ok(PasswordStrength::Strong));
        assert_eq!(validate_password("Abcdefg1"), Ok(PasswordStrength::Medium));
        assert_eq!(validate_password("abcdefg1!"), Ok(PasswordStrength::Medium));
        // Exactly 128 chars with all four classes still passes.
        let edge = format!("Aa1!{}", "x".repeat(124));
        assert_eq!(validate_password(&edge), Ok(PasswordStrength::Strong));
    }

    #[test]
    fn test_password_strength_partial_input() {
        assert_eq!(password_strength(""), PasswordStrength::Weak);
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("Abc1"), PasswordStrength::Medium);
        assert_eq!(password_strength("Abc1!"), PasswordStrength::Strong);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("John").is_ok());
        assert!(validate_name("Mary O'Connor").is_ok());
        assert!(validate_name("Jean-Pierre").is_ok());

        assert_eq!(validate_name(""), Err(NameError::Required));
        assert_eq!(validate_name("   "), Err(NameError::Required));
        assert_eq!(validate_name("J"), Err(NameError::TooShort));
        assert_eq!(validate_name(&"a".repeat(51)), Err(NameError::TooLong));
        assert_eq!(validate_name("John123"), Err(NameError::BadCharacters));
        assert_eq!(validate_name("John.Doe"), Err(NameError::BadCharacters));
    }

    #[test]
    fn test_validate_name_checks_sanitized_value() {
        // Markup is stripped before the checks, so the leftover text decides.
        assert!(validate_name("<b>John</b>").is_ok());
        // A whole-markup name sanitizes to nothing and fails the length check.
        assert_eq!(
            validate_name("<script>alert(1)</script>"),
            Err(NameError::TooShort)
        );
        // The ampersand survives sanitization as an entity and is rejected.
        assert_eq!(validate_name("Mary&Bob"), Err(NameError::BadCharacters));
    }
}
