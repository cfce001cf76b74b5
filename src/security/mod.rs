// This file is part of the product DocSpot.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod rate_limit;
mod sanitize;
mod token;
mod validation;

pub use rate_limit::SlidingWindowLimiter;
pub use sanitize::{InputSanitizer, MAX_INPUT_CHARS, escape_html, sanitize_input};
pub use token::{CSRF_TOKEN_BYTES, generate_csrf_token};
pub use validation::{
    EmailError, MAX_EMAIL_CHARS, MAX_NAME_CHARS, MAX_PASSWORD_CHARS, MIN_NAME_CHARS,
    MIN_PASSWORD_CHARS, NameError, PasswordError, PasswordStrength, password_strength,
    validate_email, validate_name, validate_password,
};
