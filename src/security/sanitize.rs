// This file is part of the product DocSpot.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const MAX_INPUT_CHARS: usize = 1000;

static DEFAULT_SANITIZER: Lazy<InputSanitizer> = Lazy::new(InputSanitizer::new);

/// Reduces user input to plain text: no tags, no attributes.
pub struct InputSanitizer {
    cleaner: ammonia::Builder<'static>,
}

impl InputSanitizer {
    pub fn new() -> Self {
        let mut cleaner = ammonia::Builder::default();
        cleaner
            .tags(HashSet::new())
            .generic_attributes(HashSet::new())
            .strip_comments(true);
        Self { cleaner }
    }

    pub fn clean(&self, input: &str) -> String {
        self.cleaner.clean(input).to_string()
    }
}

impl Default for InputSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Total sanitization pass over untrusted input: strip markup, trim, and cap
/// at [`MAX_INPUT_CHARS`]. The trailing trim after the cut keeps the function
/// idempotent when the cut lands on interior whitespace.
pub fn sanitize_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let cleaned = DEFAULT_SANITIZER.clean(input);
    let truncated: String = cleaned.trim().chars().take(MAX_INPUT_CHARS).collect();
    truncated.trim_end().to_string()
}

/// Escape user-supplied text for redisplay as markup-safe content. The
/// ampersand substitution runs first so later replacements cannot be
/// double-escaped.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
