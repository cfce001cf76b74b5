// This file is part of the product DocSpot.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::debug;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Sliding-window attempt limiter with independent per-identifier windows.
///
/// This is a cooperative client-side throttle, not a security boundary: it
/// only advises the form layer. State lives for the lifetime of the owning
/// value and is never persisted. `check` is a read-modify-write sequence, so
/// a caller sharing one limiter across tasks must wrap it in a mutex.
pub struct SlidingWindowLimiter {
    max_attempts: u32,
    window: Duration,
    attempts: HashMap<String, Vec<Instant>>,
}

impl SlidingWindowLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            attempts: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `true` when the attempt is allowed and records it. A denied
    /// attempt is not recorded and does not extend the window.
    pub fn check(&mut self, identifier: &str) -> bool {
        self.check_at(identifier, Instant::now())
    }

    fn check_at(&mut self, identifier: &str, now: Instant) -> bool {
        let recent = self.attempts.entry(identifier.to_string()).or_default();
        recent.retain(|attempt| now.duration_since(*attempt) < self.window);

        if recent.len() as u32 >= self.max_attempts {
            debug!("Attempt limit reached for {:?}", identifier);
            return false;
        }

        recent.push(now);
        true
    }
}
