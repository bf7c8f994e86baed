//! # Vote Rate Limit
//!
//! Fixed one-minute windows per client IP, aligned to the clock: every key's window is
//! `unix_seconds / 60`, so counters all reset together at the top of each minute.
//!
//! Keys come from `X-Forwarded-For` and can be anything, so once the clock moves into a new
//! window every counter from an older one is dropped.
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::utils::unix_now;

const WINDOW_SECS: u64 = 60;

pub struct RateLimiter {
    limit: u32,
    current: AtomicU64,
    windows: DashMap<String, (u64, u32)>,
}

impl RateLimiter {
    pub fn per_minute(limit: u32) -> Self {
        Self {
            limit,
            current: AtomicU64::new(0),
            windows: DashMap::new(),
        }
    }

    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, unix_now())
    }

    /// Counts one hit for `key` at unix time `now`, false once the window is full.
    pub fn check_at(&self, key: &str, now: u64) -> bool {
        let window = now / WINDOW_SECS;

        if self.current.fetch_max(window, Ordering::Relaxed) < window {
            self.windows.retain(|_, (started, _)| *started >= window);
        }

        let mut entry = self.windows.entry(key.to_string()).or_insert((window, 0));
        let (started, hits) = entry.value_mut();

        if *started != window {
            *started = window;
            *hits = 0;
        }

        if *hits >= self.limit {
            return false;
        }

        *hits += 1;
        true
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.windows.len()
    }
}
