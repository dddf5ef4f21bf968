//! Redirect loop guard.
//!
//! Counts redirects in a sliding time window and refuses further ones once
//! the budget is spent, so a host that keeps landing on unknown paths stops
//! bouncing between them.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::schema::RedirectConfig;

/// Sliding-window redirect budget.
#[derive(Debug, Clone)]
pub struct RedirectGuard {
    max_redirects: usize,
    window: Duration,
    history: VecDeque<Instant>,
}

impl RedirectGuard {
    pub fn new(max_redirects: usize, window: Duration) -> Self {
        Self {
            max_redirects,
            window,
            history: VecDeque::new(),
        }
    }

    /// Record a redirect if the budget allows it.
    ///
    /// Returns false, without recording, when `max_redirects` redirects
    /// already happened within the window.
    pub fn try_redirect(&mut self) -> bool {
        self.try_redirect_at(Instant::now())
    }

    fn try_redirect_at(&mut self, now: Instant) -> bool {
        while let Some(&oldest) = self.history.front() {
            if now.duration_since(oldest) >= self.window {
                self.history.pop_front();
            } else {
                break;
            }
        }

        if self.history.len() >= self.max_redirects {
            tracing::warn!(
                redirects = self.history.len(),
                window = ?self.window,
                "Redirect budget exhausted, suppressing redirect"
            );
            return false;
        }

        self.history.push_back(now);
        true
    }

    /// Forget recorded redirects, e.g. once a page rendered successfully.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Redirects currently counted against the budget.
    pub fn recent(&self) -> usize {
        self.history.len()
    }
}

impl From<&RedirectConfig> for RedirectGuard {
    fn from(config: &RedirectConfig) -> Self {
        Self::new(config.max_redirects, Duration::from_millis(config.window_ms))
    }
}
