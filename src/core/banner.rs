//! Transient error banner
//!
//! Holds at most one message. A message stays visible for a fixed window after
//! it was raised and then clears itself; raising a new message restarts the
//! window.

use std::time::Duration;

use tokio::time::Instant;

/// Default visibility window for error banners
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct TransientBanner {
    duration: Duration,
    message: Option<(String, Instant)>,
}

impl TransientBanner {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            message: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Raise a message at `now`, replacing any current one
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now));
    }

    /// The message, if it is still inside its window at `now`
    pub fn current(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((text, raised)) if now.saturating_duration_since(*raised) < self.duration => {
                Some(text.as_str())
            }
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

impl Default for TransientBanner {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_DURATION)
    }
}
