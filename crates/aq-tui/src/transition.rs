//! Cosmetic fade between scenes.
//!
//! The fade only affects how the scene is drawn. It starts after the session
//! has already moved to the new scene.

use std::time::{Duration, Instant};

/// A fade that dims scene content for a fixed time after it starts.
#[derive(Debug, Clone)]
pub struct Fade {
    duration: Duration,
    started: Option<Instant>,
}

impl Fade {
    /// Create an idle fade of the given length.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }

    /// Start (or restart) the fade at `now`. A zero-length fade never starts.
    pub fn begin(&mut self, now: Instant) {
        if !self.duration.is_zero() {
            self.started = Some(now);
        }
    }

    /// Time left at `now`, or `None` once the fade is over.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let started = self.started?;
        self.duration
            .checked_sub(now.saturating_duration_since(started))
            .filter(|left| !left.is_zero())
    }

    /// Whether content should be drawn dimmed at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }
}
