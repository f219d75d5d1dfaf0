//! Bookkeeping for host timers.
//!
//! Zellij timers cannot be cancelled or told apart when they fire. The book
//! remembers the due time of every timer it armed and arms a new one only when
//! no outstanding timer fires at or before the next deadline. Each tick retires
//! the earliest outstanding timer.

use std::time::Duration;

/// Outstanding host timers, by due time.
#[derive(Debug, Clone, Default)]
pub struct TimerBook {
    outstanding: Vec<Duration>,
}

impl TimerBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers armed and not yet fired.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Records a tick, retiring the earliest outstanding timer.
    pub fn fired(&mut self) {
        if let Some((index, _)) = self
            .outstanding
            .iter()
            .enumerate()
            .min_by_key(|(_, due)| **due)
        {
            self.outstanding.swap_remove(index);
        }
    }

    /// Returns the delay of a timer to arm for `deadline`, if one is needed.
    pub fn arm(&mut self, now: Duration, deadline: Option<Duration>) -> Option<Duration> {
        let deadline = deadline?;
        if self.outstanding.iter().any(|due| *due <= deadline) {
            return None;
        }
        self.outstanding.push(deadline);
        let delay = deadline.saturating_sub(now);
        tracing::trace!(delay_ms = delay.as_millis(), "arming timer");
        Some(delay)
    }
}
