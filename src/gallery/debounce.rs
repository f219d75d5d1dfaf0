//! Trailing-edge debounce for the category search box.
//!
//! There is one pending slot. Each keystroke overwrites it and pushes the due
//! time out by the quiet period, so only the last text of a burst is ever
//! committed. Time is passed in as a [`Duration`] since session start.

use std::time::Duration;

/// Quiet period used when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    text: String,
    due: Duration,
}

/// Single-slot debouncer.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use zgallery::gallery::Debouncer;
///
/// let mut debouncer = Debouncer::default();
/// debouncer.schedule("s", Duration::ZERO);
/// debouncer.schedule("sp", Duration::from_millis(100));
/// assert_eq!(debouncer.poll(Duration::from_millis(500)), None);
/// assert_eq!(debouncer.poll(Duration::from_millis(600)).as_deref(), Some("sp"));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Quiet period in use.
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Replaces any pending commit with `text`, due one quiet period after
    /// `now`. Returns the due time.
    pub fn schedule(&mut self, text: impl Into<String>, now: Duration) -> Duration {
        let due = now + self.quiet;
        self.pending = Some(Pending {
            text: text.into(),
            due,
        });
        due
    }

    /// Takes the pending text if it is due at `now`.
    pub fn poll(&mut self, now: Duration) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.text)
        } else {
            None
        }
    }

    /// Takes the pending text regardless of its due time.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.text)
    }

    /// Drops the pending commit.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Due time of the pending commit.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }
}
