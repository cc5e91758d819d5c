//! Submit progress bar state.
//!
//! The bar tracks how many unprocessed rows have been submitted. The host UI
//! drives it through [`ProgressBar::start`], [`ProgressBar::advance`] and
//! [`ProgressBar::finish`], waits [`SETTLE_DELAY`] so the full bar stays
//! visible briefly, then calls [`ProgressBar::settle`].

use std::time::Duration;

use tracing::debug;

/// How long a finished bar stays on screen before it hides.
pub const SETTLE_DELAY: Duration = Duration::from_millis(600);

/// Progress bar state for the submit flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressBar {
    total: usize,
    current: usize,
    visible: bool,
    finishing: bool,
}

impl ProgressBar {
    /// Create a hidden, empty progress bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the bar at 0% for `unprocessed_rows` rows.
    pub fn start(&mut self, unprocessed_rows: usize) {
        debug!(total = unprocessed_rows, "progress started");
        self.total = unprocessed_rows;
        self.current = 0;
        self.finishing = false;
        self.visible = true;
    }

    /// Advance by one row.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Advance by `by` rows, at least one, capped to the total.
    pub fn advance_by(&mut self, by: usize) {
        self.current = self.total.min(self.current.saturating_add(by.max(1)));
    }

    /// Fill the bar and enter the finishing state.
    ///
    /// A bar started with zero rows (bulk upload without per-row progress) is
    /// given a total of one so it can still fill to 100%. Returns how long the
    /// caller should wait before calling [`ProgressBar::settle`].
    pub fn finish(&mut self) -> Duration {
        if self.total == 0 {
            self.total = 1;
        }
        self.current = self.total;
        self.finishing = true;
        debug!(total = self.total, "progress finished");
        SETTLE_DELAY
    }

    /// Hide the bar after the settle delay.
    pub fn settle(&mut self) {
        self.visible = false;
        self.finishing = false;
    }

    /// Return to the initial hidden, empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rows expected in this submission.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rows submitted so far.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_finishing(&self) -> bool {
        self.finishing
    }

    /// Completed fraction, clamped to `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Whole percent complete, rounded down, `0..=100`.
    pub fn percent(&self) -> u8 {
        let percent = self
            .current
            .saturating_mul(100)
            .checked_div(self.total)
            .unwrap_or(0);
        u8::try_from(percent.min(100)).unwrap_or(100)
    }
}
