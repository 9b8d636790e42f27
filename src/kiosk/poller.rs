//! Polling policy for the kiosk display.
//!
//! Two schedules bound the staleness of the board:
//!
//! - a recurring poll every [`POLL_INTERVAL`], issued only while the
//!   local hour is inside the operating window — the clinic is closed
//!   overnight and the displays stop generating load;
//! - an unconditional hard refresh whenever [`HARD_REFRESH_MAX_AGE`] has
//!   elapsed since the last one, checked on a lighter
//!   [`HARD_REFRESH_CHECK_INTERVAL`] tick. This guards against missed
//!   polls and against window-edge miscalculation.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Timelike};

/// Interval between regular window-gated polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Interval of the hard-refresh age check.
pub const HARD_REFRESH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Maximum age of the displayed data before a fetch is forced.
pub const HARD_REFRESH_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// First hour of the operating window (inclusive).
pub const OPENING_HOUR: u32 = 9;

/// End hour of the operating window (exclusive).
pub const CLOSING_HOUR: u32 = 20;

/// Whether a local hour falls inside the operating window.
#[must_use]
pub const fn hour_in_window(hour: u32) -> bool {
    hour >= OPENING_HOUR && hour < CLOSING_HOUR
}

/// Whether the given local instant is inside the operating window.
#[must_use]
pub fn within_operating_window(now: DateTime<Local>) -> bool {
    hour_in_window(now.hour())
}

/// Whether a hard refresh is due.
#[must_use]
pub fn hard_refresh_due(last_hard: Instant, now: Instant) -> bool {
    now.duration_since(last_hard) >= HARD_REFRESH_MAX_AGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_edges_are_half_open() {
        assert!(!hour_in_window(8));
        assert!(hour_in_window(9));
        assert!(hour_in_window(13));
        assert!(hour_in_window(19));
        assert!(!hour_in_window(20));
        assert!(!hour_in_window(23));
        assert!(!hour_in_window(0));
    }

    #[test]
    fn hard_refresh_fires_at_the_bound() {
        let base = Instant::now();
        let at_bound = base + HARD_REFRESH_MAX_AGE;
        let past_bound = at_bound + Duration::from_secs(1);
        let before_bound = base + Duration::from_secs(299);

        assert!(hard_refresh_due(base, at_bound));
        assert!(hard_refresh_due(base, past_bound));
        assert!(!hard_refresh_due(base, before_bound));
        assert!(!hard_refresh_due(base, base));
    }
}
