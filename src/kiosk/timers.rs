//! Countdown timers with durable state.
//!
//! Two named timers (7:00 and 17:00 minutes) back the treatment flow in
//! each room. The authoritative datum of a running timer is `targetAt`,
//! an absolute instant: `remainingMs` is recomputed from it on every
//! tick and on reload, so a countdown survives a restart — or the whole
//! device sleeping through it — without drifting or going negative.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cadence of the countdown recomputation tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Identifies one of the two room timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKey {
    /// The 7-minute timer.
    #[serde(rename = "t7")]
    T7,
    /// The 17-minute timer.
    #[serde(rename = "t17")]
    T17,
}

impl TimerKey {
    /// Both timers, in display order.
    pub const ALL: [Self; 2] = [Self::T7, Self::T17];

    /// Full duration of this timer in milliseconds.
    #[must_use]
    pub const fn duration_ms(self) -> i64 {
        match self {
            Self::T7 => 7 * 60 * 1000,
            Self::T17 => 17 * 60 * 1000,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::T7 => "7:00",
            Self::T17 => "17:00",
        }
    }
}

/// State of a single countdown timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Whether the countdown is active.
    pub running: bool,
    /// Absolute deadline of a running countdown.
    pub target_at: Option<DateTime<Utc>>,
    /// Milliseconds left, recomputed from `target_at`; display cache
    /// only — never trusted across a reload.
    pub remaining_ms: i64,
}

impl TimerState {
    /// The stopped state: full duration, no deadline.
    #[must_use]
    pub const fn stopped(key: TimerKey) -> Self {
        Self {
            running: false,
            target_at: None,
            remaining_ms: key.duration_ms(),
        }
    }
}

/// The pair of timers belonging to one room, persisted as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerBank {
    /// The 7-minute timer.
    pub t7: TimerState,
    /// The 17-minute timer.
    pub t17: TimerState,
}

impl Default for TimerBank {
    fn default() -> Self {
        Self {
            t7: TimerState::stopped(TimerKey::T7),
            t17: TimerState::stopped(TimerKey::T17),
        }
    }
}

impl TimerBank {
    /// Returns the state of one timer.
    #[must_use]
    pub const fn state(&self, key: TimerKey) -> &TimerState {
        match key {
            TimerKey::T7 => &self.t7,
            TimerKey::T17 => &self.t17,
        }
    }

    fn state_mut(&mut self, key: TimerKey) -> &mut TimerState {
        match key {
            TimerKey::T7 => &mut self.t7,
            TimerKey::T17 => &mut self.t17,
        }
    }

    /// Starts a timer: deadline `now + duration`, full remaining time.
    pub fn start(&mut self, key: TimerKey, now: DateTime<Utc>) {
        *self.state_mut(key) = TimerState {
            running: true,
            target_at: Some(now + chrono::Duration::milliseconds(key.duration_ms())),
            remaining_ms: key.duration_ms(),
        };
    }

    /// Stops a timer, discarding partial progress.
    pub fn stop(&mut self, key: TimerKey) {
        *self.state_mut(key) = TimerState::stopped(key);
    }

    /// Starts the timer if stopped, stops it if running.
    pub fn toggle(&mut self, key: TimerKey, now: DateTime<Utc>) {
        if self.state(key).running {
            self.stop(key);
        } else {
            self.start(key, now);
        }
    }

    /// Recomputes every running countdown against `now`.
    ///
    /// Returns the timers that reached zero on this tick; each fired
    /// timer is auto-reset to the stopped state at full duration.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<TimerKey> {
        let mut fired = Vec::new();
        for key in TimerKey::ALL {
            let state = self.state_mut(key);
            let Some(target_at) = state.target_at else {
                continue;
            };
            if !state.running {
                continue;
            }
            let remaining = (target_at - now).num_milliseconds().max(0);
            state.remaining_ms = remaining;
            if remaining == 0 {
                *state = TimerState::stopped(key);
                fired.push(key);
            }
        }
        fired
    }

    /// Loads a persisted bank, or `None` when the file is absent or
    /// unreadable — a corrupt state file falls back to fresh timers
    /// rather than taking the display down.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        let raw = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(bank) => Some(bank),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt timer state");
                None
            }
        }
    }

    /// Persists the bank; failures are logged and swallowed.
    pub fn save(&self, path: &Path) {
        let Ok(json) = serde_json::to_string(self) else {
            return;
        };
        if let Err(e) = std::fs::write(path, json) {
            tracing::warn!(path = %path.display(), error = %e, "failed to persist timer state");
        }
    }
}

/// Name of the per-room timer state file.
#[must_use]
pub fn state_file_name(room_id: crate::domain::RoomId) -> String {
    format!("kiosk-timers-{room_id}.json")
}

/// Formats milliseconds as `MM:SS`, clamping negatives to zero.
#[must_use]
pub fn mmss(ms: i64) -> String {
    let total_secs = (ms / 1000).max(0);
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn start_arms_the_deadline() {
        let now = Utc::now();
        let mut bank = TimerBank::default();
        bank.start(TimerKey::T7, now);

        let state = bank.state(TimerKey::T7);
        assert!(state.running);
        assert_eq!(
            state.target_at,
            Some(now + chrono::Duration::minutes(7))
        );
        assert_eq!(state.remaining_ms, TimerKey::T7.duration_ms());
    }

    #[test]
    fn stop_resets_to_full_duration() {
        let now = Utc::now();
        let mut bank = TimerBank::default();
        bank.start(TimerKey::T7, now);
        let _ = bank.tick(now + chrono::Duration::minutes(3));
        bank.stop(TimerKey::T7);

        assert_eq!(bank.state(TimerKey::T7), &TimerState::stopped(TimerKey::T7));
    }

    #[test]
    fn tick_counts_down_from_the_deadline() {
        let now = Utc::now();
        let mut bank = TimerBank::default();
        bank.start(TimerKey::T17, now);

        let fired = bank.tick(now + chrono::Duration::minutes(5));
        assert!(fired.is_empty());
        assert_eq!(
            bank.state(TimerKey::T17).remaining_ms,
            12 * 60 * 1000
        );
    }

    #[test]
    fn expiry_fires_once_and_resets() {
        let now = Utc::now();
        let mut bank = TimerBank::default();
        bank.start(TimerKey::T7, now);

        let fired = bank.tick(now + chrono::Duration::minutes(8));
        assert_eq!(fired, vec![TimerKey::T7]);
        assert_eq!(bank.state(TimerKey::T7), &TimerState::stopped(TimerKey::T7));

        // Next tick is quiet — the timer already reset.
        let fired = bank.tick(now + chrono::Duration::minutes(9));
        assert!(fired.is_empty());
    }

    #[test]
    fn timers_are_independent() {
        let now = Utc::now();
        let mut bank = TimerBank::default();
        bank.start(TimerKey::T7, now);
        bank.start(TimerKey::T17, now);

        let fired = bank.tick(now + chrono::Duration::minutes(8));
        assert_eq!(fired, vec![TimerKey::T7]);
        assert!(bank.state(TimerKey::T17).running);
    }

    #[test]
    fn stale_reload_fires_instead_of_going_negative() {
        // A bank persisted mid-countdown whose deadline passed while the
        // process was down: the first tick must fire and reset, never
        // display a negative remainder.
        let now = Utc::now();
        let stale = TimerBank {
            t7: TimerState {
                running: true,
                target_at: Some(now - chrono::Duration::minutes(2)),
                remaining_ms: 120_000, // stale display cache, must be ignored
            },
            t17: TimerState::stopped(TimerKey::T17),
        };

        let path = std::env::temp_dir().join(format!(
            "kiosk-timers-test-{}.json",
            std::process::id()
        ));
        stale.save(&path);
        let Some(mut bank) = TimerBank::load(&path) else {
            panic!("expected persisted bank to load");
        };
        let _ = std::fs::remove_file(&path);

        let fired = bank.tick(now);
        assert_eq!(fired, vec![TimerKey::T7]);
        assert_eq!(bank.state(TimerKey::T7), &TimerState::stopped(TimerKey::T7));
    }

    #[test]
    fn load_ignores_corrupt_state() {
        let path = std::env::temp_dir().join(format!(
            "kiosk-timers-corrupt-{}.json",
            std::process::id()
        ));
        if std::fs::write(&path, "not json").is_err() {
            panic!("temp file write failed");
        }
        assert!(TimerBank::load(&path).is_none());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_is_none() {
        let path = std::env::temp_dir().join("kiosk-timers-nonexistent.json");
        assert!(TimerBank::load(&path).is_none());
    }

    #[test]
    fn mmss_formats_and_clamps() {
        assert_eq!(mmss(0), "00:00");
        assert_eq!(mmss(-500), "00:00");
        assert_eq!(mmss(61_000), "01:01");
        assert_eq!(mmss(TimerKey::T7.duration_ms()), "07:00");
        assert_eq!(mmss(TimerKey::T17.duration_ms()), "17:00");
    }

    #[test]
    fn toggle_flips_between_running_and_stopped() {
        let now = Utc::now();
        let mut bank = TimerBank::default();

        bank.toggle(TimerKey::T7, now);
        assert!(bank.state(TimerKey::T7).running);

        bank.toggle(TimerKey::T7, now);
        assert!(!bank.state(TimerKey::T7).running);
        assert_eq!(
            bank.state(TimerKey::T7).remaining_ms,
            TimerKey::T7.duration_ms()
        );
    }
}
