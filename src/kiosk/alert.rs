//! Best-effort audible alert.
//!
//! The terminal bell stands in for the tone the wall displays play.
//! Alerting must never take the display loop down, so every failure is
//! swallowed.

use std::io::Write;

/// Rings the terminal bell.
pub fn ring() {
    let mut stdout = std::io::stdout();
    if stdout
        .write_all(b"\x07")
        .and_then(|()| stdout.flush())
        .is_err()
    {
        tracing::debug!("alert bell unavailable");
    }
}
