//! The display loop: polling, timers, stdin commands, rendering.
//!
//! One `select!` loop drives four schedules — the window-gated poll,
//! the hard-refresh check, the 200 ms countdown tick, and operator
//! input. The loop ends on `q` or ctrl-c; because every fetch is
//! awaited inside the loop, teardown discards any in-flight response.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, Utc};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::dto::RoomStateResponse;
use crate::domain::RoomId;

use super::alert;
use super::client::BoardClient;
use super::display;
use super::poller::{self, HARD_REFRESH_CHECK_INTERVAL, POLL_INTERVAL};
use super::timers::{TICK_INTERVAL, TimerBank, TimerKey, state_file_name};

/// Configuration for one display instance.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Base URL of the kiosk-gateway server.
    pub server_url: String,
    /// The room this display is mounted in.
    pub room_id: RoomId,
    /// Directory holding the per-room timer state file.
    pub state_dir: PathBuf,
}

/// An operator keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start or stop one of the timers.
    Toggle(TimerKey),
    /// End the display session.
    Quit,
}

/// Parses an input line into a command; unknown input is ignored.
fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "7" => Some(Command::Toggle(TimerKey::T7)),
        "17" => Some(Command::Toggle(TimerKey::T17)),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Runs the display loop until the operator quits.
///
/// # Errors
///
/// Never fails in practice — fetch and persistence errors degrade the
/// display instead of stopping it — but the signature leaves room for
/// startup failures.
pub async fn run(config: DisplayConfig) -> anyhow::Result<()> {
    let client = BoardClient::new(config.server_url.clone());
    let state_path = config.state_dir.join(state_file_name(config.room_id));
    let mut timers = TimerBank::load(&state_path).unwrap_or_default();

    let mut latest: Option<RoomStateResponse> = None;
    let mut error: Option<String> = None;
    let mut last_hard = Instant::now();

    // Initial fetch, one scheduling tick after setup.
    fetch(&client, config.room_id, &mut latest, &mut error).await;

    let mut poll = tokio::time::interval(POLL_INTERVAL);
    poll.tick().await; // consume the immediate tick; the initial fetch just ran
    let mut hard_check = tokio::time::interval(HARD_REFRESH_CHECK_INTERVAL);
    hard_check.tick().await;
    let mut countdown = tokio::time::interval(TICK_INTERVAL);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdin_open = true;

    let mut rendered = String::new();
    redraw(&config, latest.as_ref(), error.as_deref(), &timers, &mut rendered);

    loop {
        tokio::select! {
            _ = poll.tick() => {
                if poller::within_operating_window(Local::now()) {
                    fetch(&client, config.room_id, &mut latest, &mut error).await;
                }
            }
            _ = hard_check.tick() => {
                let now = Instant::now();
                if poller::hard_refresh_due(last_hard, now) {
                    last_hard = now;
                    fetch(&client, config.room_id, &mut latest, &mut error).await;
                }
            }
            _ = countdown.tick() => {
                let before = timers.clone();
                let fired = timers.tick(Utc::now());
                for key in &fired {
                    tracing::info!(timer = key.label(), "timer finished");
                }
                if !fired.is_empty() {
                    alert::ring();
                }
                if timers != before {
                    timers.save(&state_path);
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => match parse_command(&line) {
                        Some(Command::Toggle(key)) => {
                            timers.toggle(key, Utc::now());
                            timers.save(&state_path);
                        }
                        Some(Command::Quit) => break,
                        None => {}
                    },
                    // Stdin closed (e.g. running detached): keep the
                    // poll and timer schedules alive without it.
                    _ => stdin_open = false,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("display shutting down");
                break;
            }
        }

        redraw(&config, latest.as_ref(), error.as_deref(), &timers, &mut rendered);
    }

    timers.save(&state_path);
    Ok(())
}

/// Renders the board and draws it only when something changed.
fn redraw(
    config: &DisplayConfig,
    latest: Option<&RoomStateResponse>,
    error: Option<&str>,
    timers: &TimerBank,
    rendered: &mut String,
) {
    let board = display::render_board(
        config.room_id,
        latest,
        error,
        timers,
        poller::within_operating_window(Local::now()),
    );
    if board != *rendered {
        display::draw(&board);
        *rendered = board;
    }
}

/// Fetches the current snapshot, updating the cache or the footer error.
///
/// A failed fetch keeps the previous data on screen — the display
/// degrades to stale rather than blank.
async fn fetch(
    client: &BoardClient,
    room_id: RoomId,
    latest: &mut Option<RoomStateResponse>,
    error: &mut Option<String>,
) {
    match client.current(room_id).await {
        Ok(response) => {
            *latest = Some(response);
            *error = None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "snapshot fetch failed");
            *error = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_with_whitespace() {
        assert_eq!(parse_command("7"), Some(Command::Toggle(TimerKey::T7)));
        assert_eq!(parse_command(" 17 "), Some(Command::Toggle(TimerKey::T17)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn unknown_input_is_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("8"), None);
        assert_eq!(parse_command("start"), None);
    }
}
