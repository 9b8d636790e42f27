//! Kiosk display client.
//!
//! A single continuously-running process per room. It polls the room
//! snapshot endpoint on a schedule ([`poller`]), renders the current
//! assignment to the terminal ([`display`]), and drives two countdown
//! timers persisted across restarts ([`timers`]). Everything runs on
//! one `select!` loop — suspension points are network I/O and timer
//! waits only, and tearing the loop down discards any late response.

pub mod alert;
pub mod client;
pub mod display;
pub mod poller;
pub mod runner;
pub mod timers;

pub use client::BoardClient;
pub use runner::{DisplayConfig, run};
pub use timers::{TimerBank, TimerKey};
