//! `kiosk-display` — wall display client for one clinic room.
//!
//! Polls the kiosk-gateway for the room's current assignment, renders
//! it to the terminal, and drives the two treatment timers. Intended to
//! run full-screen on the wall device, one process per room.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default                  | Description                       |
//! |-------------------|----------|--------------------------|-----------------------------------|
//! | `BOARD_URL`       | no       | `http://localhost:3000`  | Base URL of the kiosk-gateway     |
//! | `ROOM_ID`         | yes      | --                       | Room this display is mounted in   |
//! | `KIOSK_STATE_DIR` | no       | `.`                      | Directory for timer state files   |

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use kiosk_gateway::domain::RoomId;
use kiosk_gateway::kiosk::{self, DisplayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr — stdout belongs to the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let server_url =
        std::env::var("BOARD_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let room_id = std::env::var("ROOM_ID").unwrap_or_else(|_| {
        tracing::error!("ROOM_ID environment variable is required");
        std::process::exit(1);
    });
    let room_id = RoomId::parse(&room_id).unwrap_or_else(|_| {
        tracing::error!("ROOM_ID must be a positive integer");
        std::process::exit(1);
    });

    let state_dir = PathBuf::from(
        std::env::var("KIOSK_STATE_DIR").unwrap_or_else(|_| ".".to_string()),
    );

    tracing::info!(%room_id, url = %server_url, "starting kiosk display");

    kiosk::run(DisplayConfig {
        server_url,
        room_id,
        state_dir,
    })
    .await
}
