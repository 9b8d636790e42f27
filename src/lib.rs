//! # kiosk-gateway
//!
//! REST API and kiosk display client for a clinic room status board.
//!
//! Receptionists assign a doctor/assistant/patient/appointment snapshot
//! to one of the clinic's rooms through the admin panel; a kiosk display
//! in each room polls the server and renders the current snapshot. The
//! server keeps exactly one snapshot per room — every assignment is a
//! full overwrite, no history is retained.
//!
//! ## Architecture
//!
//! ```text
//! Admin panel / kiosk-display (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RoomService / CatalogService (service/)
//!     ├── AdminSession (auth/)
//!     │
//!     ├── Domain model (domain/)
//!     │
//!     └── PostgreSQL store (persistence/)
//! ```
//!
//! The kiosk client (`kiosk/` plus the `kiosk-display` binary) is a
//! long-running terminal process, one per room, that polls the snapshot
//! endpoint on a schedule and drives two local countdown timers
//! persisted across restarts.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod kiosk;
pub mod persistence;
pub mod service;
