//! Admin session gate: signed cookie tokens and request extractors.
//!
//! There is no per-user identity — the gate is a single boolean. A
//! successful PIN login issues an HS256-signed token carried in the
//! `kiosco_admin` cookie; catalog mutation endpoints require it.

pub mod session;

pub use session::{AdminSession, RequireAdmin, SESSION_COOKIE};
