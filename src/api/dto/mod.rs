//! Data Transfer Objects for REST request/response serialization.
//!
//! Wire field names are camelCase (`doctorName`, `updatedAt`, …); every
//! success body carries `ok: true` and failures use the
//! [`crate::error::ErrorResponse`] envelope.

pub mod admin_dto;
pub mod catalog_dto;
pub mod room_dto;

pub use admin_dto::*;
pub use catalog_dto::*;
pub use room_dto::*;
