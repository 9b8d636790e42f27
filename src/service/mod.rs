//! Service layer: business logic orchestration.
//!
//! [`RoomService`] owns the snapshot update/read protocol;
//! [`CatalogService`] owns the doctor/assistant/patient collections.
//! Both are thin coordinators over the [`crate::persistence`] store.

pub mod catalog_service;
pub mod room_service;

pub use catalog_service::{CatalogService, SaveOutcome};
pub use room_service::RoomService;
