//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::KioskConfig;
use crate::service::{CatalogService, RoomService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Room snapshot update/read service.
    pub room_service: Arc<RoomService>,
    /// Catalog CRUD service.
    pub catalog_service: Arc<CatalogService>,
    /// Server configuration (admin PIN, session secret).
    pub config: Arc<KioskConfig>,
}
