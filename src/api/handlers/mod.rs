//! REST endpoint handlers organized by resource.

pub mod admin;
pub mod catalog;
pub mod room;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(room::routes())
        .merge(catalog::routes())
        .merge(admin::routes())
}
