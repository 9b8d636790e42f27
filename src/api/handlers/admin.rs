//! Admin session handlers: PIN login, session introspection, logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{AckResponse, LoginRequest, MeResponse};
use crate::app_state::AppState;
use crate::auth::AdminSession;
use crate::auth::session::{clear_session_cookie, issue_session, session_cookie};
use crate::error::{ErrorResponse, KioskError};

/// `POST /admin/login` — Exchange the shared PIN for a session cookie.
///
/// # Errors
///
/// Returns [`KioskError::InvalidRequest`] when the PIN is missing and
/// [`KioskError::InvalidPin`] when it does not match.
#[utoipa::path(
    post,
    path = "/api/v1/admin/login",
    tag = "Admin",
    summary = "Admin login",
    description = "Validates the shared PIN and sets a signed HttpOnly session cookie.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = AckResponse),
        (status = 400, description = "Missing PIN", body = ErrorResponse),
        (status = 401, description = "Wrong PIN", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, KioskError> {
    if req.pin.is_empty() {
        return Err(KioskError::InvalidRequest("pin is required".to_string()));
    }
    if req.pin != state.config.admin_pin {
        tracing::warn!("admin login rejected: wrong pin");
        return Err(KioskError::InvalidPin);
    }

    let token = issue_session(&state.config.session_secret, state.config.session_ttl_hours)?;
    let cookie = session_cookie(&token, state.config.session_ttl_hours);

    tracing::info!("admin session established");
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AckResponse { ok: true }),
    ))
}

/// `GET /admin/me` — Report the session state of the caller.
#[utoipa::path(
    get,
    path = "/api/v1/admin/me",
    tag = "Admin",
    summary = "Who am I",
    description = "Returns the admin flag for the current session; anonymous callers get `isAdmin: false`.",
    responses(
        (status = 200, description = "Session state", body = MeResponse),
    )
)]
pub async fn me(session: AdminSession) -> impl IntoResponse {
    Json(MeResponse {
        ok: true,
        is_admin: session.is_admin,
    })
}

/// `POST /admin/logout` — Expire the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/admin/logout",
    tag = "Admin",
    summary = "Admin logout",
    responses(
        (status = 200, description = "Session cleared", body = AckResponse),
    )
)]
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(AckResponse { ok: true }),
    )
}

/// Admin session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/me", get(me))
        .route("/admin/logout", post(logout))
}
