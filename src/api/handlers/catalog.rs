//! Catalog CRUD handlers for doctors, assistants, and patients.
//!
//! Lists are public (the admin panel loads them before login state is
//! known); mutations require an admin session.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::api::dto::{
    AssistantListResponse, DeleteParams, DeleteRequest, DeleteResponse, DoctorListResponse,
    PatientListResponse, SaveAssistantRequest, SaveDoctorRequest, SavePatientRequest, SaveResponse,
};
use crate::app_state::AppState;
use crate::auth::RequireAdmin;
use crate::error::{ErrorResponse, KioskError};

/// Resolves the delete target id from the query string or JSON body.
fn delete_id(params: &DeleteParams, body: &Bytes) -> Result<Uuid, KioskError> {
    params
        .id
        .or_else(|| {
            serde_json::from_slice::<DeleteRequest>(body)
                .ok()
                .and_then(|req| req.id)
        })
        .ok_or_else(|| KioskError::InvalidRequest("missing id".to_string()))
}

// ── Doctors ─────────────────────────────────────────────────────────────

/// `GET /catalog/doctors` — List doctors sorted by name.
///
/// # Errors
///
/// Returns a persistence error if the read fails.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/doctors",
    tag = "Catalog",
    summary = "List doctors",
    responses(
        (status = 200, description = "Doctor catalog", body = DoctorListResponse),
    )
)]
pub async fn list_doctors(State(state): State<AppState>) -> Result<impl IntoResponse, KioskError> {
    let items = state.catalog_service.list_doctors().await?;
    Ok(Json(DoctorListResponse {
        ok: true,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// `POST /catalog/doctors` — Create or update a doctor.
///
/// # Errors
///
/// Returns [`KioskError::Unauthorized`] without an admin session,
/// [`KioskError::InvalidRequest`] for a missing name or bad color, or
/// [`KioskError::CatalogNotFound`] when updating a nonexistent id.
#[utoipa::path(
    post,
    path = "/api/v1/catalog/doctors",
    tag = "Catalog",
    summary = "Save a doctor",
    request_body = SaveDoctorRequest,
    responses(
        (status = 200, description = "Record saved", body = SaveResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Unknown record id", body = ErrorResponse),
    )
)]
pub async fn save_doctor(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(req): Json<SaveDoctorRequest>,
) -> Result<impl IntoResponse, KioskError> {
    let outcome = state
        .catalog_service
        .save_doctor(req.id, req.name, req.color, req.active.unwrap_or(true))
        .await?;

    Ok(Json(SaveResponse {
        ok: true,
        action: outcome.action().to_string(),
        id: outcome.id(),
    }))
}

/// `DELETE /catalog/doctors` — Remove a doctor by id (query or body).
///
/// # Errors
///
/// Returns [`KioskError::Unauthorized`] without an admin session or
/// [`KioskError::InvalidRequest`] when no id is supplied.
#[utoipa::path(
    delete,
    path = "/api/v1/catalog/doctors",
    tag = "Catalog",
    summary = "Delete a doctor",
    params(DeleteParams),
    request_body = Option<DeleteRequest>,
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
    )
)]
pub async fn delete_doctor(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
    body: Bytes,
) -> Result<impl IntoResponse, KioskError> {
    let id = delete_id(&params, &body)?;
    let deleted_count = state.catalog_service.delete_doctor(id).await?;
    Ok(Json(DeleteResponse {
        ok: true,
        deleted_count,
    }))
}

// ── Assistants ──────────────────────────────────────────────────────────

/// `GET /catalog/assistants` — List assistants sorted by name.
///
/// # Errors
///
/// Returns a persistence error if the read fails.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/assistants",
    tag = "Catalog",
    summary = "List assistants",
    responses(
        (status = 200, description = "Assistant catalog", body = AssistantListResponse),
    )
)]
pub async fn list_assistants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, KioskError> {
    let items = state.catalog_service.list_assistants().await?;
    Ok(Json(AssistantListResponse {
        ok: true,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// `POST /catalog/assistants` — Create or update an assistant.
///
/// # Errors
///
/// Returns [`KioskError::Unauthorized`] without an admin session,
/// [`KioskError::InvalidRequest`] for a missing name, or
/// [`KioskError::CatalogNotFound`] when updating a nonexistent id.
#[utoipa::path(
    post,
    path = "/api/v1/catalog/assistants",
    tag = "Catalog",
    summary = "Save an assistant",
    request_body = SaveAssistantRequest,
    responses(
        (status = 200, description = "Record saved", body = SaveResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Unknown record id", body = ErrorResponse),
    )
)]
pub async fn save_assistant(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(req): Json<SaveAssistantRequest>,
) -> Result<impl IntoResponse, KioskError> {
    let outcome = state
        .catalog_service
        .save_assistant(req.id, req.name, req.active.unwrap_or(true))
        .await?;

    Ok(Json(SaveResponse {
        ok: true,
        action: outcome.action().to_string(),
        id: outcome.id(),
    }))
}

/// `DELETE /catalog/assistants` — Remove an assistant by id (query or body).
///
/// # Errors
///
/// Returns [`KioskError::Unauthorized`] without an admin session or
/// [`KioskError::InvalidRequest`] when no id is supplied.
#[utoipa::path(
    delete,
    path = "/api/v1/catalog/assistants",
    tag = "Catalog",
    summary = "Delete an assistant",
    params(DeleteParams),
    request_body = Option<DeleteRequest>,
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
    )
)]
pub async fn delete_assistant(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
    body: Bytes,
) -> Result<impl IntoResponse, KioskError> {
    let id = delete_id(&params, &body)?;
    let deleted_count = state.catalog_service.delete_assistant(id).await?;
    Ok(Json(DeleteResponse {
        ok: true,
        deleted_count,
    }))
}

// ── Patients ────────────────────────────────────────────────────────────

/// `GET /catalog/patients` — List patients sorted by name.
///
/// # Errors
///
/// Returns a persistence error if the read fails.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/patients",
    tag = "Catalog",
    summary = "List patients",
    responses(
        (status = 200, description = "Patient catalog", body = PatientListResponse),
    )
)]
pub async fn list_patients(State(state): State<AppState>) -> Result<impl IntoResponse, KioskError> {
    let items = state.catalog_service.list_patients().await?;
    Ok(Json(PatientListResponse {
        ok: true,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// `POST /catalog/patients` — Create or update a patient.
///
/// # Errors
///
/// Returns [`KioskError::Unauthorized`] without an admin session,
/// [`KioskError::InvalidRequest`] for a missing name, or
/// [`KioskError::CatalogNotFound`] when updating a nonexistent id.
#[utoipa::path(
    post,
    path = "/api/v1/catalog/patients",
    tag = "Catalog",
    summary = "Save a patient",
    request_body = SavePatientRequest,
    responses(
        (status = 200, description = "Record saved", body = SaveResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Unknown record id", body = ErrorResponse),
    )
)]
pub async fn save_patient(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(req): Json<SavePatientRequest>,
) -> Result<impl IntoResponse, KioskError> {
    let outcome = state.catalog_service.save_patient(req.id, req.name).await?;

    Ok(Json(SaveResponse {
        ok: true,
        action: outcome.action().to_string(),
        id: outcome.id(),
    }))
}

/// `DELETE /catalog/patients` — Remove a patient by id (query or body).
///
/// # Errors
///
/// Returns [`KioskError::Unauthorized`] without an admin session or
/// [`KioskError::InvalidRequest`] when no id is supplied.
#[utoipa::path(
    delete,
    path = "/api/v1/catalog/patients",
    tag = "Catalog",
    summary = "Delete a patient",
    params(DeleteParams),
    request_body = Option<DeleteRequest>,
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
    )
)]
pub async fn delete_patient(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
    body: Bytes,
) -> Result<impl IntoResponse, KioskError> {
    let id = delete_id(&params, &body)?;
    let deleted_count = state.catalog_service.delete_patient(id).await?;
    Ok(Json(DeleteResponse {
        ok: true,
        deleted_count,
    }))
}

/// Catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/catalog/doctors",
            get(list_doctors).post(save_doctor).delete(delete_doctor),
        )
        .route(
            "/catalog/assistants",
            get(list_assistants)
                .post(save_assistant)
                .delete(delete_assistant),
        )
        .route(
            "/catalog/patients",
            get(list_patients).post(save_patient).delete(delete_patient),
        )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn delete_id_prefers_query_over_body() {
        let query_id = Uuid::new_v4();
        let body_id = Uuid::new_v4();
        let params = DeleteParams { id: Some(query_id) };
        let body = Bytes::from(format!("{{\"id\":\"{body_id}\"}}"));

        assert_eq!(delete_id(&params, &body).ok(), Some(query_id));
    }

    #[test]
    fn delete_id_falls_back_to_body() {
        let body_id = Uuid::new_v4();
        let params = DeleteParams::default();
        let body = Bytes::from(format!("{{\"id\":\"{body_id}\"}}"));

        assert_eq!(delete_id(&params, &body).ok(), Some(body_id));
    }

    #[test]
    fn delete_id_rejects_when_absent_everywhere() {
        let params = DeleteParams::default();
        assert!(delete_id(&params, &Bytes::new()).is_err());
        assert!(delete_id(&params, &Bytes::from_static(b"{}")).is_err());
    }
}
