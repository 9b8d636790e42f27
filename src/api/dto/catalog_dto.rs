//! Catalog DTOs shared by the doctor, assistant, and patient endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::persistence::models::{AssistantRow, DoctorRow, PatientRow};

/// A doctor as listed by `GET /catalog/doctors`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorDto {
    /// Record id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Hex color used as the board background.
    pub color: String,
    /// Whether the doctor appears in pickers.
    pub active: bool,
}

impl From<DoctorRow> for DoctorDto {
    fn from(row: DoctorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            color: row.color,
            active: row.active,
        }
    }
}

/// An assistant as listed by `GET /catalog/assistants`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssistantDto {
    /// Record id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Whether the assistant appears in pickers.
    pub active: bool,
}

impl From<AssistantRow> for AssistantDto {
    fn from(row: AssistantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            active: row.active,
        }
    }
}

/// A patient as listed by `GET /catalog/patients`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientDto {
    /// Record id.
    pub id: Uuid,
    /// Display name (first name only).
    pub name: String,
}

impl From<PatientRow> for PatientDto {
    fn from(row: PatientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Request body for `POST /catalog/doctors`: create without an id,
/// update with one.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SaveDoctorRequest {
    /// Existing record id; absent means create.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name (required).
    #[serde(default)]
    pub name: String,
    /// Hex color (required).
    #[serde(default)]
    pub color: String,
    /// Picker visibility; defaults to `true`.
    #[serde(default)]
    pub active: Option<bool>,
}

/// Request body for `POST /catalog/assistants`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SaveAssistantRequest {
    /// Existing record id; absent means create.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name (required).
    #[serde(default)]
    pub name: String,
    /// Picker visibility; defaults to `true`.
    #[serde(default)]
    pub active: Option<bool>,
}

/// Request body for `POST /catalog/patients`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SavePatientRequest {
    /// Existing record id; absent means create.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name (required).
    #[serde(default)]
    pub name: String,
}

/// List envelope for `GET /catalog/doctors`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorListResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// Records sorted by name.
    pub items: Vec<DoctorDto>,
}

/// List envelope for `GET /catalog/assistants`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssistantListResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// Records sorted by name.
    pub items: Vec<AssistantDto>,
}

/// List envelope for `GET /catalog/patients`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientListResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// Records sorted by name.
    pub items: Vec<PatientDto>,
}

/// Response body for catalog saves.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// `"created"` or `"updated"`.
    pub action: String,
    /// Id of the saved record.
    pub id: Uuid,
}

/// Query parameters for catalog deletes (`?id=…`).
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DeleteParams {
    /// Id of the record to delete; may also come in the JSON body.
    #[serde(default)]
    pub id: Option<Uuid>,
}

/// Optional JSON body for catalog deletes (`{"id": …}`).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DeleteRequest {
    /// Id of the record to delete.
    #[serde(default)]
    pub id: Option<Uuid>,
}

/// Response body for catalog deletes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// Number of records removed (0 when the id did not exist).
    pub deleted_count: u64,
}
