//! Database row models for the snapshot store and catalogs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row from the `room_state` table.
///
/// `payload` is the stored snapshot document as raw JSON; `None` means
/// the room was explicitly marked free (the row itself is only created
/// on first assignment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStateRow {
    /// Room id, the upsert key.
    pub room_id: i32,
    /// Snapshot document as JSONB, or NULL for a free room.
    pub payload: Option<serde_json::Value>,
    /// Instant of the last overwrite.
    pub updated_at: DateTime<Utc>,
}

/// A row from the `doctors` catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRow {
    /// Record id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Hex color used as the board background.
    pub color: String,
    /// Whether the doctor appears in the admin panel pickers.
    pub active: bool,
}

/// A row from the `assistants` catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantRow {
    /// Record id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Whether the assistant appears in the admin panel pickers.
    pub active: bool,
}

/// A row from the `patients` catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRow {
    /// Record id.
    pub id: Uuid,
    /// Display name (first name only).
    pub name: String,
}
