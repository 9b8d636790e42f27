//! Room snapshot DTOs for the update and read endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AssignmentDraft, RoomId, RoomPayload};

/// Request body for `POST /rooms/{id}/update`.
///
/// Every field defaults so that missing required values surface as
/// validation errors in the normal `{ok:false, error}` envelope instead
/// of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    /// Doctor display name (required).
    #[serde(default)]
    pub doctor_name: String,
    /// Doctor hex color (required).
    #[serde(default)]
    pub doctor_color: String,
    /// Assistant display name.
    #[serde(default)]
    pub assistant_name: String,
    /// Patient display name.
    #[serde(default)]
    pub patient_name: String,
    /// Free-text record number.
    #[serde(default)]
    pub record_number: String,
    /// Appointment type label.
    #[serde(rename = "type", default)]
    pub appointment_type: Option<String>,
    /// Free-text tooth designation.
    #[serde(default)]
    pub tooth: String,
    /// `HH:MM` wall time or RFC 3339 timestamp.
    #[serde(default)]
    pub scheduled_at: Option<String>,
}

impl From<UpdateRoomRequest> for AssignmentDraft {
    fn from(req: UpdateRoomRequest) -> Self {
        Self {
            doctor_name: req.doctor_name,
            doctor_color: req.doctor_color,
            assistant_name: req.assistant_name,
            patient_name: req.patient_name,
            record_number: req.record_number,
            appointment_type: req.appointment_type,
            tooth: req.tooth,
            scheduled_at: req.scheduled_at,
        }
    }
}

/// Response body for `POST /rooms/{id}/update`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// The room that was overwritten.
    pub room_id: RoomId,
    /// The normalized payload as stored.
    pub payload: RoomPayload,
}

/// Response body for `GET /rooms/{id}/current`.
///
/// `payload` and `updatedAt` are explicit nulls for a free room — the
/// kiosk treats absence as a valid state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// The room that was read.
    pub room_id: RoomId,
    /// Latest assignment, or `null` when free.
    pub payload: Option<RoomPayload>,
    /// Last overwrite instant, or `null` if never assigned.
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_tolerates_missing_optionals() {
        let json = r##"{"doctorName":"Dra. Rivera","doctorColor":"#0ea5e9"}"##;
        let Ok(req) = serde_json::from_str::<UpdateRoomRequest>(json) else {
            panic!("deserialization failed");
        };
        assert_eq!(req.doctor_name, "Dra. Rivera");
        assert_eq!(req.assistant_name, "");
        assert_eq!(req.appointment_type, None);
        assert_eq!(req.scheduled_at, None);
    }

    #[test]
    fn request_missing_required_fields_still_deserializes() {
        // Validation is the normalizer's job; deserialization must not
        // reject so the error reaches the envelope.
        let Ok(req) = serde_json::from_str::<UpdateRoomRequest>("{}") else {
            panic!("deserialization failed");
        };
        assert_eq!(req.doctor_name, "");
    }

    #[test]
    fn free_room_serializes_explicit_nulls() {
        let Ok(room_id) = RoomId::new(2) else {
            panic!("expected valid room id");
        };
        let response = RoomStateResponse {
            ok: true,
            room_id,
            payload: None,
            updated_at: None,
        };
        let json = serde_json::to_string(&response).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.contains("\"payload\":null"));
        assert!(json.contains("\"updatedAt\":null"));
    }
}
