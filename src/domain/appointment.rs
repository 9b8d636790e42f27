//! Appointment snapshot model and write-time normalization.
//!
//! A room snapshot is a denormalized point-in-time copy of catalog data:
//! the doctor's name and color are copied in at assignment time, never
//! referenced live, so later catalog edits do not change what a display
//! already shows. [`AssignmentDraft::normalize`] is the single place
//! where a raw update request becomes a stored [`RoomPayload`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RoomId;
use crate::error::KioskError;

/// Appointment type shown on the display.
///
/// Serialized with the exact labels the admin panel and the displays
/// use, so the wire value doubles as the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AppointmentType {
    /// First visit.
    #[serde(rename = "Primera Vez")]
    PrimeraVez,
    /// Emergency.
    #[serde(rename = "Emergencia")]
    Emergencia,
    /// Ongoing treatment.
    #[serde(rename = "En Tratamiento")]
    EnTratamiento,
    /// Treatment starting on another tooth.
    #[serde(rename = "Otro Diente")]
    OtroDiente,
}

impl AppointmentType {
    /// Returns the wire/display label for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PrimeraVez => "Primera Vez",
            Self::Emergencia => "Emergencia",
            Self::EnTratamiento => "En Tratamiento",
            Self::OtroDiente => "Otro Diente",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentType {
    type Err = KioskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Primera Vez" => Ok(Self::PrimeraVez),
            "Emergencia" => Ok(Self::Emergencia),
            "En Tratamiento" => Ok(Self::EnTratamiento),
            "Otro Diente" => Ok(Self::OtroDiente),
            other => Err(KioskError::InvalidRequest(format!(
                "invalid appointment type: {other}"
            ))),
        }
    }
}

/// The denormalized assignment snapshot stored per room.
///
/// Field names are camelCase on the wire and in the stored JSON
/// document. Optional display strings default to `""` rather than being
/// omitted; only `type` is dropped when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    /// Doctor display name, copied from the catalog at assignment time.
    pub doctor_name: String,
    /// Doctor hex color (`#RGB` or `#RRGGBB`), used as the board background.
    pub doctor_color: String,
    /// Assistant display name.
    #[serde(default)]
    pub assistant_name: String,
    /// Patient display name (first name only, for privacy).
    #[serde(default)]
    pub patient_name: String,
    /// Free-text record number, stored per assignment rather than per patient.
    #[serde(default)]
    pub record_number: String,
    /// Appointment type, if selected.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<AppointmentType>,
    /// Free-text tooth designation.
    #[serde(default)]
    pub tooth: String,
    /// Scheduled time, normalized to UTC at write time.
    pub scheduled_at: DateTime<Utc>,
}

/// Current state of a room: the latest snapshot, or free.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    /// The room this state belongs to.
    pub room_id: RoomId,
    /// Latest assignment, or `None` when the room is free.
    pub payload: Option<RoomPayload>,
    /// Instant of the last overwrite, or `None` if never assigned.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw candidate assignment, before validation and normalization.
///
/// Built from the update request body; [`normalize`](Self::normalize)
/// turns it into a [`RoomPayload`] or a validation error.
#[derive(Debug, Clone, Default)]
pub struct AssignmentDraft {
    /// Candidate doctor name (required).
    pub doctor_name: String,
    /// Candidate doctor color (required, hex).
    pub doctor_color: String,
    /// Candidate assistant name.
    pub assistant_name: String,
    /// Candidate patient name.
    pub patient_name: String,
    /// Candidate record number.
    pub record_number: String,
    /// Candidate appointment type label.
    pub appointment_type: Option<String>,
    /// Candidate tooth designation.
    pub tooth: String,
    /// Candidate scheduled time: `HH:MM` wall time or RFC 3339.
    pub scheduled_at: Option<String>,
}

impl AssignmentDraft {
    /// Validates the draft and produces the normalized payload.
    ///
    /// `now` anchors both the "today" used for `HH:MM` wall times and
    /// the fallback when `scheduledAt` is absent. Malformed non-empty
    /// time strings are rejected rather than silently replaced.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::InvalidRequest`] for a missing doctor name,
    /// an invalid color, an unknown appointment type, or an unparsable
    /// scheduled time.
    pub fn normalize(self, now: DateTime<Local>) -> Result<RoomPayload, KioskError> {
        if self.doctor_name.is_empty() {
            return Err(KioskError::InvalidRequest(
                "doctorName is required".to_string(),
            ));
        }
        if !is_hex_color(&self.doctor_color) {
            return Err(KioskError::InvalidRequest(format!(
                "invalid doctorColor: {}",
                self.doctor_color
            )));
        }

        let appointment_type = match self.appointment_type.as_deref() {
            None | Some("") => None,
            Some(label) => Some(label.parse()?),
        };

        let scheduled_at = normalize_scheduled_at(self.scheduled_at.as_deref(), now)?;

        Ok(RoomPayload {
            doctor_name: self.doctor_name,
            doctor_color: self.doctor_color,
            assistant_name: self.assistant_name,
            patient_name: self.patient_name,
            record_number: self.record_number,
            appointment_type,
            tooth: self.tooth,
            scheduled_at,
        })
    }
}

/// Checks for a `#RGB` or `#RRGGBB` hex color, case-insensitive.
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Normalizes an optional scheduled-time string into a UTC timestamp.
///
/// - absent or empty → `now`;
/// - `HH:MM` (exactly two digits each) → today's local date at that wall
///   time, seconds zeroed;
/// - anything else must parse as RFC 3339.
///
/// # Errors
///
/// Returns [`KioskError::InvalidRequest`] for out-of-range wall-time
/// components or a non-empty string that parses as neither form.
pub fn normalize_scheduled_at(
    input: Option<&str>,
    now: DateTime<Local>,
) -> Result<DateTime<Utc>, KioskError> {
    let raw = match input {
        None | Some("") => return Ok(now.with_timezone(&Utc)),
        Some(s) => s,
    };

    if let Some((hours, minutes)) = parse_wall_time(raw) {
        let scheduled = now
            .date_naive()
            .and_hms_opt(hours, minutes, 0)
            .and_then(|naive| naive.and_local_timezone(Local).earliest())
            .ok_or_else(|| KioskError::InvalidRequest(format!("invalid scheduledAt: {raw}")))?;
        return Ok(scheduled.with_timezone(&Utc));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| KioskError::InvalidRequest(format!("invalid scheduledAt: {raw}")))
}

/// Splits a strict `HH:MM` string into its numeric components.
///
/// Returns `None` for any other shape; range checking is left to the
/// calendar arithmetic in [`normalize_scheduled_at`].
fn parse_wall_time(s: &str) -> Option<(u32, u32)> {
    let (hh, mm) = s.split_once(':')?;
    if hh.len() != 2 || mm.len() != 2 {
        return None;
    }
    if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((hh.parse().ok()?, mm.parse().ok()?))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn draft() -> AssignmentDraft {
        AssignmentDraft {
            doctor_name: "Dra. Rivera".to_string(),
            doctor_color: "#0ea5e9".to_string(),
            ..AssignmentDraft::default()
        }
    }

    #[test]
    fn hex_color_accepts_short_and_long_forms() {
        assert!(is_hex_color("#0ea5e9"));
        assert!(is_hex_color("#ABC"));
        assert!(is_hex_color("#a1B2c3"));
        assert!(!is_hex_color("blue"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("0ea5e9"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color("#"));
    }

    #[test]
    fn normalize_requires_doctor_name() {
        let mut candidate = draft();
        candidate.doctor_name = String::new();
        assert!(candidate.normalize(Local::now()).is_err());
    }

    #[test]
    fn normalize_rejects_invalid_color() {
        let mut candidate = draft();
        candidate.doctor_color = "blue".to_string();
        assert!(candidate.normalize(Local::now()).is_err());
    }

    #[test]
    fn wall_time_lands_on_today_with_seconds_zeroed() {
        let now = Local::now();
        let Ok(scheduled) = normalize_scheduled_at(Some("14:30"), now) else {
            panic!("expected valid wall time");
        };
        let local = scheduled.with_timezone(&Local);
        assert_eq!(local.hour(), 14);
        assert_eq!(local.minute(), 30);
        assert_eq!(local.second(), 0);
        assert_eq!(local.date_naive(), now.date_naive());
    }

    #[test]
    fn out_of_range_wall_time_is_rejected() {
        let now = Local::now();
        assert!(normalize_scheduled_at(Some("25:00"), now).is_err());
        assert!(normalize_scheduled_at(Some("14:99"), now).is_err());
    }

    #[test]
    fn single_digit_hour_is_not_wall_time() {
        // The strict form is exactly two digits each; "9:30" is neither
        // a wall time nor RFC 3339, so it is rejected.
        assert!(normalize_scheduled_at(Some("9:30"), Local::now()).is_err());
    }

    #[test]
    fn absent_time_defaults_to_now() {
        let now = Local::now();
        let Ok(scheduled) = normalize_scheduled_at(None, now) else {
            panic!("expected fallback to now");
        };
        assert_eq!(scheduled, now.with_timezone(&Utc));

        let Ok(scheduled) = normalize_scheduled_at(Some(""), now) else {
            panic!("expected fallback to now");
        };
        assert_eq!(scheduled, now.with_timezone(&Utc));
    }

    #[test]
    fn rfc3339_passes_through() {
        let Ok(scheduled) = normalize_scheduled_at(Some("2026-08-05T14:30:00Z"), Local::now())
        else {
            panic!("expected valid rfc3339");
        };
        assert_eq!(scheduled.to_rfc3339(), "2026-08-05T14:30:00+00:00");
    }

    #[test]
    fn malformed_time_is_rejected_not_replaced() {
        assert!(normalize_scheduled_at(Some("soonish"), Local::now()).is_err());
        assert!(normalize_scheduled_at(Some("2026-13-40"), Local::now()).is_err());
    }

    #[test]
    fn appointment_type_labels_are_exact() {
        assert_eq!(
            "Emergencia".parse::<AppointmentType>().ok(),
            Some(AppointmentType::Emergencia)
        );
        assert!("emergencia".parse::<AppointmentType>().is_err());
        assert!("Consulta".parse::<AppointmentType>().is_err());
    }

    #[test]
    fn empty_type_normalizes_to_none() {
        let mut candidate = draft();
        candidate.appointment_type = Some(String::new());
        let Ok(payload) = candidate.normalize(Local::now()) else {
            panic!("expected valid draft");
        };
        assert_eq!(payload.appointment_type, None);
    }

    #[test]
    fn optional_strings_default_to_empty() {
        let Ok(payload) = draft().normalize(Local::now()) else {
            panic!("expected valid draft");
        };
        assert_eq!(payload.assistant_name, "");
        assert_eq!(payload.patient_name, "");
        assert_eq!(payload.record_number, "");
        assert_eq!(payload.tooth, "");
    }

    #[test]
    fn wire_shape_is_camel_case_and_omits_absent_type() {
        let Ok(payload) = draft().normalize(Local::now()) else {
            panic!("expected valid draft");
        };
        let json = serde_json::to_string(&payload).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.contains("\"doctorName\""));
        assert!(json.contains("\"scheduledAt\""));
        assert!(!json.contains("\"type\""));

        let mut candidate = draft();
        candidate.appointment_type = Some("Otro Diente".to_string());
        let Ok(payload) = candidate.normalize(Local::now()) else {
            panic!("expected valid draft");
        };
        let json = serde_json::to_string(&payload).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.contains("\"type\":\"Otro Diente\""));
    }
}
