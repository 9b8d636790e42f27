//! Admin session DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /admin/login`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// The shared admin PIN.
    #[serde(default)]
    pub pin: String,
}

/// Bare acknowledgement body (`{"ok": true}`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    /// Always `true` on success.
    pub ok: bool,
}

/// Response body for `GET /admin/me`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// Always `true` — an anonymous caller is not an error.
    pub ok: bool,
    /// Whether the request carries a valid admin session.
    pub is_admin: bool,
}
