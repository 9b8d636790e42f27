//! Signed admin-session cookies.
//!
//! Sessions are HS256-signed tokens containing a [`SessionClaims`]
//! payload, carried in an `HttpOnly` cookie. The signature is the only
//! session state — nothing is stored server-side, so logout simply
//! expires the cookie.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::error::KioskError;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "kiosco_admin";

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// The admin flag — the only authorization bit in the system.
    pub is_admin: bool,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Signs a new admin session token.
///
/// # Errors
///
/// Returns [`KioskError::Internal`] if token encoding fails.
pub fn issue_session(secret: &str, ttl_hours: i64) -> Result<String, KioskError> {
    let iat = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        is_admin: true,
        exp: iat + ttl_hours * 3600,
        iat,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| KioskError::Internal(format!("session encoding failed: {e}")))
}

/// Validates a session token, returning its claims.
///
/// Signature and expiration are checked; any failure yields `None`
/// because an invalid session is indistinguishable from no session.
#[must_use]
pub fn validate_session(token: &str, secret: &str) -> Option<SessionClaims> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )
    .ok()
    .map(|data| data.claims)
}

/// Builds the `Set-Cookie` value carrying a fresh session token.
#[must_use]
pub fn session_cookie(token: &str, ttl_hours: i64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl_hours * 3600
    )
}

/// Builds the `Set-Cookie` value that expires the session cookie.
#[must_use]
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extracts a named cookie value from the request headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
}

/// The admin session state of a request.
///
/// This extractor never rejects: a missing, malformed, or expired cookie
/// simply yields `is_admin: false`. Use it where the session is
/// reported rather than required (the "who am I" endpoint).
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Whether the request carries a valid admin session.
    pub is_admin: bool,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = KioskError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let is_admin = cookie_value(&parts.headers, SESSION_COOKIE)
            .and_then(|token| validate_session(token, &state.config.session_secret))
            .is_some_and(|claims| claims.is_admin);

        Ok(Self { is_admin })
    }
}

/// Guard extractor for admin-only endpoints.
///
/// Use this as a handler parameter to reject requests without a valid
/// admin session:
///
/// ```ignore
/// async fn save_doctor(_admin: RequireAdmin, ...) -> Result<..., KioskError> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = KioskError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = AdminSession::from_request_parts(parts, state).await?;
        if session.is_admin {
            Ok(Self)
        } else {
            Err(KioskError::Unauthorized)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    #[test]
    fn session_round_trip() {
        let Ok(token) = issue_session(SECRET, 12) else {
            panic!("token generation should succeed");
        };
        let Some(claims) = validate_session(&token, SECRET) else {
            panic!("token validation should succeed");
        };
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_session_is_rejected() {
        // Manually build an already-expired token, past the default
        // 60-second validation leeway.
        let iat = chrono::Utc::now().timestamp() - 600;
        let claims = SessionClaims {
            is_admin: true,
            exp: iat + 300,
            iat,
        };
        let Ok(token) = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        ) else {
            panic!("encoding should succeed");
        };

        assert!(validate_session(&token, SECRET).is_none());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let Ok(token) = issue_session(SECRET, 12) else {
            panic!("token generation should succeed");
        };
        assert!(validate_session(&token, "a-different-secret").is_none());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(validate_session("not-a-token", SECRET).is_none());
    }

    #[test]
    fn cookie_value_finds_named_cookie() {
        let mut headers = HeaderMap::new();
        let Ok(value) = HeaderValue::from_str("theme=dark; kiosco_admin=abc123; lang=es") else {
            panic!("header value should be valid");
        };
        headers.insert(COOKIE, value);

        assert_eq!(cookie_value(&headers, SESSION_COOKIE), Some("abc123"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_strings_cover_set_and_clear() {
        let set = session_cookie("tok", 12);
        assert!(set.starts_with("kiosco_admin=tok;"));
        assert!(set.contains("HttpOnly"));
        assert!(set.contains("Max-Age=43200"));

        let clear = clear_session_cookie();
        assert!(clear.contains("Max-Age=0"));
    }
}
