//! HTTP client for the room snapshot endpoint.
//!
//! Thin wrapper over [`reqwest`]. Every fetch carries
//! `Cache-Control: no-store` so intermediaries never serve a stale
//! snapshot — the board must always reflect the live store.

use reqwest::header::CACHE_CONTROL;

use crate::api::dto::RoomStateResponse;
use crate::domain::RoomId;

/// HTTP client bound to one kiosk-gateway instance.
#[derive(Debug, Clone)]
pub struct BoardClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the board client.
#[derive(Debug, thiserror::Error)]
pub enum BoardClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("server error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for the footer message.
        body: String,
    },
}

impl BoardClient {
    /// Creates a client for the given base URL (e.g. `http://host:3000`).
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the current snapshot for a room, bypassing caches.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardClientError`] on network failure, a non-2xx
    /// status, or an undecodable body.
    pub async fn current(&self, room_id: RoomId) -> Result<RoomStateResponse, BoardClientError> {
        let response = self
            .client
            .get(format!(
                "{}/api/v1/rooms/{room_id}/current",
                self.base_url
            ))
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BoardClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = BoardClient::new("http://localhost:3000/".to_string());
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
