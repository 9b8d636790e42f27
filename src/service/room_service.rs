//! Room snapshot service: validated overwrites and reads.

use chrono::{Local, Utc};

use crate::domain::{AssignmentDraft, RoomId, RoomPayload, RoomState};
use crate::error::KioskError;
use crate::persistence::PostgresStore;

/// Orchestrates the room snapshot protocol.
///
/// Every update follows the pattern: normalize the draft → overwrite the
/// stored document → return the normalized payload. Validation happens
/// entirely before the store is touched, so a rejected request never
/// mutates anything. Concurrent updates to the same room are resolved by
/// the store's atomic upsert — last write wins, no merge.
#[derive(Debug, Clone)]
pub struct RoomService {
    store: PostgresStore,
}

impl RoomService {
    /// Creates a new `RoomService`.
    #[must_use]
    pub fn new(store: PostgresStore) -> Self {
        Self { store }
    }

    /// Overwrites a room's snapshot with a normalized assignment.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::InvalidRequest`] if the draft fails
    /// validation, or [`KioskError::PersistenceError`] if the write
    /// fails.
    pub async fn assign(
        &self,
        room_id: RoomId,
        draft: AssignmentDraft,
    ) -> Result<RoomPayload, KioskError> {
        let payload = draft.normalize(Local::now())?;

        let document = serde_json::to_value(&payload)
            .map_err(|e| KioskError::Internal(format!("snapshot serialization failed: {e}")))?;
        self.store
            .upsert_room_state(room_id.get(), &document, Utc::now())
            .await?;

        tracing::info!(%room_id, doctor = %payload.doctor_name, "room snapshot overwritten");
        Ok(payload)
    }

    /// Returns the current state of a room.
    ///
    /// A room that was never assigned is reported as free rather than as
    /// an error — absence is an expected state.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] if the read fails, or
    /// [`KioskError::Internal`] if a stored document no longer
    /// deserializes.
    pub async fn current(&self, room_id: RoomId) -> Result<RoomState, KioskError> {
        let Some(row) = self.store.find_room_state(room_id.get()).await? else {
            return Ok(RoomState {
                room_id,
                payload: None,
                updated_at: None,
            });
        };

        let payload = row
            .payload
            .map(serde_json::from_value::<RoomPayload>)
            .transpose()
            .map_err(|e| KioskError::Internal(format!("stored snapshot is corrupt: {e}")))?;

        Ok(RoomState {
            room_id,
            payload,
            updated_at: Some(row.updated_at),
        })
    }

    /// Counts stored snapshot rows; used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] if the count fails.
    pub async fn room_state_count(&self) -> Result<i64, KioskError> {
        self.store.count_room_state().await
    }
}
