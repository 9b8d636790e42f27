//! PostgreSQL implementation of the persistence layer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::models::{AssistantRow, DoctorRow, PatientRow, RoomStateRow};
use crate::config::KioskConfig;
use crate::error::KioskError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
///
/// The snapshot store exposes exactly two operations — upsert-by-key
/// and find-by-key — so the room update path inherits last-write-wins
/// semantics from Postgres's own row-level atomicity. No optimistic
/// concurrency token, no merge.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool from configuration and runs migrations.
    ///
    /// This is the explicit storage-handle lifecycle: one pool opened at
    /// process start and injected everywhere, closed when the process
    /// exits.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] if the pool cannot be
    /// established or a migration fails.
    pub async fn connect(config: &KioskConfig) -> Result<Self, KioskError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(Self::new(pool))
    }

    // ── Room snapshot store ─────────────────────────────────────────────

    /// Overwrites the snapshot for a room, creating the row on first use.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn upsert_room_state(
        &self,
        room_id: i32,
        payload: &serde_json::Value,
        updated_at: DateTime<Utc>,
    ) -> Result<(), KioskError> {
        sqlx::query(
            "INSERT INTO room_state (room_id, payload, updated_at) VALUES ($1, $2, $3) \
             ON CONFLICT (room_id) DO UPDATE \
             SET payload = EXCLUDED.payload, updated_at = EXCLUDED.updated_at",
        )
        .bind(room_id)
        .bind(payload)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    /// Loads the snapshot row for a room, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn find_room_state(&self, room_id: i32) -> Result<Option<RoomStateRow>, KioskError> {
        let row = sqlx::query_as::<_, (i32, Option<serde_json::Value>, DateTime<Utc>)>(
            "SELECT room_id, payload, updated_at FROM room_state WHERE room_id = $1",
        )
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(row.map(|(room_id, payload, updated_at)| RoomStateRow {
            room_id,
            payload,
            updated_at,
        }))
    }

    /// Counts snapshot rows; used by the health endpoint as a storage ping.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn count_room_state(&self) -> Result<i64, KioskError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM room_state")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))
    }

    // ── Doctors catalog ─────────────────────────────────────────────────

    /// Lists all doctors sorted by name.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn list_doctors(&self) -> Result<Vec<DoctorRow>, KioskError> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, bool)>(
            "SELECT id, name, color, active FROM doctors ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, color, active)| DoctorRow {
                id,
                name,
                color,
                active,
            })
            .collect())
    }

    /// Inserts a new doctor record.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn insert_doctor(&self, row: &DoctorRow) -> Result<(), KioskError> {
        sqlx::query("INSERT INTO doctors (id, name, color, active) VALUES ($1, $2, $3, $4)")
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.color)
            .bind(row.active)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    /// Updates an existing doctor record, returning the affected row count.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn update_doctor(&self, row: &DoctorRow) -> Result<u64, KioskError> {
        let result =
            sqlx::query("UPDATE doctors SET name = $2, color = $3, active = $4 WHERE id = $1")
                .bind(row.id)
                .bind(&row.name)
                .bind(&row.color)
                .bind(row.active)
                .execute(&self.pool)
                .await
                .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Deletes a doctor by id, returning the affected row count.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn delete_doctor(&self, id: Uuid) -> Result<u64, KioskError> {
        let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    // ── Assistants catalog ──────────────────────────────────────────────

    /// Lists all assistants sorted by name.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn list_assistants(&self) -> Result<Vec<AssistantRow>, KioskError> {
        let rows = sqlx::query_as::<_, (Uuid, String, bool)>(
            "SELECT id, name, active FROM assistants ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, active)| AssistantRow { id, name, active })
            .collect())
    }

    /// Inserts a new assistant record.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn insert_assistant(&self, row: &AssistantRow) -> Result<(), KioskError> {
        sqlx::query("INSERT INTO assistants (id, name, active) VALUES ($1, $2, $3)")
            .bind(row.id)
            .bind(&row.name)
            .bind(row.active)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    /// Updates an existing assistant record, returning the affected row count.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn update_assistant(&self, row: &AssistantRow) -> Result<u64, KioskError> {
        let result = sqlx::query("UPDATE assistants SET name = $2, active = $3 WHERE id = $1")
            .bind(row.id)
            .bind(&row.name)
            .bind(row.active)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Deletes an assistant by id, returning the affected row count.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn delete_assistant(&self, id: Uuid) -> Result<u64, KioskError> {
        let result = sqlx::query("DELETE FROM assistants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    // ── Patients catalog ────────────────────────────────────────────────

    /// Lists all patients sorted by name.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn list_patients(&self) -> Result<Vec<PatientRow>, KioskError> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, name FROM patients ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| PatientRow { id, name })
            .collect())
    }

    /// Inserts a new patient record.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn insert_patient(&self, row: &PatientRow) -> Result<(), KioskError> {
        sqlx::query("INSERT INTO patients (id, name) VALUES ($1, $2)")
            .bind(row.id)
            .bind(&row.name)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    /// Updates an existing patient record, returning the affected row count.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn update_patient(&self, row: &PatientRow) -> Result<u64, KioskError> {
        let result = sqlx::query("UPDATE patients SET name = $2 WHERE id = $1")
            .bind(row.id)
            .bind(&row.name)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Deletes a patient by id, returning the affected row count.
    ///
    /// # Errors
    ///
    /// Returns a [`KioskError::PersistenceError`] on database failure.
    pub async fn delete_patient(&self, id: Uuid) -> Result<u64, KioskError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| KioskError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
