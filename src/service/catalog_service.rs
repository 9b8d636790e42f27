//! Catalog service: doctor, assistant, and patient collections.
//!
//! Catalogs are independent CRUD collections feeding the admin panel
//! pickers. They are intentionally decoupled from room snapshots: an
//! assignment copies catalog values at write time, so editing or
//! deleting a catalog record never touches what a display shows.

use uuid::Uuid;

use crate::domain::appointment::is_hex_color;
use crate::error::KioskError;
use crate::persistence::PostgresStore;
use crate::persistence::models::{AssistantRow, DoctorRow, PatientRow};

/// Result of a catalog save: the record was either created or updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was inserted under a fresh id.
    Created(Uuid),
    /// An existing record was overwritten in place.
    Updated(Uuid),
}

impl SaveOutcome {
    /// The action label reported on the wire.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
        }
    }

    /// The id of the record that was saved.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }
}

/// CRUD coordinator for the three catalogs.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: PostgresStore,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(store: PostgresStore) -> Self {
        Self { store }
    }

    // ── Doctors ─────────────────────────────────────────────────────────

    /// Lists all doctors sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] on store failure.
    pub async fn list_doctors(&self) -> Result<Vec<DoctorRow>, KioskError> {
        self.store.list_doctors().await
    }

    /// Creates or updates a doctor; an id targets an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::InvalidRequest`] for an empty name or
    /// invalid color, [`KioskError::CatalogNotFound`] when the given id
    /// does not exist, or [`KioskError::PersistenceError`] on store
    /// failure.
    pub async fn save_doctor(
        &self,
        id: Option<Uuid>,
        name: String,
        color: String,
        active: bool,
    ) -> Result<SaveOutcome, KioskError> {
        if name.is_empty() {
            return Err(KioskError::InvalidRequest("name is required".to_string()));
        }
        if !is_hex_color(&color) {
            return Err(KioskError::InvalidRequest(format!(
                "invalid color: {color}"
            )));
        }

        match id {
            Some(id) => {
                let row = DoctorRow {
                    id,
                    name,
                    color,
                    active,
                };
                if self.store.update_doctor(&row).await? == 0 {
                    return Err(KioskError::CatalogNotFound { kind: "doctor", id });
                }
                Ok(SaveOutcome::Updated(id))
            }
            None => {
                let row = DoctorRow {
                    id: Uuid::new_v4(),
                    name,
                    color,
                    active,
                };
                self.store.insert_doctor(&row).await?;
                tracing::info!(id = %row.id, "doctor created");
                Ok(SaveOutcome::Created(row.id))
            }
        }
    }

    /// Deletes a doctor, returning the number of removed records.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] on store failure.
    pub async fn delete_doctor(&self, id: Uuid) -> Result<u64, KioskError> {
        self.store.delete_doctor(id).await
    }

    // ── Assistants ──────────────────────────────────────────────────────

    /// Lists all assistants sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] on store failure.
    pub async fn list_assistants(&self) -> Result<Vec<AssistantRow>, KioskError> {
        self.store.list_assistants().await
    }

    /// Creates or updates an assistant; an id targets an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::InvalidRequest`] for an empty name,
    /// [`KioskError::CatalogNotFound`] when the given id does not exist,
    /// or [`KioskError::PersistenceError`] on store failure.
    pub async fn save_assistant(
        &self,
        id: Option<Uuid>,
        name: String,
        active: bool,
    ) -> Result<SaveOutcome, KioskError> {
        if name.is_empty() {
            return Err(KioskError::InvalidRequest("name is required".to_string()));
        }

        match id {
            Some(id) => {
                let row = AssistantRow { id, name, active };
                if self.store.update_assistant(&row).await? == 0 {
                    return Err(KioskError::CatalogNotFound {
                        kind: "assistant",
                        id,
                    });
                }
                Ok(SaveOutcome::Updated(id))
            }
            None => {
                let row = AssistantRow {
                    id: Uuid::new_v4(),
                    name,
                    active,
                };
                self.store.insert_assistant(&row).await?;
                tracing::info!(id = %row.id, "assistant created");
                Ok(SaveOutcome::Created(row.id))
            }
        }
    }

    /// Deletes an assistant, returning the number of removed records.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] on store failure.
    pub async fn delete_assistant(&self, id: Uuid) -> Result<u64, KioskError> {
        self.store.delete_assistant(id).await
    }

    // ── Patients ────────────────────────────────────────────────────────

    /// Lists all patients sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] on store failure.
    pub async fn list_patients(&self) -> Result<Vec<PatientRow>, KioskError> {
        self.store.list_patients().await
    }

    /// Creates or updates a patient; an id targets an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::InvalidRequest`] for an empty name,
    /// [`KioskError::CatalogNotFound`] when the given id does not exist,
    /// or [`KioskError::PersistenceError`] on store failure.
    pub async fn save_patient(
        &self,
        id: Option<Uuid>,
        name: String,
    ) -> Result<SaveOutcome, KioskError> {
        if name.is_empty() {
            return Err(KioskError::InvalidRequest("name is required".to_string()));
        }

        match id {
            Some(id) => {
                let row = PatientRow { id, name };
                if self.store.update_patient(&row).await? == 0 {
                    return Err(KioskError::CatalogNotFound { kind: "patient", id });
                }
                Ok(SaveOutcome::Updated(id))
            }
            None => {
                let row = PatientRow {
                    id: Uuid::new_v4(),
                    name,
                };
                self.store.insert_patient(&row).await?;
                tracing::info!(id = %row.id, "patient created");
                Ok(SaveOutcome::Created(row.id))
            }
        }
    }

    /// Deletes a patient, returning the number of removed records.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::PersistenceError`] on store failure.
    pub async fn delete_patient(&self, id: Uuid) -> Result<u64, KioskError> {
        self.store.delete_patient(id).await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn save_outcome_reports_action_and_id() {
        let id = Uuid::new_v4();
        let created = SaveOutcome::Created(id);
        assert_eq!(created.action(), "created");
        assert_eq!(created.id(), id);

        let updated = SaveOutcome::Updated(id);
        assert_eq!(updated.action(), "updated");
        assert_eq!(updated.id(), id);
    }
}
