use tracing::{info, warn};

use crate::builder::validation::{validate, ValidationResult};
use crate::errors::PersistenceError;
use crate::models::resume::Resume;
use crate::storage::KeyValueStorage;

/// The single slot holding the saved resume snapshot.
pub const RESUME_STORAGE_KEY: &str = "resumeData";

/// Whole-record save/load of the resume through one storage slot.
pub struct ResumePersistence<S> {
    storage: S,
}

impl<S: KeyValueStorage> ResumePersistence<S> {
    pub fn new(storage: S) -> Self {
        ResumePersistence { storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validates, then writes the full record as JSON.
    /// An invalid resume is never written; the stored snapshot stays as it was.
    pub fn save(&mut self, resume: &Resume) -> Result<(), PersistenceError> {
        if let ValidationResult::Invalid { message, .. } = validate(resume) {
            return Err(PersistenceError::ValidationFailed(message));
        }

        let json = serde_json::to_string(resume)
            .map_err(|e| PersistenceError::StorageWriteFailed(e.into()))?;

        self.storage
            .set(RESUME_STORAGE_KEY, &json)
            .map_err(PersistenceError::StorageWriteFailed)?;

        info!("Saved resume snapshot ({} bytes)", json.len());
        Ok(())
    }

    /// Reads the saved snapshot. Absent, unreadable or corrupted data all degrade to
    /// the blank default resume; nothing is surfaced to the caller.
    pub fn load(&self) -> Resume {
        let raw = match self.storage.get(RESUME_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved resume found, starting from a blank form");
                return Resume::default();
            }
            Err(e) => {
                warn!(error = %e, "Could not read saved resume, starting from a blank form");
                return Resume::default();
            }
        };

        match serde_json::from_str::<Resume>(&raw) {
            Ok(resume) => {
                info!("Loaded saved resume");
                resume
            }
            Err(e) => {
                warn!(
                    event = "storage_read_corrupted",
                    error = %e,
                    "Saved resume is not a valid resume record, discarding it"
                );
                Resume::default()
            }
        }
    }

    /// Drops the saved snapshot.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.storage
            .remove(RESUME_STORAGE_KEY)
            .map_err(PersistenceError::StorageWriteFailed)
    }
}
