//! The session's single source of truth.
//!
//! The [`Store`] struct owns one [`Snapshot`] of the five collections.  Every
//! mutation builds the next snapshot from the current one and swaps it in
//! with a single assignment, so readers never observe a half-applied change.

use std::path::Path;

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Owner of the current [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Snapshot,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot (seed data, tests).
    pub fn from_snapshot(state: Snapshot) -> Self {
        tracing::info!(
            departments = state.departments.len(),
            employees = state.employees.len(),
            trainings = state.trainings.len(),
            participants = state.participants.len(),
            "store initialised"
        );
        Self { state }
    }

    /// Load the initial snapshot from a JSON file.
    pub fn open_at(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading seed snapshot");
        let state = Snapshot::from_json_file(path)?;
        Ok(Self::from_snapshot(state))
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// Replace the whole state in one step.
    pub(crate) fn commit(&mut self, next: Snapshot) {
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        let sample = crate::sample::sample_snapshot();
        std::fs::write(&path, sample.to_json().unwrap()).unwrap();

        let store = Store::open_at(&path).expect("should open");
        assert_eq!(store.snapshot(), &sample);
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Store::open_at(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::StoreError::Io(_)));
    }
}
