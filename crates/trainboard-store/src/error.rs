use thiserror::Error;
use trainboard_shared::ValidationError;

/// Errors produced by the store layer.
///
/// A returned error always means the store was left exactly as it was.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request failed a required-field check.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Delete blocked: employees still belong to the department.
    #[error("Cannot delete department. {count} employee(s) are still assigned to it.")]
    DepartmentHasEmployees { count: usize },

    /// No record with this identifier.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Reading a seed snapshot from disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed snapshot is not valid JSON for the five collections.
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
