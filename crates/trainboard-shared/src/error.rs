use thiserror::Error;

/// A request rejected before it reached the store's collections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Please select at least one department")]
    NoDepartmentSelected,

    #[error("Please select a department")]
    NoDepartmentAssigned,
}
