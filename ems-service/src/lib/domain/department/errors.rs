use thiserror::Error;

use crate::domain::shared::NameError;

/// Top-level error for all department-related operations
#[derive(Debug, Clone, Error)]
pub enum DepartmentError {
    #[error("Invalid department name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Department not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
