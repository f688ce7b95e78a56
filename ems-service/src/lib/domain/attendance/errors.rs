use thiserror::Error;

use crate::domain::employee::errors::EmployeeError;

/// Top-level error for attendance operations
#[derive(Debug, Clone, Error)]
pub enum AttendanceError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<EmployeeError> for AttendanceError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(id) => AttendanceError::EmployeeNotFound(id),
            other => AttendanceError::DatabaseError(other.to_string()),
        }
    }
}
