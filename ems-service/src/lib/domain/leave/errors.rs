use thiserror::Error;

use super::models::LeaveStatus;
use crate::domain::employee::errors::EmployeeError;

/// Top-level error for all leave-related operations
#[derive(Debug, Clone, Error)]
pub enum LeaveError {
    #[error("Invalid leave request: {0}")]
    InvalidRequest(String),

    #[error("Invalid leave status: {0}")]
    InvalidStatus(String),

    #[error("Leave request {id} was already {status}")]
    AlreadyDecided { id: i64, status: LeaveStatus },

    #[error("Leave request not found: {0}")]
    NotFound(i64),

    #[error("Employee does not exist: {0}")]
    UnknownEmployee(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<EmployeeError> for LeaveError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(id) => LeaveError::UnknownEmployee(id),
            other => LeaveError::DatabaseError(other.to_string()),
        }
    }
}
