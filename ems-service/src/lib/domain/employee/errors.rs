use thiserror::Error;

use crate::domain::department::errors::DepartmentError;
use crate::domain::shared::EmailError;
use crate::domain::shared::NameError;

/// Top-level error for all employee-related operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Employee not found: {0}")]
    NotFound(i64),

    #[error("Department does not exist: {0}")]
    UnknownDepartment(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DepartmentError> for EmployeeError {
    fn from(err: DepartmentError) -> Self {
        match err {
            DepartmentError::NotFound(id) => EmployeeError::UnknownDepartment(id),
            DepartmentError::InvalidName(_) | DepartmentError::DatabaseError(_) => {
                EmployeeError::DatabaseError(err.to_string())
            }
        }
    }
}
