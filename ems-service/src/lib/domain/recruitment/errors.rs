use thiserror::Error;

use crate::domain::shared::EmailError;
use crate::domain::shared::NameError;

/// Top-level error for recruitment operations
#[derive(Debug, Clone, Error)]
pub enum RecruitmentError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid applicant status: {0}")]
    InvalidStatus(String),

    #[error("Applicant not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
