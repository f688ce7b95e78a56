use thiserror::Error;

use crate::domain::account::errors::AccountError;
use crate::domain::shared::EmailError;
use crate::domain::shared::NameError;

/// Top-level error for all HR-related operations
#[derive(Debug, Clone, Error)]
pub enum HrError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("HR not found: {0}")]
    NotFound(i64),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error(transparent)]
    Account(AccountError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<AccountError> for HrError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::UsernameAlreadyExists(username) => HrError::EmailAlreadyExists(username),
            other => HrError::Account(other),
        }
    }
}
