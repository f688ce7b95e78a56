use thiserror::Error;

/// Error type for token issuance and verification.
///
/// Variants are kept apart for diagnostics only. Callers at the HTTP boundary
/// must collapse every verification failure into a single response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is not valid yet")]
    NotYetValid,

    #[error("Invalid token claims: {0}")]
    InvalidClaims(String),

    #[error("Failed to sign token: {0}")]
    SigningError(String),
}
