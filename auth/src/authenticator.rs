use std::sync::OnceLock;

use chrono::Duration;

use crate::jwt::Token;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::CredentialVerifier;
use crate::password::PasswordError;
use crate::principal::Principal;
use crate::principal::Role;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    credential_verifier: CredentialVerifier,
    token_codec: TokenCodec,
    token_ttl: Duration,
    decoy_hash: OnceLock<Option<String>>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            credential_verifier: CredentialVerifier::new(),
            token_codec: TokenCodec::new(jwt_secret),
            token_ttl,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.credential_verifier.hash(password)
    }

    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.credential_verifier.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token.
    ///
    /// `stored_hash` is `None` when no account exists for `subject`. A decoy
    /// hash is verified in that case so both failure paths cost one hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account, or password does not match
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        subject: &str,
        password: &str,
        stored_hash: Option<&str>,
        roles: &[Role],
    ) -> Result<Token, AuthenticationError> {
        let Some(stored_hash) = stored_hash else {
            self.burn_decoy_verification(password);
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !self.credential_verifier.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject, roles)?)
    }

    /// Issue a token without password verification.
    pub fn issue_token(&self, subject: &str, roles: &[Role]) -> Result<Token, TokenError> {
        self.token_codec.issue(subject, roles, self.token_ttl)
    }

    /// Validate a token and return the principal it carries.
    pub fn validate_token(&self, token: &str) -> Result<Principal, TokenError> {
        self.token_codec.verify(token)
    }

    pub fn token_codec(&self) -> &TokenCodec {
        &self.token_codec
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    fn burn_decoy_verification(&self, password: &str) {
        let decoy = self.decoy_hash.get_or_init(|| {
            self.credential_verifier
                .hash("decoy-password-for-unknown-accounts")
                .ok()
        });

        if let Some(decoy) = decoy {
            let _ = self.credential_verifier.verify(password, decoy);
        }
    }
}
