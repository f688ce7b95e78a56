use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing and verification.
///
/// Hashes with Argon2id v0x13 (19 MiB, 2 passes, 1 lane) and a fresh random
/// salt per call. Verification reads algorithm, parameters and salt back from
/// the stored PHC string.
pub struct CredentialVerifier {
    argon2: Argon2<'static>,
}

impl CredentialVerifier {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Never fails: a mismatch and an unreadable stored hash both yield `false`.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(stored_hash) {
            Ok(parsed_hash) => parsed_hash,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
                return false;
            }
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for CredentialVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let verifier = CredentialVerifier::new();
        let password = "my_secure_password";

        let hash = verifier.hash(password).expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(verifier.verify(password, &hash));
        assert!(!verifier.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_uses_fresh_salt() {
        let verifier = CredentialVerifier::new();

        let first = verifier.hash("same_password").unwrap();
        let second = verifier.hash("same_password").unwrap();

        assert_ne!(first, second);
        assert!(verifier.verify("same_password", &first));
        assert!(verifier.verify("same_password", &second));
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let verifier = CredentialVerifier::new();
        let hash = verifier.hash("Password1").unwrap();

        assert!(!verifier.verify("password1", &hash));
        assert!(!verifier.verify("Password1 ", &hash));
        assert!(!verifier.verify("", &hash));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let verifier = CredentialVerifier::new();

        assert!(!verifier.verify("password", "invalid_hash"));
        assert!(!verifier.verify("password", ""));
    }
}
