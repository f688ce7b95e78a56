pub mod argon2;
pub mod errors;

pub use self::argon2::CredentialVerifier;
pub use errors::PasswordError;
