//! Authentication utilities library
//!
//! Provides the authentication boundary of the employee management service:
//! - Password hashing (Argon2id)
//! - Access token issuance and verification
//! - Static route access policy
//! - Authentication coordination
//!
//! Nothing here depends on a web framework; the HTTP layer adapts these types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::CredentialVerifier;
//!
//! let verifier = CredentialVerifier::new();
//! let hash = verifier.hash("my_password").unwrap();
//! assert!(verifier.verify("my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Role, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("alice", &[Role::Hr], Duration::hours(1)).unwrap();
//! let principal = codec.verify(token.as_str()).unwrap();
//! assert_eq!(principal.subject, "alice");
//! ```
//!
//! ## Access Policy
//! ```
//! use auth::{AccessPolicy, Exposure, RouteRule};
//! use http::Method;
//!
//! let policy = AccessPolicy::new(vec![
//!     RouteRule::public("/api/auth/login").unwrap().with_methods([Method::POST]),
//! ]);
//! assert!(policy.is_public(&Method::POST, "/api/auth/login"));
//! assert_eq!(policy.exposure(&Method::GET, "/api/hrs"), &Exposure::Authenticated);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod principal;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::Token;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::CredentialVerifier;
pub use password::PasswordError;
pub use policy::AccessPolicy;
pub use policy::Exposure;
pub use policy::PatternError;
pub use policy::RoutePattern;
pub use policy::RouteRule;
pub use principal::Principal;
pub use principal::Role;
