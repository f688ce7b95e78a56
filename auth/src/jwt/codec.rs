use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::principal::Principal;
use crate::principal::Role;

/// Signed access token as handed out at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Token codec for issuing and verifying access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Expiry is checked here rather than by
/// `jsonwebtoken` so that a token is rejected from its `exp` second onwards
/// with no leeway.
pub struct TokenCodec {
    keys: Option<SigningKeys>,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec with a secret key.
    ///
    /// An empty secret leaves the codec without a signing key: every `issue`
    /// fails with `SigningError` and every `verify` with `InvalidSignature`.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let keys = (!secret.is_empty()).then(|| SigningKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        });

        Self {
            keys,
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject` valid for `ttl` from now.
    pub fn issue(&self, subject: &str, roles: &[Role], ttl: Duration) -> Result<Token, TokenError> {
        self.issue_at(subject, roles, ttl, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// # Errors
    /// * `InvalidClaims` - Empty subject, non-positive TTL, or expiry out of range
    /// * `SigningError` - Signing key unavailable or encoding failed
    pub fn issue_at(
        &self,
        subject: &str,
        roles: &[Role],
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Token, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::InvalidClaims("subject is empty".to_string()));
        }
        if ttl <= Duration::zero() {
            return Err(TokenError::InvalidClaims(format!(
                "ttl must be positive, got {}s",
                ttl.num_seconds()
            )));
        }

        let keys = self
            .keys
            .as_ref()
            .ok_or_else(|| TokenError::SigningError("signing key unavailable".to_string()))?;

        let out_of_range = || TokenError::InvalidClaims("expiry out of range".to_string());
        let claims =
            Claims::for_subject(subject, roles.to_vec(), now, ttl).ok_or_else(out_of_range)?;
        let expires_at = claims.expires_at().ok_or_else(out_of_range)?;

        let value = encode(&Header::new(self.algorithm), &claims, &keys.encoding)
            .map_err(|e| TokenError::SigningError(e.to_string()))?;

        Ok(Token { value, expires_at })
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Principal, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature mismatch, foreign algorithm, or no key
    /// * `Expired` - `now` is at or past the encoded expiry
    /// * `NotYetValid` - Token claims to be issued after `now`
    /// * `Malformed` - Token cannot be split, decoded, or parsed into claims
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, TokenError> {
        let claims = self.decode_claims(token)?;
        let timestamp = now.timestamp();

        if claims.is_expired(timestamp) {
            return Err(TokenError::Expired);
        }
        if claims.is_premature(timestamp) {
            return Err(TokenError::NotYetValid);
        }

        Ok(claims.into_principal())
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::InvalidSignature)?;

        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("alice", &[Role::Admin, Role::Hr], Duration::hours(1))
            .expect("Failed to issue token");
        assert!(!token.as_str().is_empty());

        let principal = codec.verify(token.as_str()).expect("Failed to verify token");
        assert_eq!(principal.subject, "alice");
        assert_eq!(principal.roles, vec![Role::Admin, Role::Hr]);
    }

    #[test]
    fn test_issue_without_roles() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue_at("bob", &[], Duration::seconds(30), at(1_000))
            .unwrap();
        let principal = codec.verify_at(token.as_str(), at(1_010)).unwrap();

        assert_eq!(principal, Principal::new("bob", vec![]));
    }

    #[test]
    fn test_expires_at_matches_ttl() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue_at("alice", &[], Duration::seconds(90), at(1_000))
            .unwrap();

        assert_eq!(token.expires_at(), at(1_090));
    }

    #[test]
    fn test_verify_at_or_after_expiry_fails() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue_at("alice", &[Role::Employee], Duration::seconds(60), at(1_000))
            .unwrap();

        assert!(codec.verify_at(token.as_str(), at(1_059)).is_ok());
        assert_eq!(
            codec.verify_at(token.as_str(), at(1_060)),
            Err(TokenError::Expired)
        );
        assert_eq!(
            codec.verify_at(token.as_str(), at(5_000)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_verify_before_issuance_fails() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue_at("alice", &[], Duration::seconds(60), at(1_000))
            .unwrap();

        assert_eq!(
            codec.verify_at(token.as_str(), at(999)),
            Err(TokenError::NotYetValid)
        );
    }

    #[test]
    fn test_altered_payload_fails_signature_check() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue_at("alice", &[Role::Hr], Duration::hours(1), at(1_000))
            .unwrap();
        let token = token.as_str();

        let header_end = token.find('.').unwrap();
        let payload_end = token.rfind('.').unwrap();

        for position in header_end + 1..payload_end {
            let mut altered = token.as_bytes().to_vec();
            altered[position] = if altered[position] == b'A' { b'B' } else { b'A' };
            let altered = String::from_utf8(altered).unwrap();

            assert_eq!(
                codec.verify_at(&altered, at(1_010)),
                Err(TokenError::InvalidSignature),
                "byte {} altered",
                position
            );
        }
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer.issue("alice", &[], Duration::hours(1)).unwrap();

        assert_eq!(
            verifier.verify(token.as_str()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_malformed_token() {
        let codec = TokenCodec::new(SECRET);

        assert!(matches!(
            codec.verify("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            codec.verify("invalid.token.here"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(codec.verify(""), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_token_missing_claims_is_malformed() {
        let codec = TokenCodec::new(SECRET);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "alice" }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(codec.verify(&token), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_issue_without_signing_key() {
        let codec = TokenCodec::new(b"");

        assert!(matches!(
            codec.issue("alice", &[], Duration::hours(1)),
            Err(TokenError::SigningError(_))
        ));
    }

    #[test]
    fn test_verify_without_signing_key() {
        let token = TokenCodec::new(SECRET)
            .issue("alice", &[], Duration::hours(1))
            .unwrap();

        assert_eq!(
            TokenCodec::new(b"").verify(token.as_str()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_issue_rejects_invalid_claims() {
        let codec = TokenCodec::new(SECRET);

        assert!(matches!(
            codec.issue("", &[], Duration::hours(1)),
            Err(TokenError::InvalidClaims(_))
        ));
        assert!(matches!(
            codec.issue("alice", &[], Duration::zero()),
            Err(TokenError::InvalidClaims(_))
        ));
        assert!(matches!(
            codec.issue("alice", &[], Duration::seconds(-5)),
            Err(TokenError::InvalidClaims(_))
        ));
    }

    #[test]
    fn test_issue_rejects_expiry_out_of_range() {
        let codec = TokenCodec::new(SECRET);

        assert!(matches!(
            codec.issue("alice", &[], Duration::days(365 * 1_000_000)),
            Err(TokenError::InvalidClaims(_))
        ));
    }
}
