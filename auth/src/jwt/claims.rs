use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::principal::Principal;
use crate::principal::Role;

/// Claims carried by an access token.
///
/// `sub`, `iat` and `exp` are mandatory; a token missing any of them does not
/// deserialize and is rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (account username)
    pub sub: String,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Granted roles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,

    /// JWT ID, only used to correlate log lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Create claims for a subject issued at `issued_at` and valid for `ttl`.
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn for_subject(
        subject: impl ToString,
        roles: Vec<Role>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Option<Self> {
        let expiration = issued_at.checked_add_signed(ttl)?;

        Some(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            roles,
            jti: Some(Uuid::new_v4().to_string()),
        })
    }

    /// Check if token is expired. A token is expired from its `exp` second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Check if the token claims to be issued after `current_timestamp`.
    pub fn is_premature(&self, current_timestamp: i64) -> bool {
        self.iat > current_timestamp
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn into_principal(self) -> Principal {
        Principal::new(self.sub, self.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let now = Utc::now();
        let claims = Claims::for_subject("alice", vec![Role::Hr], now, Duration::hours(24)).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.roles, vec![Role::Hr]);
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(claims.jti.is_some());
    }

    #[test]
    fn test_is_expired() {
        let issued = DateTime::from_timestamp(1000, 0).unwrap();
        let claims = Claims::for_subject("alice", vec![], issued, Duration::seconds(100)).unwrap();

        assert!(!claims.is_expired(1099));
        assert!(claims.is_expired(1100)); // Exactly at expiration
        assert!(claims.is_expired(1101));
    }

    #[test]
    fn test_is_premature() {
        let issued = DateTime::from_timestamp(1000, 0).unwrap();
        let claims = Claims::for_subject("alice", vec![], issued, Duration::seconds(100)).unwrap();

        assert!(claims.is_premature(999));
        assert!(!claims.is_premature(1000));
    }

    #[test]
    fn test_roles_omitted_when_empty() {
        let claims = Claims::for_subject("alice", vec![], Utc::now(), Duration::minutes(5)).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("roles").is_none());

        let decoded: Claims = serde_json::from_value(json).unwrap();
        assert!(decoded.roles.is_empty());
    }

    #[test]
    fn test_expiry_overflow_yields_none() {
        let claims = Claims::for_subject(
            "alice",
            vec![],
            Utc::now(),
            Duration::days(365 * 1_000_000),
        );
        assert!(claims.is_none());
    }

    #[test]
    fn test_missing_subject_does_not_deserialize() {
        let json = serde_json::json!({ "iat": 1, "exp": 2 });
        assert!(serde_json::from_value::<Claims>(json).is_err());
    }
}
