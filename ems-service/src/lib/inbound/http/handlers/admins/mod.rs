pub mod get_current_admin;

use auth::Role;
use chrono::DateTime;
use chrono::Utc;
pub use get_current_admin::get_current_admin;
use serde::Serialize;

use crate::domain::account::models::Account;

/// Account view without the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            username: account.username.as_str().to_string(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}
