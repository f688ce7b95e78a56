use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Password;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new `EMPLOYEE` account.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `PasswordHashing` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue an access token.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AccountError>;

    /// Retrieve account by username.
    ///
    /// # Errors
    /// * `NotFound` - No account with this username
    async fn get_account_by_username(&self, username: &str) -> Result<Account, AccountError>;

    /// Create the bootstrap `ADMIN` account unless the username already exists.
    async fn ensure_admin(
        &self,
        username: Username,
        password: Password,
    ) -> Result<Account, AccountError>;
}

/// Persistence operations for accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account, assigning its id.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;

    /// Update username, hash and role of an existing account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    async fn update(&self, account: Account) -> Result<Account, AccountError>;

    /// # Errors
    /// * `NotFound` - Account does not exist
    async fn delete(&self, id: AccountId) -> Result<(), AccountError>;
}
