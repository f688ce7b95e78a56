use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Role;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Password;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn create_account(
        &self,
        username: Username,
        password: &Password,
        role: Role,
    ) -> Result<Account, AccountError> {
        let password_hash = self
            .authenticator
            .hash_password(password.expose())
            .map_err(|e| AccountError::PasswordHashing(e.to_string()))?;

        self.repository
            .create(NewAccount {
                username,
                password_hash,
                role,
                created_at: Utc::now(),
            })
            .await
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        let account = self
            .create_account(command.username, &command.password, Role::Employee)
            .await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            role = %account.role,
            "Account registered"
        );

        Ok(account)
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        let account = self.repository.find_by_username(username).await?;
        let roles: Vec<Role> = account.iter().map(|a| a.role).collect();

        let token = self
            .authenticator
            .authenticate(
                username,
                password,
                account.as_ref().map(|a| a.password_hash.as_str()),
                &roles,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                AuthenticationError::Token(err) => AccountError::TokenGeneration(err.to_string()),
            })?;

        // authenticate only succeeds when a stored hash was supplied
        let account = account.ok_or(AccountError::InvalidCredentials)?;

        tracing::info!(account_id = %account.id, role = %account.role, "Login succeeded");

        Ok(LoginOutcome { account, token })
    }

    async fn get_account_by_username(&self, username: &str) -> Result<Account, AccountError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(AccountError::NotFound(username.to_string()))
    }

    async fn ensure_admin(
        &self,
        username: Username,
        password: Password,
    ) -> Result<Account, AccountError> {
        if let Some(existing) = self.repository.find_by_username(username.as_str()).await? {
            if existing.role != Role::Admin {
                tracing::warn!(
                    username = %existing.username,
                    role = %existing.role,
                    "Bootstrap admin username belongs to a non-admin account"
                );
            }
            return Ok(existing);
        }

        let account = self
            .create_account(username, &password, Role::Admin)
            .await?;
        tracing::info!(account_id = %account.id, username = %account.username, "Bootstrap admin created");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use mockall::mock;

    use super::*;
    use crate::domain::account::models::AccountId;

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;
            async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;
            async fn update(&self, account: Account) -> Result<Account, AccountError>;
            async fn delete(&self, id: AccountId) -> Result<(), AccountError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(
            b"test-secret-key-for-jwt-signing-at-least-32-bytes",
            Duration::hours(1),
        ))
    }

    fn persisted(account: NewAccount) -> Account {
        Account {
            id: AccountId(1),
            username: account.username,
            password_hash: account.password_hash,
            role: account.role,
            created_at: account.created_at,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_assigns_employee_role() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_create()
            .withf(|account| {
                account.username.as_str() == "jane"
                    && account.role == Role::Employee
                    && account.password_hash.starts_with("$argon2id$")
            })
            .times(1)
            .returning(|account| Ok(persisted(account)));

        let service = AccountService::new(Arc::new(repository), authenticator());

        let account = service
            .register(RegisterCommand {
                username: Username::new("jane".to_string()).unwrap(),
                password: Password::new("pass_word!".to_string()).unwrap(),
            })
            .await
            .expect("Registration failed");

        assert_eq!(account.role, Role::Employee);
        assert_ne!(account.password_hash, "pass_word!");
    }

    #[tokio::test]
    async fn test_login_success_issues_token_with_role() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("pass_word!").unwrap();

        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_username()
            .withf(|username| username == "jane")
            .times(1)
            .returning(move |_| {
                Ok(Some(Account {
                    id: AccountId(7),
                    username: Username::new("jane".to_string()).unwrap(),
                    password_hash: hash.clone(),
                    role: Role::Hr,
                    created_at: Utc::now(),
                }))
            });

        let service = AccountService::new(Arc::new(repository), Arc::clone(&authenticator));

        let outcome = service.login("jane", "pass_word!").await.unwrap();
        assert_eq!(outcome.account.id, AccountId(7));

        let principal = authenticator
            .validate_token(outcome.token.as_str())
            .unwrap();
        assert_eq!(principal.subject, "jane");
        assert_eq!(principal.roles, vec![Role::Hr]);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("pass_word!").unwrap();

        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_username().returning(move |_| {
            Ok(Some(Account {
                id: AccountId(7),
                username: Username::new("jane".to_string()).unwrap(),
                password_hash: hash.clone(),
                role: Role::Employee,
                created_at: Utc::now(),
            }))
        });

        let service = AccountService::new(Arc::new(repository), authenticator);

        let result = service.login("jane", "Wrong_Password!").await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_username()
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository), authenticator());

        let result = service.login("ghost", "pass_word!").await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_ensure_admin_is_idempotent() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_username().returning(|_| {
            Ok(Some(Account {
                id: AccountId(1),
                username: Username::new("admin".to_string()).unwrap(),
                password_hash: "$argon2id$existing".to_string(),
                role: Role::Admin,
                created_at: Utc::now(),
            }))
        });
        repository.expect_create().times(0);

        let service = AccountService::new(Arc::new(repository), authenticator());

        let account = service
            .ensure_admin(
                Username::new("admin".to_string()).unwrap(),
                Password::new("admin-password".to_string()).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(account.id, AccountId(1));
    }

    #[tokio::test]
    async fn test_ensure_admin_creates_missing_admin() {
        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_username()
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|account| account.role == Role::Admin)
            .times(1)
            .returning(|account| Ok(persisted(account)));

        let service = AccountService::new(Arc::new(repository), authenticator());

        let account = service
            .ensure_admin(
                Username::new("admin".to_string()).unwrap(),
                Password::new("admin-password".to_string()).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(account.role, Role::Admin);
    }
}
