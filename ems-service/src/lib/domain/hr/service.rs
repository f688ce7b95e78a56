use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Role;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Password;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::hr::errors::HrError;
use crate::domain::hr::models::CreateHrCommand;
use crate::domain::hr::models::Hr;
use crate::domain::hr::models::HrId;
use crate::domain::hr::models::NewHr;
use crate::domain::hr::models::UpdateHrCommand;
use crate::domain::hr::ports::HrRepository;
use crate::domain::hr::ports::HrServicePort;
use crate::domain::shared::EmailAddress;

/// Domain service for HR staff.
///
/// Each HR record and its login account are written together. A failed HR
/// write removes or restores the account so the two never drift apart.
pub struct HrService<HR, AR>
where
    HR: HrRepository,
    AR: AccountRepository,
{
    repository: Arc<HR>,
    accounts: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<HR, AR> HrService<HR, AR>
where
    HR: HrRepository,
    AR: AccountRepository,
{
    pub fn new(repository: Arc<HR>, accounts: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            accounts,
            authenticator,
        }
    }

    fn username_for(email: &EmailAddress) -> Result<Username, HrError> {
        Username::new(email.as_str().to_string())
            .map_err(|e| HrError::from(AccountError::from(e)))
    }

    fn hash(&self, password: &Password) -> Result<String, HrError> {
        self.authenticator
            .hash_password(password.expose())
            .map_err(|e| HrError::from(AccountError::PasswordHashing(e.to_string())))
    }

    async fn account_of(&self, hr: &Hr) -> Result<Account, HrError> {
        self.accounts
            .find_by_id(hr.account_id)
            .await?
            .ok_or_else(|| HrError::from(AccountError::NotFound(hr.account_id.to_string())))
    }
}

#[async_trait]
impl<HR, AR> HrServicePort for HrService<HR, AR>
where
    HR: HrRepository,
    AR: AccountRepository,
{
    async fn create_hr(&self, command: CreateHrCommand) -> Result<Hr, HrError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(HrError::EmailAlreadyExists(command.email.to_string()));
        }

        let username = Self::username_for(&command.email)?;
        let password_hash = self.hash(&command.password)?;

        let account = self
            .accounts
            .create(NewAccount {
                username,
                password_hash,
                role: Role::Hr,
                created_at: Utc::now(),
            })
            .await?;

        let created = self
            .repository
            .create(NewHr {
                name: command.name,
                email: command.email,
                account_id: account.id,
            })
            .await;

        match created {
            Ok(hr) => {
                tracing::info!(hr_id = %hr.id, account_id = %account.id, "HR created");
                Ok(hr)
            }
            Err(err) => {
                if let Err(cleanup) = self.accounts.delete(account.id).await {
                    tracing::error!(
                        account_id = %account.id,
                        error = %cleanup,
                        "Failed to remove account after HR creation failed"
                    );
                }
                Err(err)
            }
        }
    }

    async fn list_hrs(&self) -> Result<Vec<Hr>, HrError> {
        self.repository.list_all().await
    }

    async fn get_hr(&self, id: HrId) -> Result<Hr, HrError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(HrError::NotFound(id.0))
    }

    async fn update_hr(&self, id: HrId, command: UpdateHrCommand) -> Result<Hr, HrError> {
        let mut hr = self.get_hr(id).await?;

        let email_changed = command
            .email
            .as_ref()
            .is_some_and(|email| email != &hr.email);

        let previous_account = if email_changed || command.password.is_some() {
            let original = self.account_of(&hr).await?;
            let mut account = original.clone();

            if let Some(email) = command.email.as_ref().filter(|_| email_changed) {
                account.username = Self::username_for(email)?;
            }
            if let Some(password) = &command.password {
                account.password_hash = self.hash(password)?;
            }

            self.accounts.update(account).await?;
            Some(original)
        } else {
            None
        };

        if let Some(name) = command.name {
            hr.name = name;
        }
        if let Some(email) = command.email {
            hr.email = email;
        }

        match self.repository.update(hr).await {
            Ok(hr) => {
                tracing::info!(hr_id = %hr.id, "HR updated");
                Ok(hr)
            }
            Err(err) => {
                if let Some(original) = previous_account {
                    let account_id = original.id;
                    if let Err(restore) = self.accounts.update(original).await {
                        tracing::error!(
                            %account_id,
                            error = %restore,
                            "Failed to restore account after HR update failed"
                        );
                    }
                }
                Err(err)
            }
        }
    }

    async fn delete_hr(&self, id: HrId) -> Result<(), HrError> {
        let hr = self.get_hr(id).await?;

        self.repository.delete(id).await?;

        match self.accounts.delete(hr.account_id).await {
            Ok(()) => {}
            Err(AccountError::NotFound(_)) => {
                tracing::warn!(hr_id = %id, account_id = %hr.account_id, "HR account already removed");
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(hr_id = %id, "HR deleted");
        Ok(())
    }
}
