use async_trait::async_trait;

use crate::domain::hr::errors::HrError;
use crate::domain::hr::models::CreateHrCommand;
use crate::domain::hr::models::Hr;
use crate::domain::hr::models::HrId;
use crate::domain::hr::models::NewHr;
use crate::domain::hr::models::UpdateHrCommand;

/// Port for HR domain service operations.
#[async_trait]
pub trait HrServicePort: Send + Sync + 'static {
    /// Create an HR record together with its `HR` login account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is used by another HR or account
    /// * `Account` - Account could not be created
    /// * `DatabaseError` - Database operation failed
    async fn create_hr(&self, command: CreateHrCommand) -> Result<Hr, HrError>;

    async fn list_hrs(&self) -> Result<Vec<Hr>, HrError>;

    /// # Errors
    /// * `NotFound` - HR does not exist
    async fn get_hr(&self, id: HrId) -> Result<Hr, HrError>;

    /// Apply a partial update, keeping the login account in sync.
    ///
    /// # Errors
    /// * `NotFound` - HR does not exist
    /// * `EmailAlreadyExists` - New email is already taken
    async fn update_hr(&self, id: HrId, command: UpdateHrCommand) -> Result<Hr, HrError>;

    /// Delete the HR record and its login account.
    ///
    /// # Errors
    /// * `NotFound` - HR does not exist
    async fn delete_hr(&self, id: HrId) -> Result<(), HrError>;
}

/// Persistence operations for HR records.
#[async_trait]
pub trait HrRepository: Send + Sync + 'static {
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already taken
    async fn create(&self, hr: NewHr) -> Result<Hr, HrError>;

    async fn find_by_id(&self, id: HrId) -> Result<Option<Hr>, HrError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Hr>, HrError>;

    async fn list_all(&self) -> Result<Vec<Hr>, HrError>;

    /// # Errors
    /// * `NotFound` - HR does not exist
    /// * `EmailAlreadyExists` - New email is already taken
    async fn update(&self, hr: Hr) -> Result<Hr, HrError>;

    /// # Errors
    /// * `NotFound` - HR does not exist
    async fn delete(&self, id: HrId) -> Result<(), HrError>;
}
