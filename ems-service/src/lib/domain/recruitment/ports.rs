use async_trait::async_trait;

use crate::domain::recruitment::errors::RecruitmentError;
use crate::domain::recruitment::models::Applicant;
use crate::domain::recruitment::models::ApplicantId;
use crate::domain::recruitment::models::ApplicantStatus;
use crate::domain::recruitment::models::NewApplicant;

/// Port for the recruitment pipeline.
#[async_trait]
pub trait RecruitmentServicePort: Send + Sync + 'static {
    async fn create_applicant(&self, applicant: NewApplicant)
        -> Result<Applicant, RecruitmentError>;

    async fn list_applicants(&self) -> Result<Vec<Applicant>, RecruitmentError>;

    /// # Errors
    /// * `NotFound` - Applicant does not exist
    /// * `InvalidStatus` - Target status is `Pending`
    async fn update_applicant_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RecruitmentError>;
}

/// Persistence operations for applicants.
#[async_trait]
pub trait ApplicantRepository: Send + Sync + 'static {
    /// Persist a new applicant in the `Pending` stage.
    async fn create(&self, applicant: NewApplicant) -> Result<Applicant, RecruitmentError>;

    async fn find_by_id(&self, id: ApplicantId) -> Result<Option<Applicant>, RecruitmentError>;

    /// Retrieve all applicants ordered by id.
    async fn list_all(&self) -> Result<Vec<Applicant>, RecruitmentError>;

    /// # Errors
    /// * `NotFound` - Applicant does not exist
    async fn update_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RecruitmentError>;
}
