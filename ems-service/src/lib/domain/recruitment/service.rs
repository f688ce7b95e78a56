use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::recruitment::errors::RecruitmentError;
use crate::domain::recruitment::models::Applicant;
use crate::domain::recruitment::models::ApplicantId;
use crate::domain::recruitment::models::ApplicantStatus;
use crate::domain::recruitment::models::NewApplicant;
use crate::domain::recruitment::ports::ApplicantRepository;
use crate::domain::recruitment::ports::RecruitmentServicePort;

/// Domain service implementation for the recruitment pipeline.
pub struct RecruitmentService<RR>
where
    RR: ApplicantRepository,
{
    repository: Arc<RR>,
}

impl<RR> RecruitmentService<RR>
where
    RR: ApplicantRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> RecruitmentServicePort for RecruitmentService<RR>
where
    RR: ApplicantRepository,
{
    async fn create_applicant(
        &self,
        applicant: NewApplicant,
    ) -> Result<Applicant, RecruitmentError> {
        let applicant = self.repository.create(applicant).await?;
        tracing::info!(
            applicant_id = %applicant.id,
            job_title = applicant.job_title.as_deref().unwrap_or("-"),
            "Applicant registered"
        );
        Ok(applicant)
    }

    async fn list_applicants(&self) -> Result<Vec<Applicant>, RecruitmentError> {
        self.repository.list_all().await
    }

    async fn update_applicant_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RecruitmentError> {
        let mut applicant = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RecruitmentError::NotFound(id.0))?;
        let previous = applicant.status;
        applicant.move_to(status)?;

        let applicant = self.repository.update_status(id, applicant.status).await?;
        tracing::info!(applicant_id = %id, from = %previous, to = %status, "Applicant status changed");
        Ok(applicant)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::shared::EmailAddress;
    use crate::domain::shared::PersonName;

    mock! {
        pub TestApplicantRepository {}

        #[async_trait]
        impl ApplicantRepository for TestApplicantRepository {
            async fn create(&self, applicant: NewApplicant) -> Result<Applicant, RecruitmentError>;
            async fn find_by_id(&self, id: ApplicantId) -> Result<Option<Applicant>, RecruitmentError>;
            async fn list_all(&self) -> Result<Vec<Applicant>, RecruitmentError>;
            async fn update_status(&self, id: ApplicantId, status: ApplicantStatus) -> Result<Applicant, RecruitmentError>;
        }
    }

    fn applicant(id: ApplicantId, status: ApplicantStatus) -> Applicant {
        Applicant {
            id,
            first_name: PersonName::new("Sam".to_string(), "first_name").unwrap(),
            last_name: PersonName::new("Lee".to_string(), "last_name").unwrap(),
            email: EmailAddress::new("sam@example.com".to_string()).unwrap(),
            job_title: None,
            experience: None,
            resume_url: None,
            status,
        }
    }

    #[tokio::test]
    async fn test_update_status_writes_new_stage() {
        let mut repository = MockTestApplicantRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(applicant(id, ApplicantStatus::Pending))));
        repository
            .expect_update_status()
            .withf(|_, status| *status == ApplicantStatus::OnHold)
            .times(1)
            .returning(|id, status| Ok(applicant(id, status)));

        let service = RecruitmentService::new(Arc::new(repository));

        let updated = service
            .update_applicant_status(ApplicantId(2), ApplicantStatus::OnHold)
            .await
            .unwrap();
        assert_eq!(updated.status, ApplicantStatus::OnHold);
    }

    #[tokio::test]
    async fn test_update_status_rejects_pending() {
        let mut repository = MockTestApplicantRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(applicant(id, ApplicantStatus::Reviewed))));
        repository.expect_update_status().times(0);

        let service = RecruitmentService::new(Arc::new(repository));

        let result = service
            .update_applicant_status(ApplicantId(2), ApplicantStatus::Pending)
            .await;
        assert!(matches!(result, Err(RecruitmentError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn test_update_status_of_missing_applicant() {
        let mut repository = MockTestApplicantRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = RecruitmentService::new(Arc::new(repository));

        let result = service
            .update_applicant_status(ApplicantId(8), ApplicantStatus::Approved)
            .await;
        assert!(matches!(result, Err(RecruitmentError::NotFound(8))));
    }
}
