use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::recruitment::errors::RecruitmentError;
use crate::domain::recruitment::models::Applicant;
use crate::domain::recruitment::models::ApplicantId;
use crate::domain::recruitment::models::ApplicantStatus;
use crate::domain::recruitment::models::NewApplicant;
use crate::domain::recruitment::ports::ApplicantRepository;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;

const APPLICANT_COLUMNS: &str =
    "id, first_name, last_name, email, job_title, experience, resume_url, status";

#[derive(sqlx::FromRow)]
struct ApplicantRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    job_title: Option<String>,
    experience: Option<String>,
    resume_url: Option<String>,
    status: String,
}

impl TryFrom<ApplicantRow> for Applicant {
    type Error = RecruitmentError;

    fn try_from(row: ApplicantRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<ApplicantStatus>().map_err(|_| {
            RecruitmentError::DatabaseError(format!(
                "unknown applicant status stored: {}",
                row.status
            ))
        })?;

        Ok(Applicant {
            id: ApplicantId(row.id),
            first_name: PersonName::new(row.first_name, "first_name")?,
            last_name: PersonName::new(row.last_name, "last_name")?,
            email: EmailAddress::new(row.email)?,
            job_title: row.job_title,
            experience: row.experience,
            resume_url: row.resume_url,
            status,
        })
    }
}

pub struct PostgresApplicantRepository {
    pool: PgPool,
}

impl PostgresApplicantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicantRepository for PostgresApplicantRepository {
    async fn create(&self, applicant: NewApplicant) -> Result<Applicant, RecruitmentError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO applicants
                (first_name, last_name, email, job_title, experience, resume_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(applicant.first_name.as_str())
        .bind(applicant.last_name.as_str())
        .bind(applicant.email.as_str())
        .bind(applicant.job_title.as_deref())
        .bind(applicant.experience.as_deref())
        .bind(applicant.resume_url.as_deref())
        .bind(ApplicantStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RecruitmentError::DatabaseError(e.to_string()))?;

        Ok(Applicant {
            id: ApplicantId(id),
            first_name: applicant.first_name,
            last_name: applicant.last_name,
            email: applicant.email,
            job_title: applicant.job_title,
            experience: applicant.experience,
            resume_url: applicant.resume_url,
            status: ApplicantStatus::Pending,
        })
    }

    async fn find_by_id(&self, id: ApplicantId) -> Result<Option<Applicant>, RecruitmentError> {
        let sql = format!("SELECT {APPLICANT_COLUMNS} FROM applicants WHERE id = $1");
        let row: Option<ApplicantRow> = sqlx::query_as(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RecruitmentError::DatabaseError(e.to_string()))?;

        row.map(Applicant::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Applicant>, RecruitmentError> {
        let sql = format!("SELECT {APPLICANT_COLUMNS} FROM applicants ORDER BY id");
        let rows: Vec<ApplicantRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RecruitmentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Applicant::try_from).collect()
    }

    async fn update_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RecruitmentError> {
        let sql = format!(
            "UPDATE applicants SET status = $2 WHERE id = $1 RETURNING {APPLICANT_COLUMNS}"
        );
        let row: Option<ApplicantRow> = sqlx::query_as(&sql)
            .bind(id.0)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RecruitmentError::DatabaseError(e.to_string()))?;

        row.map(Applicant::try_from)
            .transpose()?
            .ok_or(RecruitmentError::NotFound(id.0))
    }
}
