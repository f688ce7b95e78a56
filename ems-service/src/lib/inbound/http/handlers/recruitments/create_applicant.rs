use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApplicantData;
use crate::domain::recruitment::errors::RecruitmentError;
use crate::domain::recruitment::models::NewApplicant;
use crate::domain::recruitment::ports::RecruitmentServicePort;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_applicant(
    State(state): State<AppState>,
    Json(body): Json<CreateApplicantBody>,
) -> Result<ApiSuccess<ApplicantData>, ApiError> {
    state
        .recruitment_service
        .create_applicant(body.try_into_applicant()?)
        .await
        .map_err(ApiError::from)
        .map(|ref applicant| ApiSuccess::new(StatusCode::CREATED, applicant.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateApplicantBody {
    first_name: String,
    last_name: String,
    email: String,
    job_title: Option<String>,
    experience: Option<String>,
    resume_url: Option<String>,
}

impl CreateApplicantBody {
    fn try_into_applicant(self) -> Result<NewApplicant, RecruitmentError> {
        Ok(NewApplicant {
            first_name: PersonName::new(self.first_name, "first_name")?,
            last_name: PersonName::new(self.last_name, "last_name")?,
            email: EmailAddress::new(self.email)?,
            job_title: self.job_title,
            experience: self.experience,
            resume_url: self.resume_url,
        })
    }
}
