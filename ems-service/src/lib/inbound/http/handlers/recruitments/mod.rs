pub mod create_applicant;
pub mod list_applicants;
pub mod update_applicant_status;

pub use create_applicant::create_applicant;
pub use list_applicants::list_applicants;
use serde::Deserialize;
use serde::Serialize;
pub use update_applicant_status::update_applicant_status;

use crate::domain::recruitment::models::Applicant;
use crate::domain::recruitment::models::ApplicantStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub resume_url: Option<String>,
    pub status: ApplicantStatus,
}

impl From<&Applicant> for ApplicantData {
    fn from(applicant: &Applicant) -> Self {
        Self {
            id: applicant.id.0,
            first_name: applicant.first_name.as_str().to_string(),
            last_name: applicant.last_name.as_str().to_string(),
            email: applicant.email.as_str().to_string(),
            job_title: applicant.job_title.clone(),
            experience: applicant.experience.clone(),
            resume_url: applicant.resume_url.clone(),
            status: applicant.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicantStatusRequestBody {
    status: String,
}
