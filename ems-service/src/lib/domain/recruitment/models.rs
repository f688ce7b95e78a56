use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::errors::RecruitmentError;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;

/// Job applicant tracked through the hiring pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    pub id: ApplicantId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub resume_url: Option<String>,
    pub status: ApplicantStatus,
}

/// Applicant unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicantId(pub i64);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pipeline stage of an applicant.
///
/// New applicants are `Pending`; HR may move them to any other stage, in any
/// order, but never back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicantStatus {
    Pending,
    Reviewed,
    OnHold,
    Approved,
    Rejected,
}

impl ApplicantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicantStatus::Pending => "PENDING",
            ApplicantStatus::Reviewed => "REVIEWED",
            ApplicantStatus::OnHold => "ON_HOLD",
            ApplicantStatus::Approved => "APPROVED",
            ApplicantStatus::Rejected => "REJECTED",
        }
    }
}

impl FromStr for ApplicantStatus {
    type Err = RecruitmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(ApplicantStatus::Pending),
            "REVIEWED" => Ok(ApplicantStatus::Reviewed),
            "ON_HOLD" => Ok(ApplicantStatus::OnHold),
            "APPROVED" => Ok(ApplicantStatus::Approved),
            "REJECTED" => Ok(ApplicantStatus::Rejected),
            _ => Err(RecruitmentError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for ApplicantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Applicant {
    /// # Errors
    /// * `InvalidStatus` - `status` is `Pending`
    pub fn move_to(&mut self, status: ApplicantStatus) -> Result<(), RecruitmentError> {
        if status == ApplicantStatus::Pending {
            return Err(RecruitmentError::InvalidStatus(status.to_string()));
        }
        self.status = status;
        Ok(())
    }
}

/// Applicant as submitted, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplicant {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub resume_url: Option<String>,
}
