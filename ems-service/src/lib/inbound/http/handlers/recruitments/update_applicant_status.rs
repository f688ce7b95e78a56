use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApplicantData;
use super::ApplicantStatusRequestBody;
use crate::domain::recruitment::models::ApplicantId;
use crate::domain::recruitment::models::ApplicantStatus;
use crate::domain::recruitment::ports::RecruitmentServicePort;
use crate::inbound::http::handlers::parse_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_applicant_status(
    State(state): State<AppState>,
    Path(applicant_id): Path<String>,
    Json(body): Json<ApplicantStatusRequestBody>,
) -> Result<ApiSuccess<ApplicantData>, ApiError> {
    let applicant_id = ApplicantId(parse_id(&applicant_id)?);
    let status = body.status.parse::<ApplicantStatus>()?;

    state
        .recruitment_service
        .update_applicant_status(applicant_id, status)
        .await
        .map_err(ApiError::from)
        .map(|ref applicant| ApiSuccess::new(StatusCode::OK, applicant.into()))
}
