use axum::extract::State;
use axum::http::StatusCode;

use super::ApplicantData;
use crate::domain::recruitment::ports::RecruitmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_applicants(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ApplicantData>>, ApiError> {
    state
        .recruitment_service
        .list_applicants()
        .await
        .map_err(ApiError::from)
        .map(|applicants| {
            ApiSuccess::new(
                StatusCode::OK,
                applicants.iter().map(ApplicantData::from).collect(),
            )
        })
}
