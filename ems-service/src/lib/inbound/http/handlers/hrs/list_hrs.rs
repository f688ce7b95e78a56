use axum::extract::State;
use axum::http::StatusCode;

use super::HrData;
use crate::domain::hr::ports::HrServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_hrs(State(state): State<AppState>) -> Result<ApiSuccess<Vec<HrData>>, ApiError> {
    state
        .hr_service
        .list_hrs()
        .await
        .map_err(ApiError::from)
        .map(|hrs| ApiSuccess::new(StatusCode::OK, hrs.iter().map(HrData::from).collect()))
}
