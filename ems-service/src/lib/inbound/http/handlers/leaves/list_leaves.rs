use axum::extract::State;
use axum::http::StatusCode;

use super::LeaveData;
use crate::domain::leave::ports::LeaveServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_leaves(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<LeaveData>>, ApiError> {
    state
        .leave_service
        .list_leaves()
        .await
        .map_err(ApiError::from)
        .map(|leaves| ApiSuccess::new(StatusCode::OK, leaves.iter().map(LeaveData::from).collect()))
}
