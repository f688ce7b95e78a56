use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::LeaveData;
use super::LeaveStatusRequestBody;
use crate::domain::leave::models::LeaveId;
use crate::domain::leave::models::LeaveStatus;
use crate::domain::leave::ports::LeaveServicePort;
use crate::inbound::http::handlers::parse_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_leave_status(
    State(state): State<AppState>,
    Path(leave_id): Path<String>,
    Json(body): Json<LeaveStatusRequestBody>,
) -> Result<ApiSuccess<LeaveData>, ApiError> {
    let leave_id = LeaveId(parse_id(&leave_id)?);
    let status = body.status.parse::<LeaveStatus>()?;

    state
        .leave_service
        .update_leave_status(leave_id, status)
        .await
        .map_err(ApiError::from)
        .map(|ref leave| ApiSuccess::new(StatusCode::OK, leave.into()))
}
