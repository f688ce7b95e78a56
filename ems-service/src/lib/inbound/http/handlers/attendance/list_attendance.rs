use axum::extract::State;
use axum::http::StatusCode;

use super::AttendanceData;
use crate::domain::attendance::ports::AttendanceServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AttendanceData>>, ApiError> {
    state
        .attendance_service
        .list_attendance()
        .await
        .map_err(ApiError::from)
        .map(|records| {
            ApiSuccess::new(
                StatusCode::OK,
                records.iter().map(AttendanceData::from).collect(),
            )
        })
}
