use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::LeaveData;
use crate::domain::employee::models::EmployeeId;
use crate::domain::leave::errors::LeaveError;
use crate::domain::leave::models::NewLeaveRequest;
use crate::domain::leave::ports::LeaveServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn request_leave(
    State(state): State<AppState>,
    Json(body): Json<RequestLeaveBody>,
) -> Result<ApiSuccess<LeaveData>, ApiError> {
    state
        .leave_service
        .request_leave(body.try_into_request()?)
        .await
        .map_err(ApiError::from)
        .map(|ref leave| ApiSuccess::new(StatusCode::CREATED, leave.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestLeaveBody {
    employee_id: i64,
    reason: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl RequestLeaveBody {
    fn try_into_request(self) -> Result<NewLeaveRequest, LeaveError> {
        NewLeaveRequest::new(
            EmployeeId(self.employee_id),
            self.reason,
            self.start_date,
            self.end_date,
        )
    }
}
