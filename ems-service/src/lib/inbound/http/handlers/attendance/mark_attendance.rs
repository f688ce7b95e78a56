use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;

use super::AttendanceData;
use crate::domain::attendance::models::AttendanceMark;
use crate::domain::attendance::ports::AttendanceServicePort;
use crate::domain::employee::models::EmployeeId;
use crate::inbound::http::handlers::parse_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Mark an employee present or absent. Without a `date` the mark is for
/// the current UTC day.
pub async fn mark_attendance(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(body): Json<MarkAttendanceBody>,
) -> Result<ApiSuccess<AttendanceData>, ApiError> {
    let mark = AttendanceMark {
        employee_id: EmployeeId(parse_id(&employee_id)?),
        date: body.date.unwrap_or_else(|| Utc::now().date_naive()),
        present: body.present,
    };

    state
        .attendance_service
        .mark_attendance(mark)
        .await
        .map_err(ApiError::from)
        .map(|ref attendance| ApiSuccess::new(StatusCode::OK, attendance.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkAttendanceBody {
    present: bool,
    date: Option<NaiveDate>,
}
