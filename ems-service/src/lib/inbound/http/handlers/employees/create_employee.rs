use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::EmployeeData;
use super::EmployeeRequestBody;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<EmployeeRequestBody>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    state
        .employee_service
        .create_employee(body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}
