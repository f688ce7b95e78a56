//! Read-only aggregate views over the employee list.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;

use super::EmployeeData;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn recent_hires(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EmployeeData>>, ApiError> {
    state
        .employee_service
        .recent_hires()
        .await
        .map_err(ApiError::from)
        .map(|employees| {
            ApiSuccess::new(
                StatusCode::OK,
                employees.iter().map(EmployeeData::from).collect(),
            )
        })
}

pub async fn department_count(
    State(state): State<AppState>,
) -> Result<ApiSuccess<BTreeMap<String, u64>>, ApiError> {
    state
        .employee_service
        .department_counts()
        .await
        .map_err(ApiError::from)
        .map(|counts| ApiSuccess::new(StatusCode::OK, counts))
}

pub async fn position_count(
    State(state): State<AppState>,
) -> Result<ApiSuccess<BTreeMap<String, u64>>, ApiError> {
    state
        .employee_service
        .position_counts()
        .await
        .map_err(ApiError::from)
        .map(|counts| ApiSuccess::new(StatusCode::OK, counts))
}

pub async fn salary_by_department(
    State(state): State<AppState>,
) -> Result<ApiSuccess<BTreeMap<String, f64>>, ApiError> {
    state
        .employee_service
        .salary_by_department()
        .await
        .map_err(ApiError::from)
        .map(|averages| ApiSuccess::new(StatusCode::OK, averages))
}

pub async fn salary_by_position(
    State(state): State<AppState>,
) -> Result<ApiSuccess<BTreeMap<String, f64>>, ApiError> {
    state
        .employee_service
        .salary_by_position()
        .await
        .map_err(ApiError::from)
        .map(|averages| ApiSuccess::new(StatusCode::OK, averages))
}
