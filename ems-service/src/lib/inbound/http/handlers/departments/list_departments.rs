use axum::extract::State;
use axum::http::StatusCode;

use super::DepartmentData;
use crate::domain::department::ports::DepartmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DepartmentData>>, ApiError> {
    state
        .department_service
        .list_departments()
        .await
        .map_err(ApiError::from)
        .map(|departments| {
            ApiSuccess::new(
                StatusCode::OK,
                departments.iter().map(DepartmentData::from).collect(),
            )
        })
}
