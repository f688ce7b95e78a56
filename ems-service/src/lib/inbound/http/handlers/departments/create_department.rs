use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::DepartmentData;
use super::DepartmentRequestBody;
use crate::domain::department::ports::DepartmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_department(
    State(state): State<AppState>,
    Json(body): Json<DepartmentRequestBody>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    state
        .department_service
        .create_department(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::new(StatusCode::CREATED, department.into()))
}
