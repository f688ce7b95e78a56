use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::DepartmentData;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::ports::DepartmentServicePort;
use crate::inbound::http::handlers::parse_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    let department_id = DepartmentId(parse_id(&department_id)?);

    state
        .department_service
        .get_department(department_id)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::new(StatusCode::OK, department.into()))
}
