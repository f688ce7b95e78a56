use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::DepartmentData;
use super::DepartmentRequestBody;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::ports::DepartmentServicePort;
use crate::inbound::http::handlers::parse_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
    Json(body): Json<DepartmentRequestBody>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    let department_id = DepartmentId(parse_id(&department_id)?);

    state
        .department_service
        .update_department(department_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::new(StatusCode::OK, department.into()))
}
