use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::hr::models::HrId;
use crate::domain::hr::ports::HrServicePort;
use crate::inbound::http::handlers::parse_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_hr(
    State(state): State<AppState>,
    Path(hr_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let hr_id = HrId(parse_id(&hr_id)?);

    state
        .hr_service
        .delete_hr(hr_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
