use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::HrData;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Password;
use crate::domain::hr::errors::HrError;
use crate::domain::hr::models::HrId;
use crate::domain::hr::models::UpdateHrCommand;
use crate::domain::hr::ports::HrServicePort;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;
use crate::inbound::http::handlers::parse_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_hr(
    State(state): State<AppState>,
    Path(hr_id): Path<String>,
    Json(body): Json<UpdateHrRequestBody>,
) -> Result<ApiSuccess<HrData>, ApiError> {
    let hr_id = HrId(parse_id(&hr_id)?);

    state
        .hr_service
        .update_hr(hr_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref hr| ApiSuccess::new(StatusCode::OK, hr.into()))
}

/// Partial update; omitted fields keep their value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateHrRequestBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl UpdateHrRequestBody {
    fn try_into_command(self) -> Result<UpdateHrCommand, HrError> {
        Ok(UpdateHrCommand {
            name: self
                .name
                .map(|name| PersonName::new(name, "name"))
                .transpose()?,
            email: self.email.map(EmailAddress::new).transpose()?,
            password: self
                .password
                .map(Password::new)
                .transpose()
                .map_err(AccountError::from)?,
        })
    }
}
