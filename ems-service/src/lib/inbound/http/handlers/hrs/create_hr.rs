use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::HrData;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Password;
use crate::domain::hr::errors::HrError;
use crate::domain::hr::models::CreateHrCommand;
use crate::domain::hr::ports::HrServicePort;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_hr(
    State(state): State<AppState>,
    Json(body): Json<CreateHrRequestBody>,
) -> Result<ApiSuccess<HrData>, ApiError> {
    state
        .hr_service
        .create_hr(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref hr| ApiSuccess::new(StatusCode::CREATED, hr.into()))
}

/// HTTP request body for creating an HR member (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreateHrRequestBody {
    name: String,
    email: String,
    password: String,
}

impl CreateHrRequestBody {
    fn try_into_command(self) -> Result<CreateHrCommand, HrError> {
        Ok(CreateHrCommand {
            name: PersonName::new(self.name, "name")?,
            email: EmailAddress::new(self.email)?,
            password: Password::new(self.password).map_err(AccountError::from)?,
        })
    }
}
