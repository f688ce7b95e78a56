use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::attendance::errors::AttendanceError;
use crate::domain::department::errors::DepartmentError;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::hr::errors::HrError;
use crate::domain::leave::errors::LeaveError;
use crate::domain::recruitment::errors::RecruitmentError;

pub mod admins;
pub mod attendance;
pub mod authentication;
pub mod departments;
pub mod employees;
pub mod health;
pub mod hrs;
pub mod leaves;
pub mod recruitments;

/// Message returned for every failed token check, whatever the cause.
pub const UNAUTHENTICATED: &str = "Unauthenticated";
pub const FORBIDDEN: &str = "Forbidden";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        Self::Unauthorized(UNAUTHENTICATED.to_string())
    }

    pub fn forbidden() -> Self {
        Self::Forbidden(FORBIDDEN.to_string())
    }

    /// Log the cause and hide it from the client.
    fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "Request failed");
        Self::InternalServerError("Internal server error".to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AccountError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AccountError::InvalidUsername(_) | AccountError::InvalidPassword(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AccountError::PasswordHashing(_)
            | AccountError::TokenGeneration(_)
            | AccountError::DatabaseError(_)
            | AccountError::Unknown(_) => ApiError::internal(err),
        }
    }
}

impl From<DepartmentError> for ApiError {
    fn from(err: DepartmentError) -> Self {
        match err {
            DepartmentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DepartmentError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            DepartmentError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::InvalidName(_)
            | EmployeeError::InvalidEmail(_)
            | EmployeeError::UnknownDepartment(_) => ApiError::UnprocessableEntity(err.to_string()),
            EmployeeError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<HrError> for ApiError {
    fn from(err: HrError) -> Self {
        match err {
            HrError::NotFound(_) => ApiError::NotFound(err.to_string()),
            HrError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            HrError::InvalidName(_) | HrError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            HrError::Account(inner) => ApiError::from(inner),
            HrError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<LeaveError> for ApiError {
    fn from(err: LeaveError) -> Self {
        match err {
            LeaveError::NotFound(_) => ApiError::NotFound(err.to_string()),
            LeaveError::AlreadyDecided { .. } => ApiError::Conflict(err.to_string()),
            LeaveError::InvalidRequest(_)
            | LeaveError::InvalidStatus(_)
            | LeaveError::UnknownEmployee(_) => ApiError::UnprocessableEntity(err.to_string()),
            LeaveError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<AttendanceError> for ApiError {
    fn from(err: AttendanceError) -> Self {
        match err {
            AttendanceError::EmployeeNotFound(_) => ApiError::NotFound(err.to_string()),
            AttendanceError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<RecruitmentError> for ApiError {
    fn from(err: RecruitmentError) -> Self {
        match err {
            RecruitmentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            RecruitmentError::InvalidName(_)
            | RecruitmentError::InvalidEmail(_)
            | RecruitmentError::InvalidStatus(_) => ApiError::UnprocessableEntity(err.to_string()),
            RecruitmentError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

/// Parse a numeric path id, answering 400 in the usual envelope.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid id: {}", raw)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
