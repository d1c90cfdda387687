//! HTTP rendering of domain errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::{DomainError, ErrorCode, ErrorDetail, ErrorResponse, Locale};

/// A domain error resolved to a status and a localized message
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
    /// Internal description, logged but never sent
    detail: String,
}

impl ApiError {
    pub fn localized<E: DomainError>(err: &E, locale: Locale) -> Self {
        let code = err.code();
        Self {
            status: status_for(code),
            code,
            message: err.user_message(locale).to_string(),
            detail: err.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// Upstream failures surface as 502: the dashboard itself did nothing wrong.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyExists => StatusCode::CONFLICT,
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Serialization | ErrorCode::Unknown => StatusCode::BAD_GATEWAY,
    }
}

/// Convert a use-case result into one a handler can return with `?`
pub trait Localize<T> {
    fn localize(self, locale: Locale) -> Result<T, ApiError>;
}

impl<T, E: DomainError> Localize<T> for Result<T, E> {
    fn localize(self, locale: Locale) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::localized(&e, locale))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = %self.code, detail = %self.detail, "Upstream error");
        } else {
            warn!(code = %self.code, detail = %self.detail, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        });
        (self.status, body).into_response()
    }
}
