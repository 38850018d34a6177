use salvo::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use myticket_core::error::CoreError;
use myticket_schedule::error::ScheduleError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    /// ## Summary
    /// Returns the HTTP status this error is reported with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::ScheduleError(
                ScheduleError::ValidationError(_)
                | ScheduleError::LinkError(_)
                | ScheduleError::CoreError(CoreError::ParseError(_)),
            )
            | Self::CoreError(CoreError::ParseError(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::ScheduleError(ScheduleError::SpanTooLarge { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::ScheduleError(ScheduleError::CoreError(CoreError::InvariantViolation(_)))
            | Self::CoreError(CoreError::InvariantViolation(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Writes `err` to the response as a JSON error body with its status code.
pub fn render_error(res: &mut salvo::Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::warn!(error = %err, status = %status, "Request rejected");
    }
    res.status_code(status);
    res.render(salvo::writing::Json(ErrorResponse {
        error: err.to_string(),
    }));
}
