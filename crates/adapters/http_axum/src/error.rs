//! HTTP error response mapping.

use std::fmt::Display;

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use surveyhub_domain::error::SurveyError;

/// Generic message carried by every error body.
pub const ERROR_MESSAGE: &str = "An error occurred!";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    msg: &'static str,
    detail: String,
    path: String,
}

/// An HTTP failure: status code, cause, and the request path it concerns.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
    path: String,
}

impl ApiError {
    /// Failure of a read-only operation.
    ///
    /// Storage failures are logged and hidden behind a 500.
    #[must_use]
    pub fn read(err: SurveyError, uri: &Uri) -> Self {
        let (status, detail) = match err {
            SurveyError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SurveyError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            err @ SurveyError::Storage(_) => {
                tracing::error!(error = %err.chain(), path = %uri, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        Self::new(status, detail, uri)
    }

    /// Failure of a create, update or delete.
    ///
    /// The transaction has been rolled back; storage failures are reported
    /// as bad input with the full cause chain as detail.
    #[must_use]
    pub fn write(err: SurveyError, uri: &Uri) -> Self {
        match err {
            err @ SurveyError::Storage(_) => {
                let detail = err.chain();
                tracing::warn!(error = %detail, path = %uri, "write rolled back");
                Self::new(StatusCode::BAD_REQUEST, detail, uri)
            }
            other => Self::read(other, uri),
        }
    }

    /// A request whose body, path or query could not be extracted.
    #[must_use]
    pub fn rejected(rejection: impl Display, uri: &Uri) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.to_string(), uri)
    }

    fn new(status: StatusCode, detail: String, uri: &Uri) -> Self {
        Self {
            status,
            detail,
            path: uri.to_string(),
        }
    }

    /// The status code this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            msg: ERROR_MESSAGE,
            detail: self.detail,
            path: self.path,
        };
        (self.status, Json(body)).into_response()
    }
}
