//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`SurveyError`]
//! via `From`. Adapters box their storage errors into
//! [`SurveyError::Storage`] so this crate stays free of IO dependencies.

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SurveyError {
    /// Render the error and every source in its chain as a single line,
    /// e.g. `storage error: database error: UNIQUE constraint failed`.
    #[must_use]
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            out.push_str(": ");
            out.push_str(&err.to_string());
            source = err.source();
        }
        out
    }
}

/// A field failed its declared bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
        value: u8,
    },

    #[error("{field} must be between {min} and {max} characters long, got {len}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        len: usize,
    },

    #[error("{field} must be one of {allowed:?}, got {value:?}")]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
        value: String,
    },

    #[error("invalid identifier {0:?}")]
    InvalidId(String),
}

/// No record of the given kind exists with the given id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {id} not found")]
pub struct NotFoundError {
    pub kind: &'static str,
    pub id: String,
}
