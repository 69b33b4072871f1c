//! Operation outcomes as shown to the user

use std::fmt;

use crate::domain::DomainError;

/// Classification used by the presentation layer to style a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Neutral,
}

/// Human-readable outcome of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// Unclassified message; pass `""` to clear the message area.
    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Neutral,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::neutral("")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Hard failures get an `Error:` prefix; soft ones are shown as is.
impl From<&DomainError> for Status {
    fn from(err: &DomainError) -> Self {
        if err.is_soft() {
            Status::neutral(err.to_string())
        } else {
            Status::error(format!("Error: {}", err))
        }
    }
}

/// Result of a simulator call together with the status it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<T> {
    pub status: Status,
    pub outcome: Result<T, DomainError>,
}

impl<T> Report<T> {
    /// Build a report, deriving the status from the error on failure.
    pub fn new(outcome: Result<T, DomainError>, on_success: impl FnOnce(&T) -> Status) -> Self {
        let status = match &outcome {
            Ok(value) => on_success(value),
            Err(err) => Status::from(err),
        };
        Self { status, outcome }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.outcome.as_ref().err()
    }
}
