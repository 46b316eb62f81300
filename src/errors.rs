// errors.rs
use astra::Response;
use std::fmt;

/// Errors that reach the router: missing routes, export failures,
/// and view failures that are not turned into a JSON error payload.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    XlsxError(String),
    ViewFailed(String),
    Interrupted,
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::ViewFailed(msg) => write!(f, "View Error: {msg}"),
            ServerError::Interrupted => write!(f, "Interrupted"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<ViewError> for ServerError {
    fn from(err: ViewError) -> Self {
        match err {
            ViewError::Interrupted => ServerError::Interrupted,
            other => ServerError::ViewFailed(other.to_string()),
        }
    }
}

/// Label prepended to errors that carry no user-facing message of their own.
pub const INTERNAL_ERROR_LABEL: &str = "Internal error";

/// Failures raised by a table view while it produces context or rows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// User-facing message, shown verbatim in the error payload.
    Message(String),
    /// The context callback returned something other than a mapping.
    NotAMapping(&'static str),
    Internal(String),
    /// Operator interrupt. Never converted into an error payload.
    Interrupted,
}

impl ViewError {
    pub fn internal(err: impl fmt::Display) -> Self {
        ViewError::Internal(err.to_string())
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Message(msg) => write!(f, "{msg}"),
            ViewError::NotAMapping(kind) => write!(
                f,
                "{INTERNAL_ERROR_LABEL}: context data must be a mapping, got {kind}"
            ),
            ViewError::Internal(msg) => write!(f, "{INTERNAL_ERROR_LABEL}: {msg}"),
            ViewError::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::internal(err)
    }
}

/// Startup-time configuration problems. The server refuses to start on any of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidAddr(String),
    InvalidWorkers(String),
    UnknownSpreadsheetBackend(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAddr(v) => write!(f, "invalid listen address: {v}"),
            ConfigError::InvalidWorkers(v) => write!(f, "invalid worker count: {v}"),
            ConfigError::UnknownSpreadsheetBackend(v) => {
                write!(f, "no spreadsheet writer available for backend '{v}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_message_is_shown_verbatim() {
        let err = ViewError::Message("Pick a date range first".into());
        assert_eq!(err.to_string(), "Pick a date range first");
    }

    #[test]
    fn internal_errors_get_the_label() {
        let err = ViewError::internal("division by zero");
        assert_eq!(err.to_string(), "Internal error: division by zero");

        let err = ViewError::NotAMapping("list");
        assert_eq!(
            err.to_string(),
            "Internal error: context data must be a mapping, got list"
        );
    }

    #[test]
    fn interrupt_maps_to_interrupted_server_error() {
        match ServerError::from(ViewError::Interrupted) {
            ServerError::Interrupted => {}
            other => panic!("expected Interrupted, got: {:?}", other),
        }
        match ServerError::from(ViewError::Message("boom".into())) {
            ServerError::ViewFailed(msg) => assert_eq!(msg, "boom"),
            other => panic!("expected ViewFailed, got: {:?}", other),
        }
    }
}
