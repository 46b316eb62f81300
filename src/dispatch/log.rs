// dispatch/log.rs
use crate::errors::ViewError;

/// Where the dispatcher reports view failures it turns into error payloads.
pub trait ErrorLog: Send + Sync {
    fn view_error(&self, path: &str, err: &ViewError);
}

/// Reports through `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ErrorLog for TracingLog {
    fn view_error(&self, path: &str, err: &ViewError) {
        tracing::error!(path = %path, error = ?err, "JSON view error: {path}");
    }
}
