pub mod html;
pub mod xlsx_writer;

pub use html::TagStripper;
pub use xlsx_writer::XlsxWriter;

use crate::errors::{ConfigError, ServerError};

/// A fully rendered table, ready to be written out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Serializes a table into a spreadsheet file held in memory.
pub trait SpreadsheetWriter: Send + Sync {
    fn write(&self, table: &TableData) -> Result<Vec<u8>, ServerError>;
}

/// Resolve the configured backend name. Called once at startup.
pub fn writer_for(backend: &str) -> Result<Box<dyn SpreadsheetWriter>, ConfigError> {
    match backend {
        "xlsx" => Ok(Box::new(XlsxWriter)),
        other => Err(ConfigError::UnknownSpreadsheetBackend(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_backend_is_a_config_error() {
        assert!(writer_for("xlsx").is_ok());
        match writer_for("ods") {
            Err(ConfigError::UnknownSpreadsheetBackend(name)) => assert_eq!(name, "ods"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an error for unknown backend"),
        }
    }
}
