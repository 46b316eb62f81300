// dispatch/dispatcher.rs
use crate::context::{ContextResult, ContextValue};
use crate::dispatch::{DataView, ErrorLog};
use crate::errors::{ServerError, ViewError};
use crate::i18n::Text;
use crate::request::ViewRequest;
use crate::responses::{
    add_never_cache_headers, export_filename, json_body_response, xlsx_response, ResultResp,
};
use crate::spreadsheets::{SpreadsheetWriter, TableData, TagStripper};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;

pub const DEFAULT_EXPORT_TITLE: &str = "Sheet";
const EXPORT_PARAM: &str = "export";
const EXPORT_EXCEL: &str = "excel";

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Turns a table view into either a JSON data response or a spreadsheet export.
pub struct Dispatcher {
    writer: Box<dyn SpreadsheetWriter>,
    log: Arc<dyn ErrorLog>,
    clock: fn() -> NaiveDateTime,
}

impl Dispatcher {
    pub fn new(writer: Box<dyn SpreadsheetWriter>, log: Arc<dyn ErrorLog>) -> Self {
        Self {
            writer,
            log,
            clock: local_now,
        }
    }

    /// Overrides the time used in export filenames.
    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// `?export=excel` returns the spreadsheet as is. Every other request gets
    /// the JSON data response with never-cache headers.
    ///
    /// Errors from the view's own callbacks propagate to the caller.
    pub fn handle<V: DataView + ?Sized>(&self, view: &V, req: &ViewRequest) -> ResultResp {
        if req.query(EXPORT_PARAM) == Some(EXPORT_EXCEL) {
            return self.excel_response(view, req);
        }

        let context = view.get_context_data(req)?;
        let mut resp = self.data_response(context, req)?;
        add_never_cache_headers(&mut resp);
        Ok(resp)
    }

    /// Build the export. Failures propagate to the caller untouched.
    pub fn excel_response<V: DataView + ?Sized>(&self, view: &V, req: &ViewRequest) -> ResultResp {
        let stripper = TagStripper::new()?;
        let headers = view.get_column_titles().iter().map(Text::resolve).collect();
        let rows = view
            .get_data(req)?
            .iter()
            .map(|row| row.iter().map(|cell| stripper.strip(&cell.to_string())).collect())
            .collect::<Vec<Vec<String>>>();
        let title = view.title().unwrap_or(DEFAULT_EXPORT_TITLE).to_string();

        let table = TableData {
            title,
            headers,
            rows,
        };
        let buffer = self.writer.write(&table)?;

        let filename = export_filename(&table.title, (self.clock)());
        tracing::info!(
            path = %req.path(),
            rows = table.rows.len(),
            bytes = buffer.len(),
            "exporting {filename}"
        );

        xlsx_response(buffer, &filename)
    }

    /// Encode the view's context, or an error payload if it is not a mapping
    /// or cannot be encoded.
    pub fn data_response(&self, context: ContextValue, req: &ViewRequest) -> ResultResp {
        let encoded = ContextResult::try_from(context).and_then(|result| {
            tracing::debug!(path = %req.path(), status = ?result.status(), "encoding context");
            serde_json::to_vec(&result).map_err(ViewError::from)
        });

        let body = match encoded {
            Ok(body) => body,
            Err(err) => {
                self.log.view_error(req.path(), &err);
                let payload = ContextResult::error(err.to_string());
                serde_json::to_vec(&payload).map_err(|_| ServerError::InternalError)?
            }
        };

        json_body_response(body)
    }
}
