pub mod dispatcher;
pub mod log;

pub use dispatcher::Dispatcher;
pub use log::{ErrorLog, TracingLog};

use crate::context::ContextValue;
use crate::errors::ViewError;
use crate::i18n::Text;
use crate::request::ViewRequest;

/// A view that backs an AJAX data table and can export it to a spreadsheet.
pub trait DataView {
    /// Context for the JSON response. Must be a mapping.
    fn get_context_data(&self, req: &ViewRequest) -> Result<ContextValue, ViewError>;

    /// Header row of the export, written verbatim.
    fn get_column_titles(&self) -> Vec<Text>;

    /// Export rows. Cells are written as text with markup removed.
    fn get_data(&self, req: &ViewRequest) -> Result<Vec<Vec<ContextValue>>, ViewError>;

    /// Sheet name and filename prefix of the export.
    fn title(&self) -> Option<&str> {
        None
    }
}
