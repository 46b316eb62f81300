pub mod cache;
pub mod errors;
pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use cache::add_never_cache_headers;
pub use errors::error_to_response;
pub use html::html_response;
pub use json::json_body_response;
pub use xlsx::{export_filename, xlsx_response};
