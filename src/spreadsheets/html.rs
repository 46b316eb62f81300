// spreadsheets/html.rs
use crate::errors::ServerError;
use regex::Regex;

// Comments, doctypes/declarations, and start or end tags with a name.
const TAG_PATTERN: &str = r"(?s)<!--.*?-->|<![^<>]*>|</?[A-Za-z][^<>]*>";

/// Removes complete markup tags from cell values.
///
/// Only well-formed tags are removed. Character references and a `<`
/// that does not open a tag are left as they are.
pub struct TagStripper {
    tags: Regex,
}

impl TagStripper {
    pub fn new() -> Result<Self, ServerError> {
        let tags = Regex::new(TAG_PATTERN)
            .map_err(|e| ServerError::XlsxError(format!("Regex error: {}", e)))?;
        Ok(Self { tags })
    }

    /// `"<b>x</b>"` becomes `"x"`.
    pub fn strip(&self, value: &str) -> String {
        let mut current = value.to_string();
        // Removing one tag can expose another, e.g. "<<b>i>".
        while current.contains('<') {
            let next = self.tags.replace_all(&current, "").into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}
