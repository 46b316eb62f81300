pub mod result;
pub mod value;

pub use result::ContextResult;
pub use value::{ContextMap, ContextValue};
