// i18n.rs
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Translatable text whose value is produced only when it is rendered.
///
/// The resolver is called every time the text is displayed or serialized,
/// so the active language at render time wins.
#[derive(Clone)]
pub struct LazyText {
    msgid: &'static str,
    resolve: Arc<dyn Fn(&'static str) -> String + Send + Sync>,
}

impl LazyText {
    pub fn new<F>(msgid: &'static str, resolve: F) -> Self
    where
        F: Fn(&'static str) -> String + Send + Sync + 'static,
    {
        Self {
            msgid,
            resolve: Arc::new(resolve),
        }
    }

    /// Lazy text with no catalog behind it; resolves to its own msgid.
    pub fn untranslated(msgid: &'static str) -> Self {
        Self::new(msgid, |id| id.to_string())
    }

    pub fn resolve(&self) -> String {
        (self.resolve)(self.msgid)
    }
}

impl fmt::Debug for LazyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LazyText").field(&self.msgid).finish()
    }
}

impl fmt::Display for LazyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl PartialEq for LazyText {
    fn eq(&self, other: &Self) -> bool {
        self.msgid == other.msgid
    }
}

impl Serialize for LazyText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.resolve())
    }
}

/// Either plain text or deferred translatable text.
#[derive(Debug, Clone, PartialEq)]
pub enum Text {
    Plain(String),
    Lazy(LazyText),
}

impl Text {
    pub fn resolve(&self) -> String {
        match self {
            Text::Plain(s) => s.clone(),
            Text::Lazy(lazy) => lazy.resolve(),
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::Plain(s) => f.write_str(s),
            Text::Lazy(lazy) => fmt::Display::fmt(lazy, f),
        }
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Text::Plain(s) => serializer.serialize_str(s),
            Text::Lazy(lazy) => lazy.serialize(serializer),
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::Plain(s.to_string())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::Plain(s)
    }
}

impl From<LazyText> for Text {
    fn from(lazy: LazyText) -> Self {
        Text::Lazy(lazy)
    }
}
