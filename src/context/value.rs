// context/value.rs
use crate::i18n::{LazyText, Text};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// A single value in a view's context data or in an exported table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Text),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    DateTimeTz(DateTime<FixedOffset>),
    List(Vec<ContextValue>),
    Map(ContextMap),
}

impl ContextValue {
    /// Short type name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ContextValue::Null => "null",
            ContextValue::Bool(_) => "bool",
            ContextValue::Int(_) => "int",
            ContextValue::Float(_) => "float",
            ContextValue::Text(_) => "text",
            ContextValue::Date(_) => "date",
            ContextValue::DateTime(_) | ContextValue::DateTimeTz(_) => "datetime",
            ContextValue::List(_) => "list",
            ContextValue::Map(_) => "map",
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            ContextValue::Text(t) => Some(t.resolve()),
            _ => None,
        }
    }
}

/// ISO-8601 with sub-second precision cut to milliseconds, the way
/// browser-side `Date` parsing expects it.
fn encode_naive_datetime(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() / 1_000 == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }
}

fn encode_datetime(dt: &DateTime<FixedOffset>) -> String {
    let local = encode_naive_datetime(&dt.naive_local());
    let offset = dt.format("%:z").to_string();
    if offset == "+00:00" {
        format!("{local}Z")
    } else {
        format!("{local}{offset}")
    }
}

impl Serialize for ContextValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContextValue::Null => serializer.serialize_unit(),
            ContextValue::Bool(b) => serializer.serialize_bool(*b),
            ContextValue::Int(i) => serializer.serialize_i64(*i),
            ContextValue::Float(f) => serializer.serialize_f64(*f),
            ContextValue::Text(t) => t.serialize(serializer),
            ContextValue::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            ContextValue::DateTime(dt) => serializer.serialize_str(&encode_naive_datetime(dt)),
            ContextValue::DateTimeTz(dt) => serializer.serialize_str(&encode_datetime(dt)),
            ContextValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ContextValue::Map(map) => map.serialize(serializer),
        }
    }
}

/// String form of a value, as written into an exported cell.
impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Null => Ok(()),
            ContextValue::Bool(true) => f.write_str("True"),
            ContextValue::Bool(false) => f.write_str("False"),
            ContextValue::Int(i) => write!(f, "{i}"),
            ContextValue::Float(x) => write!(f, "{x}"),
            ContextValue::Text(t) => write!(f, "{t}"),
            ContextValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            ContextValue::DateTime(dt) => f.write_str(&encode_naive_datetime(dt)),
            ContextValue::DateTimeTz(dt) => f.write_str(&encode_datetime(dt)),
            ContextValue::List(_) | ContextValue::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Insertion-ordered string-keyed map of context values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMap {
    entries: Vec<(String, ContextValue)>,
}

impl ContextMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for ContextMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<ContextValue>> FromIterator<(K, V)> for ContextMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ContextMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl From<bool> for ContextValue {
    fn from(v: bool) -> Self {
        ContextValue::Bool(v)
    }
}

impl From<i64> for ContextValue {
    fn from(v: i64) -> Self {
        ContextValue::Int(v)
    }
}

impl From<i32> for ContextValue {
    fn from(v: i32) -> Self {
        ContextValue::Int(v as i64)
    }
}

impl From<u32> for ContextValue {
    fn from(v: u32) -> Self {
        ContextValue::Int(v as i64)
    }
}

impl From<usize> for ContextValue {
    fn from(v: usize) -> Self {
        ContextValue::Int(v as i64)
    }
}

impl From<f64> for ContextValue {
    fn from(v: f64) -> Self {
        ContextValue::Float(v)
    }
}

impl From<&str> for ContextValue {
    fn from(v: &str) -> Self {
        ContextValue::Text(Text::from(v))
    }
}

impl From<String> for ContextValue {
    fn from(v: String) -> Self {
        ContextValue::Text(Text::from(v))
    }
}

impl From<Text> for ContextValue {
    fn from(v: Text) -> Self {
        ContextValue::Text(v)
    }
}

impl From<LazyText> for ContextValue {
    fn from(v: LazyText) -> Self {
        ContextValue::Text(Text::Lazy(v))
    }
}

impl From<NaiveDate> for ContextValue {
    fn from(v: NaiveDate) -> Self {
        ContextValue::Date(v)
    }
}

impl From<NaiveDateTime> for ContextValue {
    fn from(v: NaiveDateTime) -> Self {
        ContextValue::DateTime(v)
    }
}

impl From<DateTime<FixedOffset>> for ContextValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        ContextValue::DateTimeTz(v)
    }
}

impl From<ContextMap> for ContextValue {
    fn from(v: ContextMap) -> Self {
        ContextValue::Map(v)
    }
}

impl<T: Into<ContextValue>> From<Vec<T>> for ContextValue {
    fn from(v: Vec<T>) -> Self {
        ContextValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ContextValue>> From<Option<T>> for ContextValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ContextValue::Null)
    }
}

impl From<serde_json::Value> for ContextValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => ContextValue::Null,
            Value::Bool(b) => ContextValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ContextValue::Int(i),
                None => ContextValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ContextValue::from(s),
            Value::Array(items) => {
                ContextValue::List(items.into_iter().map(ContextValue::from).collect())
            }
            Value::Object(obj) => ContextValue::Map(obj.into_iter().collect()),
        }
    }
}
