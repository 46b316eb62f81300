// request.rs
use astra::Request;
use std::collections::HashMap;

/// The parts of an inbound request a table view gets to see.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    method: String,
    path: String,
    query: HashMap<String, String>,
}

impl ViewRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: HashMap::new(),
        }
    }

    pub fn from_astra(req: &Request) -> Self {
        let mut view_req = Self::new(req.method().as_str(), req.uri().path());
        if let Some(q) = req.uri().query() {
            view_req.query = parse_query(q);
        }
        view_req
    }

    #[cfg(test)]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameter lookup. For repeated keys the last value wins.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

fn parse_query(q: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(q.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
