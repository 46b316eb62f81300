// responses/cache.rs
use astra::Response;
use http::header::{HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use chrono::{DateTime, Utc};

pub const NEVER_CACHE_CONTROL: &str = "max-age=0, no-cache, no-store, must-revalidate, private";

fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Mark a response as never cacheable by browsers or proxies.
///
/// An `Expires` header already present is left alone.
pub fn add_never_cache_headers(resp: &mut Response) {
    let headers = resp.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NEVER_CACHE_CONTROL));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    if !headers.contains_key(EXPIRES) {
        if let Ok(value) = HeaderValue::from_str(&http_date(Utc::now())) {
            headers.insert(EXPIRES, value);
        }
    }
}
