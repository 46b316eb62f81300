use crate::dispatch::{Dispatcher, TracingLog};
use crate::router::App;
use crate::spreadsheets::writer_for;
use crate::views::ReportView;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::Arc;

/// App wired the same way `main` wires it, with the sample report view.
pub fn init_test_app() -> App {
    let writer = writer_for("xlsx").unwrap_or_else(|e| panic!("Writer setup failed: {e}"));
    App {
        dispatcher: Dispatcher::new(writer, Arc::new(TracingLog)),
        reports: ReportView::sample(),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
