// router.rs
use crate::dispatch::Dispatcher;
use crate::errors::{ResultResp, ServerError};
use crate::request::ViewRequest;
use crate::views::ReportView;
use crate::responses::html_response;
use astra::Request;
use maud::{html, DOCTYPE};

/// Everything a request handler needs, shared across worker threads.
pub struct App {
    pub dispatcher: Dispatcher,
    pub reports: ReportView,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let view_req = ViewRequest::from_astra(&req);
    tracing::debug!(method = %view_req.method(), path = %view_req.path(), "request");

    match (view_req.method(), view_req.path()) {
        ("GET", "/") => index_page(),
        ("GET", "/reports") => app.dispatcher.handle(&app.reports, &view_req),
        _ => Err(ServerError::NotFound),
    }
}

fn index_page() -> ResultResp {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Data tables" }
            }
            body {
                h1 { "Data tables" }
                ul {
                    li { a href="/reports" { "Reports (JSON)" } }
                    li { a href="/reports?export=excel" { "Reports (Excel)" } }
                }
            }
        }
    };

    html_response(page)
}
