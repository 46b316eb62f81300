// responses/errors.rs
use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => html_error_response(404, "Not Found"),
        ServerError::XlsxError(msg) => {
            html_error_response(500, &format!("Spreadsheet Error: {msg}"))
        }
        ServerError::ViewFailed(msg) => html_error_response(500, &msg),
        ServerError::Interrupted => html_error_response(503, "Request interrupted"),
        ServerError::InternalError => html_error_response(500, "Internal Server Error"),
    }
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn not_found_page() {
        let mut resp = error_to_response(ServerError::NotFound);
        assert_eq!(resp.status(), 404);

        let mut body = String::new();
        resp.body_mut().reader().read_to_string(&mut body).unwrap();
        assert!(body.contains("Error 404"));
    }

    #[test]
    fn messages_are_escaped() {
        let mut resp = error_to_response(ServerError::ViewFailed("<script>".into()));
        assert_eq!(resp.status(), 500);

        let mut body = String::new();
        resp.body_mut().reader().read_to_string(&mut body).unwrap();
        assert!(body.contains("&lt;script&gt;"));
    }
}
