use crate::router::handle;
use crate::tests::utils::{get, init_test_app, read_body};
use serde_json::Value;

#[test]
fn reports_json_defaults_result_to_ok() {
    let app = init_test_app();

    let resp = handle(get("/reports"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let body: Value = serde_json::from_slice(&read_body(resp)).unwrap();
    assert_eq!(body["result"], "ok");
    assert_eq!(body["iTotalRecords"], 3);
    assert_eq!(body["aaData"].as_array().map(Vec::len), Some(3));
}

#[test]
fn reports_json_is_never_cached() {
    let app = init_test_app();

    let resp = handle(get("/reports?owner=finance"), &app).expect("Handler failed");
    let headers = resp.headers();

    let cache_control = headers["Cache-Control"].to_str().unwrap();
    for directive in ["no-cache", "no-store", "must-revalidate"] {
        assert!(cache_control.contains(directive), "missing {directive}");
    }
    assert_eq!(headers["Pragma"], "no-cache");
    assert!(headers.contains_key("Expires"));

    let body: Value = serde_json::from_slice(&read_body(resp)).unwrap();
    assert_eq!(body["iTotalDisplayRecords"], 2);
}

#[test]
fn markup_is_kept_in_json_rows() {
    let app = init_test_app();

    let resp = handle(get("/reports?owner=people"), &app).expect("Handler failed");
    let body: Value = serde_json::from_slice(&read_body(resp)).unwrap();

    assert_eq!(body["aaData"][0][0], "<a href=\"/reports/3\">Headcount</a>");
}
