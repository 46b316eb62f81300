use crate::router::handle;
use crate::tests::utils::{get, init_test_app, read_body};
use crate::errors::ServerError;

#[test]
fn index_page_links_both_modes() {
    let app = init_test_app();

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(read_body(resp)).unwrap();
    assert!(body.contains("/reports?export=excel"));
}

#[test]
fn view_refusal_reaches_the_router() {
    let app = init_test_app();

    match handle(get("/reports?owner=nobody"), &app) {
        Err(ServerError::ViewFailed(msg)) => assert_eq!(msg, "Unknown owner: nobody"),
        other => panic!("expected ViewFailed, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn unknown_route_is_not_found() {
    let app = init_test_app();

    match handle(get("/nope"), &app) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}
