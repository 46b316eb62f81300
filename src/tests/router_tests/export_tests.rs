use crate::router::handle;
use crate::tests::utils::{get, init_test_app, read_body};
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use regex::Regex;
use std::io::Cursor;

fn read_sheet(buffer: Vec<u8>, sheet: &str) -> Vec<Vec<String>> {
    let mut book: Xlsx<_> = open_workbook_from_rs(Cursor::new(buffer)).unwrap();
    let range = book.worksheet_range(sheet).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn export_returns_excel_attachment() {
    let app = init_test_app();

    let resp = handle(get("/reports?export=excel"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/vnd.ms-excel");

    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap();
    let pattern = Regex::new(r#"^attachment; filename="Reports-\d{4}-\d{2}-\d{2} \d{4}\.xlsx"$"#)
        .unwrap();
    assert!(pattern.is_match(disposition), "bad disposition: {disposition}");
}

#[test]
fn export_skips_never_cache_headers() {
    let app = init_test_app();

    let resp = handle(get("/reports?export=excel"), &app).expect("Handler failed");
    assert!(!resp.headers().contains_key("Cache-Control"));
    assert!(!resp.headers().contains_key("Pragma"));
    assert!(!resp.headers().contains_key("Expires"));
}

#[test]
fn export_workbook_has_header_and_stripped_rows() {
    let app = init_test_app();

    let resp = handle(get("/reports?export=excel&owner=people"), &app).expect("Handler failed");
    let rows = read_sheet(read_body(resp), "Reports");

    assert_eq!(
        rows,
        vec![
            vec!["Report", "Owner", "Status", "Amount", "Updated"],
            vec!["Headcount", "people", "Published", "42", "2024-06-30"],
        ]
    );
}
