// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use chrono::NaiveDateTime;

pub const EXCEL_CONTENT_TYPE: &str = "application/vnd.ms-excel";

/// `{title}-{YYYY-MM-DD HHMM}.xlsx`
pub fn export_filename(title: &str, at: NaiveDateTime) -> String {
    format!("{title}-{}.xlsx", at.format("%Y-%m-%d %H%M"))
}

/// Return XLSX file as HTTP attachment
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", EXCEL_CONTENT_TYPE)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)?; // Convert any builder error

    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn filename_uses_hours_and_minutes() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 59)
            .unwrap();
        assert_eq!(export_filename("Report", at), "Report-2024-03-09 0705.xlsx");
    }

    #[test]
    fn attachment_headers() {
        let resp = xlsx_response(vec![1, 2, 3], "Sheet-2024-03-09 0705.xlsx").unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], EXCEL_CONTENT_TYPE);
        assert_eq!(
            resp.headers()["Content-Disposition"],
            "attachment; filename=\"Sheet-2024-03-09 0705.xlsx\""
        );
    }
}
