// spreadsheets/xlsx_writer.rs
use crate::errors::ServerError;
use crate::spreadsheets::{SpreadsheetWriter, TableData};
use rust_xlsxwriter::Workbook;

fn column_index(col: usize) -> Result<u16, ServerError> {
    u16::try_from(col).map_err(|_| ServerError::XlsxError(format!("Too many columns: {}", col + 1)))
}

/// Writes `.xlsx` workbooks with a single constant-memory worksheet.
///
/// Rows are streamed in order, so the sheet never holds the whole table.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

impl SpreadsheetWriter for XlsxWriter {
    fn write(&self, table: &TableData) -> Result<Vec<u8>, ServerError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet_with_constant_memory();

        worksheet.set_name(&table.title).map_err(|e| {
            ServerError::XlsxError(format!("Invalid sheet name '{}': {}", table.title, e))
        })?;

        // Headers
        for (col, header) in table.headers.iter().enumerate() {
            worksheet
                .write_string(0, column_index(col)?, header)
                .map_err(|e| {
                    ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
                })?;
        }

        // Rows
        for (i, row) in table.rows.iter().enumerate() {
            let r = u32::try_from(i + 1)
                .map_err(|_| ServerError::XlsxError(format!("Too many rows: {}", i + 1)))?;
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string(r, column_index(col)?, cell).map_err(|e| {
                    ServerError::XlsxError(format!("Failed to write row {r}, column {col}: {e}"))
                })?;
            }
        }

        workbook
            .save_to_buffer()
            .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_from_rs, Reader, Xlsx};
    use std::io::Cursor;

    fn read_back(buffer: Vec<u8>, sheet: &str) -> Vec<Vec<String>> {
        let mut book: Xlsx<_> = open_workbook_from_rs(Cursor::new(buffer)).unwrap();
        let range = book.worksheet_range(sheet).unwrap();
        range
            .rows()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn writes_header_then_rows() {
        let table = TableData {
            title: "Report".into(),
            headers: vec!["A".into(), "B".into()],
            rows: vec![vec!["1".into(), "2".into()], vec!["x".into(), "y".into()]],
        };

        let buffer = XlsxWriter.write(&table).unwrap();
        assert_eq!(
            read_back(buffer, "Report"),
            vec![vec!["A", "B"], vec!["1", "2"], vec!["x", "y"]]
        );
    }

    #[test]
    fn column_overflow_is_an_error() {
        assert_eq!(column_index(65_535).unwrap(), 65_535);
        match column_index(65_536) {
            Err(ServerError::XlsxError(msg)) => assert_eq!(msg, "Too many columns: 65537"),
            other => panic!("expected XlsxError, got: {:?}", other),
        }
    }

    #[test]
    fn invalid_sheet_name_is_an_error() {
        let table = TableData {
            title: "Q1/Q2".into(),
            ..TableData::default()
        };

        match XlsxWriter.write(&table) {
            Err(ServerError::XlsxError(msg)) => assert!(msg.contains("Q1/Q2")),
            other => panic!("expected XlsxError, got: {:?}", other.map(|b| b.len())),
        }
    }
}
