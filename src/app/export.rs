//! Spreadsheet export of the deposit report.
//!
//! Produces RFC 4180 CSV with CRLF line endings and a UTF-8 byte order mark
//! so spreadsheet tools pick the right encoding for accented usernames.
//! Cells that a spreadsheet would evaluate as a formula are prefixed with `'`.

use std::borrow::Cow;

use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};

use crate::domain::{DepositError, DepositRow, ReportedDeposit};

const BOM: &str = "\u{feff}";

/// Leading characters that make Excel and LibreOffice treat a cell as a formula
const FORMULA_TRIGGERS: [char; 6] = ['=', '+', '-', '@', '\t', '\r'];

/// Content type of the generated file
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// File name for a report generated on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("deposits-report-{}.csv", date.format("%Y-%m-%d"))
}

/// A lone trigger character, such as the `-` placeholder, is plain text
fn neutralize_formula(cell: &str) -> Cow<'_, str> {
    if cell.len() > 1 && cell.starts_with(FORMULA_TRIGGERS) {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

fn write_failed(err: impl std::fmt::Display) -> DepositError {
    DepositError::Unknown(format!("Failed to write spreadsheet: {err}"))
}

/// A generated deposit report ready to be written or downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositSpreadsheet {
    filename: String,
    contents: String,
    rows: usize,
}

impl DepositSpreadsheet {
    pub fn build(deposits: &[ReportedDeposit], date: NaiveDate) -> Result<Self, DepositError> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(BOM.as_bytes().to_vec());

        writer
            .write_record(DepositRow::HEADERS)
            .map_err(write_failed)?;
        for deposit in deposits {
            let row = deposit.display_row();
            let cells = row.cells().map(neutralize_formula);
            writer
                .write_record(cells.iter().map(|c| c.as_bytes()))
                .map_err(write_failed)?;
        }

        let bytes = writer.into_inner().map_err(|e| write_failed(e.error()))?;
        let contents = String::from_utf8(bytes).map_err(write_failed)?;

        Ok(Self {
            filename: export_filename(date),
            contents,
            rows: deposits.len(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of data rows, excluding the header
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.contents.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_deposit_payload;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_filename_embeds_date() {
        assert_eq!(export_filename(date()), "deposits-report-2026-10-16.csv");
    }

    fn sheet_lines(sheet: &DepositSpreadsheet) -> Vec<String> {
        sheet
            .contents()
            .strip_prefix(BOM)
            .unwrap()
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_neutralize_formula() {
        assert_eq!(neutralize_formula("plain"), "plain");
        assert_eq!(neutralize_formula("=1+1"), "'=1+1");
        assert_eq!(neutralize_formula("+5511999990000"), "'+5511999990000");
        assert_eq!(neutralize_formula("-2"), "'-2");
        assert_eq!(neutralize_formula("@SUM(A1)"), "'@SUM(A1)");
        assert_eq!(neutralize_formula("\tx"), "'\tx");
        assert_eq!(neutralize_formula("-"), "-");
        assert_eq!(neutralize_formula(""), "");
    }

    #[test]
    fn test_build_quotes_special_characters() {
        let mut payload = sample_deposit_payload("tx_1");
        payload.username = "silva, \"ze\"".to_string();
        payload.coupon = Some("two\nlines".to_string());
        let sheet =
            DepositSpreadsheet::build(&[ReportedDeposit::from(payload)], date()).unwrap();

        let contents = sheet.contents();
        assert!(contents.contains(",\"silva, \"\"ze\"\"\","));
        assert!(contents.contains(",\"two\nlines\","));
    }

    #[test]
    fn test_build_neutralizes_formula_cells() {
        let mut payload = sample_deposit_payload("tx_1");
        payload.username = "=HYPERLINK(\"http://evil\",\"x\")".to_string();
        let sheet =
            DepositSpreadsheet::build(&[ReportedDeposit::from(payload)], date()).unwrap();

        let lines = sheet_lines(&sheet);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with(
            "tx_1,14/03/2026 15:09,\"'=HYPERLINK(\"\"http://evil\"\",\"\"x\"\")\",'+5511999990000,"
        ));
        assert!(!lines[1].contains(",=HYPERLINK"));
        assert!(!lines[1].contains(",+5511"));
    }

    #[test]
    fn test_build_writes_header_and_rows() {
        let deposits = vec![
            ReportedDeposit::from(sample_deposit_payload("tx_1")),
            ReportedDeposit::from(sample_deposit_payload("tx_2")),
        ];
        let sheet = DepositSpreadsheet::build(&deposits, date()).unwrap();

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.filename(), "deposits-report-2026-10-16.csv");

        let lines = sheet_lines(&sheet);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Transaction ID,Date,Username"));
        assert!(lines[1].starts_with("tx_1,14/03/2026 15:09,satoshi"));
        assert!(lines[1].contains(",1250.75,"));
        assert!(lines[1].contains(",PAID,"));
    }

    #[test]
    fn test_build_empty_report_has_only_header() {
        let sheet = DepositSpreadsheet::build(&[], date()).unwrap();
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.contents().matches("\r\n").count(), 1);
    }
}
