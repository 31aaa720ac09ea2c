//! CSV journal import
//!
//! Reads journal lines from a CSV file in the fixed layout
//! `account_code, description, debit, credit`, collecting per-row errors
//! instead of aborting on the first bad row. The accepted rows are then
//! assembled into a single journal entry, which must pass the usual
//! balance check before it can be posted.

use chrono::NaiveDate;
use csv::{Reader, StringRecord};

use crate::error::{TallyError, TallyResult};
use crate::models::{ChartOfAccounts, JournalEntry, JournalLine, Money};

/// Expected number of CSV columns: code, description, debit, credit
const COLUMNS: usize = 4;

/// A row that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 0-indexed row number in the file (header excluded)
    pub row: usize,
    /// What went wrong
    pub message: String,
}

/// Outcome of parsing a CSV file
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Successfully parsed lines, in file order
    pub lines: Vec<JournalLine>,
    /// Rows that were rejected
    pub errors: Vec<RowError>,
}

impl ImportSummary {
    /// Whether every row parsed cleanly
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Service for importing journal lines from CSV
pub struct ImportService<'a> {
    chart: &'a ChartOfAccounts,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(chart: &'a ChartOfAccounts) -> Self {
        Self { chart }
    }

    /// Parse CSV data into journal lines, collecting row-level errors
    pub fn parse_reader<R: std::io::Read>(&self, reader: &mut Reader<R>) -> TallyResult<ImportSummary> {
        let mut lines = Vec::new();
        let mut errors = Vec::new();
        let mut row = 0usize;

        for (idx, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    errors.push(RowError {
                        row,
                        message: format!("Unreadable CSV record: {}", e),
                    });
                    row += 1;
                    continue;
                }
            };

            if idx == 0 && looks_like_header(&record, self.chart) {
                continue;
            }

            match self.parse_record(&record) {
                Ok(line) => lines.push(line),
                Err(message) => errors.push(RowError { row, message }),
            }
            row += 1;
        }

        Ok(ImportSummary { lines, errors })
    }

    /// Assemble parsed lines into a postable entry
    ///
    /// Fails if any row was rejected or the accepted rows do not balance.
    pub fn build_entry(
        &self,
        date: NaiveDate,
        memo: &str,
        summary: &ImportSummary,
    ) -> TallyResult<JournalEntry> {
        if !summary.is_clean() {
            return Err(TallyError::Import(format!(
                "{} row(s) failed to parse; fix the file and retry",
                summary.errors.len()
            )));
        }

        let mut entry = JournalEntry::new(date).with_memo(memo);
        for line in &summary.lines {
            entry.push_line(line.clone());
        }

        entry
            .validate(self.chart)
            .map_err(|e| TallyError::Import(e.to_string()))?;

        Ok(entry)
    }

    /// Parse one CSV record into a journal line
    fn parse_record(&self, record: &StringRecord) -> Result<JournalLine, String> {
        if record.len() != COLUMNS {
            return Err(format!(
                "Expected {} columns (code, description, debit, credit), got {}",
                COLUMNS,
                record.len()
            ));
        }

        let code = record.get(0).unwrap_or("").trim();
        if code.is_empty() {
            return Err("Account code is empty".to_string());
        }
        if !self.chart.contains(code) {
            return Err(format!("Unknown account code '{}'", code));
        }

        let description = record.get(1).unwrap_or("").trim().to_string();
        let debit = parse_amount_cell(record.get(2).unwrap_or(""), "debit")?;
        let credit = parse_amount_cell(record.get(3).unwrap_or(""), "credit")?;

        Ok(JournalLine {
            account_code: code.to_string(),
            description,
            debit,
            credit,
        })
    }
}

/// Open a CSV file for import
///
/// Header handling is done row-wise in `parse_reader`, so the reader is
/// configured without automatic headers; column-count problems are
/// reported per row rather than aborting the whole file.
pub fn open_csv(path: &std::path::Path) -> TallyResult<Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| TallyError::Import(format!("Cannot open {}: {}", path.display(), e)))
}

/// Parse a debit/credit cell; empty means zero, anything non-numeric is rejected
fn parse_amount_cell(cell: &str, column: &str) -> Result<Money, String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(Money::zero());
    }
    let amount =
        Money::parse(cell).map_err(|_| format!("Non-numeric {} amount '{}'", column, cell))?;
    if amount.is_negative() {
        return Err(format!("Negative {} amount '{}'", column, cell));
    }
    Ok(amount)
}

/// Heuristic header check: a first row whose code is unknown and whose
/// amount cells are non-numeric text is treated as a header and skipped.
fn looks_like_header(record: &StringRecord, chart: &ChartOfAccounts) -> bool {
    let code = record.get(0).unwrap_or("").trim();
    if chart.contains(code) {
        return false;
    }
    let debit = record.get(2).unwrap_or("").trim();
    let credit = record.get(3).unwrap_or("").trim();
    let amounts_textual = (!debit.is_empty() && Money::parse(debit).is_err())
        || (!credit.is_empty() && Money::parse(credit).is_err());
    amounts_textual
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ChartOfAccounts {
        ChartOfAccounts::standard()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    }

    fn reader(data: &str) -> Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn test_parse_clean_file() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5200,Rent,1200.00,\n1010,Paid from bank,,1200.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();

        assert!(summary.is_clean());
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].debit.cents(), 120000);
        assert_eq!(summary.lines[1].credit.cents(), 120000);
    }

    #[test]
    fn test_header_row_skipped() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "Account,Description,Debit,Credit\n5200,Rent,100.00,\n1010,,,100.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();

        assert!(summary.is_clean());
        assert_eq!(summary.lines.len(), 2);
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5200,Rent,twelve,\n1010,,,100.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].row, 0);
        assert!(summary.errors[0].message.contains("Non-numeric debit"));
        assert_eq!(summary.lines.len(), 1);
    }

    #[test]
    fn test_symbol_only_amount_rejected() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5200,Rent,$,\n1010,,,100.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].row, 0);
        assert!(summary.errors[0].message.contains("Non-numeric debit"));
        assert_eq!(summary.lines.len(), 1);
    }

    #[test]
    fn test_unreadable_record_counted_like_data_rows() {
        let chart = chart();
        let service = ImportService::new(&chart);

        // Header row, then a record with invalid UTF-8, then a good row
        let mut data = b"Account,Description,Debit,Credit\n".to_vec();
        data.extend_from_slice(b"5200,Re\xffnt,100.00,\n");
        data.extend_from_slice(b"1010,,,100.00\n");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let summary = service.parse_reader(&mut reader).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].row, 0);
        assert!(summary.errors[0].message.contains("Unreadable"));
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].account_code, "1010");
    }

    #[test]
    fn test_unknown_code_rejected() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "9999,Mystery,100.00,\n1010,,,100.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].message.contains("Unknown account code"));
    }

    #[test]
    fn test_wrong_column_count_rejected() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5200,Rent,100.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].message.contains("Expected 4 columns"));
    }

    #[test]
    fn test_build_entry_from_clean_summary() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5100,Salaries,5000.00,\n2200,Withheld,,500.00\n1010,Net pay,,4500.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();
        let entry = service.build_entry(date(), "Payroll", &summary).unwrap();

        assert_eq!(entry.lines.len(), 3);
        assert!(entry.is_balanced());
        assert_eq!(entry.memo, "Payroll");
    }

    #[test]
    fn test_build_entry_refuses_dirty_summary() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5200,Rent,abc,\n1010,,,100.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();
        let err = service.build_entry(date(), "", &summary).unwrap_err();

        assert!(matches!(err, TallyError::Import(_)));
    }

    #[test]
    fn test_build_entry_refuses_unbalanced_file() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5200,Rent,100.00,\n1010,,,90.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();
        assert!(summary.is_clean());

        let err = service.build_entry(date(), "", &summary).unwrap_err();
        assert!(matches!(err, TallyError::Import(_)));
        assert!(err.to_string().contains("do not equal"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let chart = chart();
        let service = ImportService::new(&chart);

        let data = "5200,Rent,-100.00,\n1010,,,100.00\n";
        let summary = service.parse_reader(&mut reader(data)).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].message.contains("Negative debit"));
    }
}
