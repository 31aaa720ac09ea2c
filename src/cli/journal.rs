//! Journal entry CLI commands
//!
//! Covers direct entry from repeated `--line` arguments and bulk import
//! from a CSV file. Both paths show a preview of exactly what will be
//! posted; `--dry-run` stops there.

use std::path::PathBuf;

use clap::Subcommand;

use super::entry_date;
use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::{format_journal_preview, format_receipt};
use crate::error::{TallyError, TallyResult};
use crate::models::{ChartOfAccounts, JournalEntry, JournalLine, Money};
use crate::services::import::open_csv;
use crate::services::{ImportService, JournalService};

/// Journal entry subcommands
#[derive(Subcommand)]
pub enum JournalCommands {
    /// Post a journal entry built from --line arguments
    Post {
        /// Entry date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Narration for the whole entry
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Override the generated reference
        #[arg(long)]
        reference: Option<String>,
        /// Entry line as CODE:DEBIT:CREDIT[:DESCRIPTION]; leave a side empty
        /// (e.g. "5200:1200.00::Rent" or "1010::1200.00")
        #[arg(short, long = "line", required = true)]
        lines: Vec<String>,
        /// Validate and preview without posting
        #[arg(long)]
        dry_run: bool,
    },
    /// Import journal lines from a CSV file (code, description, debit, credit)
    Import {
        /// Path to the CSV file
        file: PathBuf,
        /// Entry date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Narration for the whole entry
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Validate and preview without posting
        #[arg(long)]
        dry_run: bool,
    },
}

/// Handle a journal command
pub fn handle_journal_command(
    api: &ApiClient,
    chart: &ChartOfAccounts,
    settings: &Settings,
    cmd: JournalCommands,
) -> TallyResult<()> {
    let service = JournalService::new(api, chart);

    match cmd {
        JournalCommands::Post {
            date,
            memo,
            reference,
            lines,
            dry_run,
        } => {
            let date = entry_date(date.as_deref(), settings)?;
            let mut entry = JournalEntry::new(date).with_memo(memo);
            if let Some(reference) = reference {
                entry = entry.with_reference(reference);
            }
            for spec in &lines {
                entry.push_line(parse_line_spec(spec)?);
            }

            service.validate(&entry)?;
            print!("{}", format_journal_preview(&entry, &settings.currency_symbol));

            if dry_run {
                println!("\nDry run: nothing posted.");
            } else {
                let receipt = service.submit(&entry)?;
                println!("\n{}", format_receipt(&receipt));
            }
        }

        JournalCommands::Import {
            file,
            date,
            memo,
            dry_run,
        } => {
            let date = entry_date(date.as_deref(), settings)?;
            let import = ImportService::new(chart);

            let mut reader = open_csv(&file)?;
            let summary = import.parse_reader(&mut reader)?;

            if !summary.is_clean() {
                eprintln!("{} row(s) rejected:", summary.errors.len());
                for error in &summary.errors {
                    eprintln!("  row {}: {}", error.row + 1, error.message);
                }
            }

            let entry = import.build_entry(date, &memo, &summary)?;
            print!("{}", format_journal_preview(&entry, &settings.currency_symbol));

            if dry_run {
                println!("\nDry run: nothing posted.");
            } else {
                let receipt = service.submit(&entry)?;
                println!("\n{}", format_receipt(&receipt));
            }
        }
    }

    Ok(())
}

/// Parse a `--line` argument of the form CODE:DEBIT:CREDIT[:DESCRIPTION]
fn parse_line_spec(spec: &str) -> TallyResult<JournalLine> {
    let mut parts = spec.splitn(4, ':');
    let code = parts.next().unwrap_or("").trim();
    let debit = parts.next();
    let credit = parts.next();
    let description = parts.next().unwrap_or("").trim();

    if code.is_empty() {
        return Err(TallyError::Validation(format!(
            "Line '{}': account code is empty",
            spec
        )));
    }
    let (debit, credit) = match (debit, credit) {
        (Some(d), Some(c)) => (parse_side(spec, d)?, parse_side(spec, c)?),
        _ => {
            return Err(TallyError::Validation(format!(
                "Line '{}': expected CODE:DEBIT:CREDIT[:DESCRIPTION]",
                spec
            )))
        }
    };

    Ok(JournalLine {
        account_code: code.to_string(),
        description: description.to_string(),
        debit,
        credit,
    })
}

/// An empty side means zero; anything else must parse as money
fn parse_side(spec: &str, cell: &str) -> TallyResult<Money> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(cell)
        .map_err(|_| TallyError::Validation(format!("Line '{}': bad amount '{}'", spec, cell)))
}
