//! One report run: expand → read → detect header → load roster → match

use std::path::Path;

use chrono::Utc;
use tracing::info;

use super::header::MonthlyColumns;
use super::roster::{match_rows, Roster};
use crate::error::ReportResult;
use crate::excel::{read_monthly_sheet, read_roster_sheet, NoopOutlineExpander, OutlineExpander};
use crate::types::Report;

/// Runs the missing-time report over a monthly workbook and a roster.
///
/// Holds no state between runs; the same inputs always produce the same
/// entries.
pub struct ReportPipeline {
    expander: Box<dyn OutlineExpander>,
}

impl Default for ReportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPipeline {
    /// Pipeline without outline expansion
    pub fn new() -> Self {
        Self::with_expander(Box::new(NoopOutlineExpander))
    }

    pub fn with_expander(expander: Box<dyn OutlineExpander>) -> Self {
        Self { expander }
    }

    /// Build the report. Any failure aborts the whole run.
    pub fn run(&self, monthly_path: &Path, roster_path: &Path) -> ReportResult<Report> {
        self.expander.expand(monthly_path)?;

        let sheet = read_monthly_sheet(monthly_path)?;
        let (header, columns) = MonthlyColumns::locate(&sheet.rows)?;
        let data = &sheet.rows[header.index + 1..];
        let header_row = sheet.first_row + header.index;

        let roster = Roster::from_rows(&read_roster_sheet(roster_path)?)?;
        let entries = match_rows(data, &columns, &roster);

        info!(
            sheet = %sheet.name,
            expander = self.expander.name(),
            header_row,
            rows = data.len(),
            matched = entries.len(),
            "Missing time report built"
        );

        Ok(Report {
            sheet_name: sheet.name,
            header_row,
            rows_scanned: data.len(),
            roster_emails: roster.emails.len(),
            roster_names: roster.names.len(),
            entries,
            generated_at: Utc::now(),
        })
    }
}
