//! Spreadsheet reader - .xlsb / .xlsx / .xls → rows of `CellValue`

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::types::{CellValue, Row};

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            // Keep the Excel serial number, the way the workbook stores it
            Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }
}

/// Open any workbook format calamine understands, picked by extension
pub fn open_workbook(path: &Path) -> ReportResult<Sheets<BufReader<File>>> {
    open_workbook_auto(path).map_err(|e| {
        ReportError::Read(format!("Failed to open {}: {}", display_name(path), e))
    })
}

/// First sheet whose name contains both "missing" and "time" (any case)
pub fn find_monthly_sheet(names: &[String]) -> Option<&String> {
    names.iter().find(|name| {
        let lower = name.to_lowercase();
        lower.contains("missing") && lower.contains("time")
    })
}

/// Rows of the monthly sheet's used area
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySheet {
    pub name: String,
    /// 0-based sheet row of `rows[0]`; blank leading rows are not in the range
    pub first_row: usize,
    pub rows: Vec<Row>,
}

/// Read the "Missing Time" sheet of the monthly report.
pub fn read_monthly_sheet(path: &Path) -> ReportResult<MonthlySheet> {
    let mut workbook = open_workbook(path)?;
    let names = workbook.sheet_names();
    let sheet_name = find_monthly_sheet(&names)
        .cloned()
        .ok_or_else(|| ReportError::SheetNotFound {
            found: names.clone(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ReportError::Read(format!("Error reading monthly sheet: {}", e)))?;
    let rows = range_to_rows(&range);
    let first_row = range.start().map_or(0, |(row, _)| row as usize);

    debug!(sheet = %sheet_name, first_row, rows = rows.len(), "Monthly sheet read");
    Ok(MonthlySheet {
        name: sheet_name,
        first_row,
        rows,
    })
}

/// Read the first sheet of the roster workbook.
pub fn read_roster_sheet(path: &Path) -> ReportResult<Vec<Row>> {
    let mut workbook = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or_else(|| ReportError::Read("Manager list has no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ReportError::Read(format!("Error reading manager list: {}", e)))?;
    let rows = range_to_rows(&range);

    debug!(sheet = %sheet_name, rows = rows.len(), "Roster sheet read");
    Ok(rows)
}

/// Convert a calamine range into owned rows.
///
/// Row and column indices are relative to the range's used area, not the
/// sheet; see `MonthlySheet::first_row`.
pub fn range_to_rows(range: &Range<Data>) -> Vec<Row> {
    range
        .rows()
        .map(|cells| cells.iter().map(CellValue::from).collect())
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
