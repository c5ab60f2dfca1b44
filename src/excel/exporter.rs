//! Report exporter - matched entries → Excel (.xlsx)

use crate::error::{ReportError, ReportResult};
use crate::types::{CellValue, Report};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Column headers of the exported sheet, same as the results page
pub const EXPORT_HEADERS: [&str; 4] = ["Level", "Name", "Email ID", "Missing Time"];

const SHEET_NAME: &str = "Missing Time";

/// Writes a report's entries to a single-sheet workbook
pub struct ReportExporter<'a> {
    report: &'a Report,
}

impl<'a> ReportExporter<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Export the report to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> ReportResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| ReportError::Export(format!("Failed to set worksheet name: {}", e)))?;

        let bold = Format::new().set_bold();
        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &bold)
                .map_err(|e| ReportError::Export(format!("Failed to write header: {}", e)))?;
        }

        for (idx, entry) in self.report.entries.iter().enumerate() {
            let row = idx as u32 + 1; // Row 0 is the header
            let level = entry.level.clone().unwrap_or_default();
            Self::write_cell(worksheet, row, 0, &level)?;
            Self::write_cell(worksheet, row, 1, &CellValue::Text(entry.name.clone()))?;
            Self::write_cell(worksheet, row, 2, &entry.email)?;
            Self::write_cell(worksheet, row, 3, &entry.missing_time)?;
        }

        workbook
            .save(output_path)
            .map_err(|e| ReportError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }

    /// Write a single cell, keeping numbers numeric
    fn write_cell(
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        value: &CellValue,
    ) -> ReportResult<()> {
        let written = match value {
            CellValue::Empty => return Ok(()),
            CellValue::Text(s) => worksheet.write_string(row, col, s),
            CellValue::Int(i) => worksheet.write_number(row, col, *i as f64),
            CellValue::Float(f) => worksheet.write_number(row, col, *f),
            CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
        };
        written
            .map(|_| ())
            .map_err(|e| ReportError::Export(format!("Failed to write cell: {}", e)))
    }
}
