//! Header row detection for loosely structured sheets
//!
//! Report exports put a title block, filters and blank rows above the real
//! table, so the header is found by content: the first row (top-to-bottom)
//! in which every required column detector is satisfied by some cell.
//! Columns are then resolved left-to-right, first match wins.

use crate::error::{ReportError, ReportResult};
use crate::types::Row;

/// Substring predicate over a lowercased, trimmed header cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDetector {
    /// Human-readable column name used in error messages
    pub label: &'static str,
    all_of: &'static [&'static str],
    none_of: &'static [&'static str],
}

impl ColumnDetector {
    /// Detector that requires every token to appear in the cell
    pub const fn new(label: &'static str, all_of: &'static [&'static str]) -> Self {
        Self {
            label,
            all_of,
            none_of: &[],
        }
    }

    /// Same detector, but rejecting cells that contain any of `none_of`
    pub const fn excluding(self, none_of: &'static [&'static str]) -> Self {
        Self {
            label: self.label,
            all_of: self.all_of,
            none_of,
        }
    }

    /// `cell` must already be normalized (trimmed + lowercased)
    pub fn matches(&self, cell: &str) -> bool {
        self.all_of.iter().all(|token| cell.contains(token))
            && !self.none_of.iter().any(|token| cell.contains(token))
    }
}

pub const LEVEL: ColumnDetector = ColumnDetector::new("Level", &["level"]);
pub const EMPLOYEE_INFO: ColumnDetector = ColumnDetector::new("Emp ID - Name", &["emp", "name"]);
pub const EMAIL: ColumnDetector = ColumnDetector::new("Email ID", &["email"]);
pub const MISSING_TIME: ColumnDetector =
    ColumnDetector::new("Sum of Missing Time", &["sum", "missing", "time"]);

/// Detectors a monthly sheet header must satisfy, in display order
pub const MONTHLY_DETECTORS: [ColumnDetector; 4] = [LEVEL, EMPLOYEE_INFO, EMAIL, MISSING_TIME];

/// A detected header row
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    /// 0-based index into the rows it was detected in
    pub index: usize,
    /// Normalized cell texts of the header row
    pub cells: Vec<String>,
}

impl HeaderRow {
    /// Column of the first (leftmost) cell satisfying `detector`
    pub fn position(&self, detector: &ColumnDetector) -> Option<usize> {
        self.cells.iter().position(|cell| detector.matches(cell))
    }

    fn require(&self, detector: &ColumnDetector) -> ReportResult<usize> {
        self.position(detector)
            .ok_or_else(|| ReportError::ColumnNotFound(detector.label.to_string()))
    }
}

/// Find the first row in which every detector matches at least one cell.
pub fn locate_header(rows: &[Row], detectors: &[ColumnDetector]) -> Option<HeaderRow> {
    rows.iter().enumerate().find_map(|(index, row)| {
        let cells: Vec<String> = row.iter().map(|cell| cell.normalized()).collect();
        let satisfied = detectors
            .iter()
            .all(|detector| cells.iter().any(|cell| detector.matches(cell)));
        satisfied.then_some(HeaderRow { index, cells })
    })
}

/// Column indices of the monthly sheet's logical fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyColumns {
    pub level: usize,
    pub employee_info: usize,
    pub email: usize,
    pub missing_time: usize,
}

impl MonthlyColumns {
    /// Resolve every field against an already detected header row.
    pub fn resolve(header: &HeaderRow) -> ReportResult<Self> {
        Ok(Self {
            level: header.require(&LEVEL)?,
            employee_info: header.require(&EMPLOYEE_INFO)?,
            email: header.require(&EMAIL)?,
            missing_time: header.require(&MISSING_TIME)?,
        })
    }

    /// Detect the monthly header and resolve its columns in one step.
    pub fn locate(rows: &[Row]) -> ReportResult<(HeaderRow, Self)> {
        let header = locate_header(rows, &MONTHLY_DETECTORS).ok_or_else(|| {
            let labels: Vec<&str> = MONTHLY_DETECTORS.iter().map(|d| d.label).collect();
            ReportError::HeaderNotFound(labels.join(", "))
        })?;
        let columns = Self::resolve(&header)?;
        Ok((header, columns))
    }
}
