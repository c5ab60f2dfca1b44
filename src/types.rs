use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

//==============================================================================
// Cell Values
//==============================================================================

/// A single spreadsheet cell, independent of the file format it came from.
///
/// Serializes untagged so JSON consumers see plain strings, numbers and
/// `null` for empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// True when the cell has no content once stringified and trimmed.
    pub fn is_blank(&self) -> bool {
        self.to_string().trim().is_empty()
    }

    /// Lowercased, trimmed text used for header detection and key matching
    pub fn normalized(&self) -> String {
        self.to_string().trim().to_lowercase()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

/// One spreadsheet row, in column order
pub type Row = Vec<CellValue>;

//==============================================================================
// Report Model
//==============================================================================

/// A matched employee row from the monthly sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    /// Group label carried forward from the last level row, if any
    pub level: Option<CellValue>,
    pub name: String,
    pub email: CellValue,
    pub missing_time: CellValue,
}

/// Output of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Name of the monthly worksheet the entries were read from
    pub sheet_name: String,
    /// Sheet row (0-based) of the detected monthly header, counting blank
    /// leading rows
    pub header_row: usize,
    /// Number of data rows scanned below the header
    pub rows_scanned: usize,
    pub roster_emails: usize,
    pub roster_names: usize,
    pub entries: Vec<ResultEntry>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from("Team A").to_string(), "Team A");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Float(5.0).to_string(), "5");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_cell_blank() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::from("   ").is_blank());
        assert!(!CellValue::from(" x ").is_blank());
        assert!(!CellValue::Int(0).is_blank());
    }

    #[test]
    fn test_cell_normalized() {
        assert_eq!(CellValue::from("  A@X.com ").normalized(), "a@x.com");
        assert_eq!(CellValue::Empty.normalized(), "");
    }

    #[test]
    fn test_cell_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            CellValue::Empty,
            CellValue::from("a"),
            CellValue::Float(2.5),
            CellValue::Int(3),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,"a",2.5,3]"#);
    }

    #[test]
    fn test_result_entry_serialize() {
        let entry = ResultEntry {
            level: None,
            name: "Jane".to_string(),
            email: CellValue::from("a@x.com"),
            missing_time: CellValue::Float(5.0),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"level\":null"));
        assert!(json.contains("\"name\":\"Jane\""));
        assert!(json.contains("\"missing_time\":5.0"));
    }
}
