//! Roster lookup sets and the monthly-row filter
//!
//! The roster is an allow-list: a monthly row is reported when its email or
//! the name part of its "Emp ID - Name" cell appears in the roster.

use std::collections::HashSet;

use tracing::debug;

use super::header::{locate_header, ColumnDetector, MonthlyColumns};
use crate::error::{ReportError, ReportResult};
use crate::types::{CellValue, ResultEntry, Row};

pub const ROSTER_EMAIL: ColumnDetector = ColumnDetector::new("Email", &["email"]);
pub const ROSTER_NAME: ColumnDetector = ColumnDetector::new("Name", &["name"]).excluding(&["email"]);

/// Lookup key for a cell: stringified, trimmed, lowercased
pub fn normalize_key(cell: &CellValue) -> String {
    cell.normalized()
}

/// Name part of an "Emp ID - Name" cell.
///
/// Splits at the first `-`; without one the whole (trimmed) text is the name.
pub fn split_employee_name(emp_info: &str) -> &str {
    match emp_info.split_once('-') {
        Some((_, name)) => name.trim(),
        None => emp_info.trim(),
    }
}

/// Normalized email and name sets built from the roster sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub emails: HashSet<String>,
    pub names: HashSet<String>,
}

impl Roster {
    /// Build the roster from raw sheet rows.
    ///
    /// The header is the first row with a cell containing "email". The name
    /// column is optional; without it only emails are matched.
    pub fn from_rows(rows: &[Row]) -> ReportResult<Self> {
        let header = locate_header(rows, &[ROSTER_EMAIL]).ok_or(ReportError::RosterHeaderNotFound)?;
        let email_col = header
            .position(&ROSTER_EMAIL)
            .ok_or(ReportError::RosterHeaderNotFound)?;
        let name_col = header.position(&ROSTER_NAME);

        let data = &rows[header.index + 1..];
        let emails = collect_keys(data, email_col);
        let names = name_col
            .map(|col| collect_keys(data, col))
            .unwrap_or_default();

        debug!(
            header_row = header.index,
            email_col,
            ?name_col,
            emails = emails.len(),
            names = names.len(),
            "Roster loaded"
        );

        Ok(Self { emails, names })
    }

    /// Membership by email OR name. Empty keys never match.
    pub fn matches(&self, email_key: &str, name_key: &str) -> bool {
        self.emails.contains(email_key) || self.names.contains(name_key)
    }
}

fn collect_keys(rows: &[Row], col: usize) -> HashSet<String> {
    rows.iter()
        .filter_map(|row| row.get(col))
        .map(normalize_key)
        .filter(|key| !key.is_empty())
        .collect()
}

/// Filter monthly data rows (everything below the header) against the roster.
///
/// A row with a non-blank Level cell starts a new group: it sets the level
/// carried into the following entries and is not reported itself.
pub fn match_rows(data: &[Row], columns: &MonthlyColumns, roster: &Roster) -> Vec<ResultEntry> {
    let empty = CellValue::Empty;
    let mut current_level: Option<CellValue> = None;
    let mut entries = Vec::new();

    for row in data {
        let cell = |idx: usize| row.get(idx).unwrap_or(&empty);

        let level = cell(columns.level);
        if !level.is_blank() {
            current_level = Some(level.clone());
            continue;
        }

        let raw_email = cell(columns.email);
        let email_key = normalize_key(raw_email);

        let emp_info = cell(columns.employee_info).to_string();
        let name = split_employee_name(&emp_info);
        let name_key = name.to_lowercase();

        if roster.matches(&email_key, &name_key) {
            entries.push(ResultEntry {
                level: current_level.clone(),
                name: name.to_string(),
                email: raw_email.clone(),
                missing_time: cell(columns.missing_time).clone(),
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    fn columns() -> MonthlyColumns {
        MonthlyColumns {
            level: 0,
            employee_info: 1,
            email: 2,
            missing_time: 3,
        }
    }

    fn roster(emails: &[&str], names: &[&str]) -> Roster {
        Roster {
            emails: emails.iter().map(|s| s.to_string()).collect(),
            names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_split_employee_name() {
        assert_eq!(split_employee_name("12345 - Jane Doe"), "Jane Doe");
        assert_eq!(split_employee_name("JaneDoe"), "JaneDoe");
        assert_eq!(split_employee_name("  Jane  "), "Jane");
        // Only the first hyphen splits
        assert_eq!(split_employee_name("7 - Mary-Kate Olsen"), "Mary-Kate Olsen");
        assert_eq!(split_employee_name(""), "");
    }

    #[test]
    fn test_roster_from_rows() {
        let rows = vec![
            row(&["Manager list"]),
            row(&["Employee Name", "Email Address", "Team"]),
            row(&["Jane Doe", " A@X.com ", "Ops"]),
            row(&["John Roe", "", "Ops"]),
            row(&["jane doe", "a@x.com", "Ops"]),
        ];
        let roster = Roster::from_rows(&rows).unwrap();
        assert_eq!(roster.emails, HashSet::from(["a@x.com".to_string()]));
        assert_eq!(
            roster.names,
            HashSet::from(["jane doe".to_string(), "john roe".to_string()])
        );
    }

    #[test]
    fn test_roster_name_column_excludes_email_header() {
        let rows = vec![
            row(&["Email Name", "Full Name"]),
            row(&["b@x.com", "Bob"]),
        ];
        let roster = Roster::from_rows(&rows).unwrap();
        assert!(roster.emails.contains("b@x.com"));
        assert!(roster.names.contains("bob"));
        assert_eq!(roster.names.len(), 1);
    }

    #[test]
    fn test_roster_without_name_column() {
        let rows = vec![row(&["E-mail", "Email"]), row(&["x", "c@x.com"])];
        let roster = Roster::from_rows(&rows).unwrap();
        assert!(roster.names.is_empty());
        assert!(roster.emails.contains("c@x.com"));
    }

    #[test]
    fn test_roster_header_not_found() {
        let rows = vec![row(&["Name", "Team"]), row(&["Jane", "Ops"])];
        let err = Roster::from_rows(&rows).unwrap_err();
        assert!(matches!(err, ReportError::RosterHeaderNotFound));
    }

    #[test]
    fn test_roster_short_rows_are_tolerated() {
        let rows = vec![row(&["Name", "Email"]), row(&["Jane"])];
        let roster = Roster::from_rows(&rows).unwrap();
        assert!(roster.emails.is_empty());
        assert!(roster.names.contains("jane"));
    }

    #[test]
    fn test_match_rows_worked_example() {
        let data = vec![
            row(&["Team A", "", "", ""]),
            vec![
                CellValue::Empty,
                CellValue::from("1 - Jane"),
                CellValue::from("a@x.com"),
                CellValue::Int(5),
            ],
        ];
        let entries = match_rows(&data, &columns(), &roster(&["a@x.com"], &[]));
        assert_eq!(
            entries,
            vec![ResultEntry {
                level: Some(CellValue::from("Team A")),
                name: "Jane".to_string(),
                email: CellValue::from("a@x.com"),
                missing_time: CellValue::Int(5),
            }]
        );
    }

    #[test]
    fn test_level_rows_emit_nothing_and_carry_forward() {
        let data = vec![
            row(&["Team A", "1 - Jane", "a@x.com", "3"]),
            row(&["", "1 - Jane", "a@x.com", "3"]),
            row(&["", "2 - Bob", "b@x.com", "4"]),
            row(&["Team B", "", "", ""]),
            row(&["  ", "3 - Cat", "c@x.com", "1"]),
        ];
        let r = roster(&["a@x.com", "b@x.com", "c@x.com"], &[]);
        let entries = match_rows(&data, &columns(), &r);

        let levels: Vec<String> = entries
            .iter()
            .map(|e| e.level.as_ref().map(|l| l.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(levels, vec!["Team A", "Team A", "Team B"]);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Jane", "Bob", "Cat"]);
    }

    #[test]
    fn test_match_by_name_only() {
        let data = vec![row(&["", "99 - Jane Doe", "other@x.com", "2"])];
        let entries = match_rows(&data, &columns(), &roster(&[], &["jane doe"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, CellValue::from("other@x.com"));
        assert!(entries[0].level.is_none());
    }

    #[test]
    fn test_match_email_is_case_and_space_insensitive() {
        let data = vec![row(&["", "1 - X", "  A@X.COM ", "2"])];
        let entries = match_rows(&data, &columns(), &roster(&["a@x.com"], &[]));
        assert_eq!(entries.len(), 1);
        // Raw email is reported as found
        assert_eq!(entries[0].email, CellValue::from("  A@X.COM "));
    }

    #[test]
    fn test_unmatched_rows_are_dropped() {
        let data = vec![
            row(&["", "1 - Nobody", "nobody@x.com", "2"]),
            row(&["", "", "", ""]),
        ];
        let entries = match_rows(&data, &columns(), &roster(&["a@x.com"], &["jane"]));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_short_rows_treated_as_empty() {
        let data = vec![vec![CellValue::Empty, CellValue::from("1 - Jane")]];
        let entries = match_rows(&data, &columns(), &roster(&[], &["jane"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, CellValue::Empty);
        assert_eq!(entries[0].missing_time, CellValue::Empty);
    }
}
