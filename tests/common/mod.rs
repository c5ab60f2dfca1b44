//! Workbook fixtures shared by the integration tests

#![allow(dead_code)] // Each test binary uses a different subset

use missing_time_report::CellValue;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Shorthand for a text cell
pub fn t(s: &str) -> CellValue {
    CellValue::from(s)
}

/// Shorthand for a numeric cell
pub fn n(v: f64) -> CellValue {
    CellValue::Float(v)
}

/// Write a workbook with the given sheets; empty cells are left unwritten
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<CellValue>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    CellValue::Empty => {}
                    CellValue::Text(s) if s.is_empty() => {}
                    CellValue::Text(s) => {
                        worksheet.write_string(r, c, s).unwrap();
                    }
                    CellValue::Int(i) => {
                        worksheet.write_number(r, c, *i as f64).unwrap();
                    }
                    CellValue::Float(f) => {
                        worksheet.write_number(r, c, *f).unwrap();
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).unwrap();
                    }
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Monthly sheet rows: title block, header, two levels of employees
pub fn monthly_rows() -> Vec<Vec<CellValue>> {
    vec![
        vec![t("Monthly Missing Time Report")],
        vec![t("Period: March")],
        vec![
            t("Level"),
            t("Emp ID - Name"),
            t("Email ID"),
            t("Sum of Missing Time"),
        ],
        vec![t("Team A"), t(""), t(""), t("")],
        vec![t(""), t("1 - Jane"), t("a@x.com"), n(5.0)],
        vec![t(""), t("2 - Bob Stone"), t("bob@x.com"), n(2.5)],
        vec![t("Team B"), t(""), t(""), t("")],
        vec![t(""), t("3 - Carol King"), t("CAROL@X.COM"), n(8.0)],
        vec![t(""), t("4 - Dave"), t("dave@x.com"), n(1.0)],
    ]
}

/// Roster rows: Jane by email, Carol by email (different case), Dave by name
pub fn roster_rows() -> Vec<Vec<CellValue>> {
    vec![
        vec![t("Manager List")],
        vec![t("Employee Name"), t("Email Address")],
        vec![t("Jane Doe"), t("a@x.com")],
        vec![t("Carol King"), t("carol@x.com")],
        vec![t("Dave"), t("")],
    ]
}

/// Write the standard monthly + roster pair into `dir`
pub fn write_fixture_pair(dir: &Path) -> (PathBuf, PathBuf) {
    let monthly = dir.join("monthly.xlsx");
    let roster = dir.join("roster.xlsx");
    write_workbook(
        &monthly,
        &[("Summary", vec![vec![t("Totals")]]), ("Missing Time", monthly_rows())],
    );
    write_workbook(&roster, &[("Managers", roster_rows())]);
    (monthly, roster)
}
