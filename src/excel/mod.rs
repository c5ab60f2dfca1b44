//! Spreadsheet I/O
//!
//! - Reader: .xlsb / .xlsx / .xls → rows of cell values (calamine)
//! - Outline: optional expansion of collapsed row groups before reading
//! - Exporter: matched entries → .xlsx (rust_xlsxwriter)

mod exporter;
mod outline;
pub mod reader;

pub use exporter::{ReportExporter, EXPORT_HEADERS};
pub use outline::{NoopOutlineExpander, OutlineExpander};
pub use reader::{find_monthly_sheet, read_monthly_sheet, read_roster_sheet, MonthlySheet};
