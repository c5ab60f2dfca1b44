//! Report engine: header detection, roster matching and the pipeline that
//! ties them to the spreadsheet reader

pub mod header;
pub mod pipeline;
pub mod roster;

pub use header::{locate_header, ColumnDetector, HeaderRow, MonthlyColumns};
pub use pipeline::ReportPipeline;
pub use roster::{match_rows, split_employee_name, Roster};
