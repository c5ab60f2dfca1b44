//! Missing Time Report - match a monthly missing-time sheet against a roster
//!
//! The monthly export is a loosely structured workbook: title rows, group
//! ("level") rows and employee rows. This crate finds its header row by
//! column-name content, carries the current level down the sheet, and keeps
//! only the employees whose email or name appears in a roster workbook.
//!
//! # Example
//!
//! ```no_run
//! use missing_time_report::core::ReportPipeline;
//! use std::path::Path;
//!
//! let pipeline = ReportPipeline::new();
//! let report = pipeline.run(Path::new("march.xlsb"), Path::new("managers.xlsx"))?;
//!
//! for entry in &report.entries {
//!     println!("{} {} {}", entry.name, entry.email, entry.missing_time);
//! }
//! # Ok::<(), missing_time_report::error::ReportError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{ReportError, ReportResult};
pub use types::{CellValue, Report, ResultEntry, Row};
