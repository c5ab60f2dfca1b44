use crate::core::ReportPipeline;
use crate::error::{ReportError, ReportResult};
use crate::excel::{ReportExporter, EXPORT_HEADERS};
use crate::types::Report;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// How the report is printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Execute the report command
pub fn report(
    monthly: PathBuf,
    roster: PathBuf,
    format: OutputFormat,
    export: Option<PathBuf>,
    verbose: bool,
) -> ReportResult<()> {
    let pipeline = ReportPipeline::new();
    let report = pipeline.run(&monthly, &roster)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("{}", "Missing Time Report".bold().green());
            println!("   Monthly: {}", monthly.display());
            println!("   Roster:  {}\n", roster.display());
            if verbose {
                println!(
                    "   Sheet '{}', header at row {}, {} data rows",
                    report.sheet_name,
                    report.header_row + 1,
                    report.rows_scanned
                );
                println!(
                    "   Roster: {} emails, {} names\n",
                    report.roster_emails, report.roster_names
                );
            }
            print_report_table(&report);
        }
    }

    if let Some(output_path) = export {
        export_report(&report, &output_path)?;
        // Keep stdout clean for JSON consumers
        let message = format!("Report exported to {}", output_path.display());
        if format == OutputFormat::Json {
            eprintln!("{}", message);
        } else {
            println!("\n{}", message.bold().green());
        }
    }

    Ok(())
}

fn export_report(report: &Report, output_path: &Path) -> ReportResult<()> {
    let extension = output_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if !extension.eq_ignore_ascii_case("xlsx") {
        return Err(ReportError::Export(format!(
            "Unsupported output format: {}. Use .xlsx",
            extension
        )));
    }
    ReportExporter::new(report).export(output_path)
}

/// Print matched entries as a table
fn print_report_table(report: &Report) {
    if report.is_empty() {
        println!("{}", "No employees from the list have missing time.".yellow());
        return;
    }

    println!(
        "{:<20} {:<28} {:<32} {:>12}",
        EXPORT_HEADERS[0].bold(),
        EXPORT_HEADERS[1].bold(),
        EXPORT_HEADERS[2].bold(),
        EXPORT_HEADERS[3].bold()
    );
    println!("{}", "─".repeat(95));

    for entry in &report.entries {
        let level = entry
            .level
            .as_ref()
            .map(|l| l.to_string())
            .unwrap_or_default();
        println!(
            "{:<20} {:<28} {:<32} {:>12}",
            level,
            entry.name,
            entry.email.to_string(),
            entry.missing_time.to_string()
        );
    }

    println!("{}", "─".repeat(95));
    println!(
        "   {} matching entries out of {} rows",
        report.len().to_string().green(),
        report.rows_scanned
    );
}
