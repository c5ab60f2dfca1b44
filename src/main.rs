use clap::{Parser, Subcommand};
use missing_time_report::cli::{self, OutputFormat};
use missing_time_report::error::ReportResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "missing-time")]
#[command(about = "Match a monthly missing-time report against an employee roster.")]
#[command(long_about = "Missing Time Report - filter a monthly missing-time workbook by roster

The monthly workbook needs a sheet whose name contains 'missing' and 'time',
with a header row holding Level, Emp ID - Name, Email ID and
Sum of Missing Time columns (matched by content, anywhere in the sheet).
The roster needs a header cell containing 'Email' and optionally a Name column.

COMMANDS:
  report   - Print the matching employees, grouped by level

EXAMPLES:
  missing-time report march.xlsb managers.xlsx
  missing-time report march.xlsb managers.xlsx --format json
  missing-time report march.xlsb managers.xlsx --export matched.xlsx

Run the browser upload form with `missing-time-server`.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match the monthly report against the roster and print the result
    Report {
        /// Monthly missing-time workbook (.xlsb, .xlsx, .xls)
        monthly: PathBuf,

        /// Employee / manager roster workbook (.xlsx, .xls, .xlsb)
        roster: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Also write the matched entries to an .xlsx file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Show sheet and roster details
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ReportResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            monthly,
            roster,
            format,
            export,
            verbose,
        } => cli::report(monthly, roster, format, export, verbose),
    }
}
