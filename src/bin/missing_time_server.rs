//! Missing time report HTTP server
//!
//! Serves the upload form and the JSON report endpoint.

use clap::Parser;
use missing_time_report::api::{run_api_server, server::DEFAULT_BODY_LIMIT, ApiConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "missing-time-server")]
#[command(version)]
#[command(about = "Missing Time Report server - upload form and JSON API")]
#[command(long_about = r#"
Missing Time Report server

Endpoints:
  - GET  /                 - Upload form (monthly_file, employee_file)
  - POST /                 - Results page
  - POST /api/v1/report    - Same report as JSON
  - GET  /health           - Health check
  - GET  /version          - Server version info

Example usage:
  missing-time-server                           # Start on localhost:8080
  missing-time-server --host 0.0.0.0 --port 3000 --upload-dir /var/tmp/uploads

  curl -F monthly_file=@march.xlsb -F employee_file=@managers.xlsx \
    http://localhost:8080/api/v1/report
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "MISSING_TIME_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "MISSING_TIME_PORT")]
    port: u16,

    /// Directory uploaded workbooks are written to
    #[arg(short, long, default_value = "uploads", env = "MISSING_TIME_UPLOAD_DIR")]
    upload_dir: PathBuf,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT, env = "MISSING_TIME_BODY_LIMIT")]
    body_limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        upload_dir: args.upload_dir,
        body_limit: args.body_limit,
    };

    run_api_server(config).await
}
