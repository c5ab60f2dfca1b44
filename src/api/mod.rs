//! HTTP server module
//!
//! Browser upload flow plus a JSON endpoint over the same report pipeline.
//! Run with `missing-time-server`.

pub mod handlers;
pub mod server;
pub mod uploads;
pub mod views;

pub use server::{build_router, run_api_server, ApiConfig, AppState};
