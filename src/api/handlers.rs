//! API request handlers
//!
//! Handlers for the upload form, the results page and the JSON endpoints.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::server::AppState;
use super::uploads::allowed_file;
use super::views;
use crate::error::{ReportError, ReportResult};
use crate::types::Report;

/// Multipart field carrying the monthly missing-time workbook
pub const MONTHLY_FIELD: &str = "monthly_file";
/// Multipart field carrying the employee/manager roster workbook
pub const ROSTER_FIELD: &str = "employee_file";

const UPLOAD_HINT: &str = "Please upload a .xlsb (monthly) and a .xlsx/.xls (manager list).";

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP status for a pipeline error
pub fn status_for(err: &ReportError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// An uploaded workbook held in memory until it is saved
struct UploadedFile {
    file_name: String,
    bytes: Bytes,
}

/// Pull both workbook fields out of the form; other fields are ignored.
async fn read_uploads(mut multipart: Multipart) -> ReportResult<(UploadedFile, UploadedFile)> {
    let mut monthly = None;
    let mut roster = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ReportError::InvalidUpload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name != MONTHLY_FIELD && name != ROSTER_FIELD {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ReportError::InvalidUpload(e.to_string()))?;
        let upload = UploadedFile { file_name, bytes };
        if name == MONTHLY_FIELD {
            monthly = Some(upload);
        } else {
            roster = Some(upload);
        }
    }

    match (monthly, roster) {
        (Some(m), Some(r)) if allowed_file(&m.file_name) && allowed_file(&r.file_name) => {
            Ok((m, r))
        }
        _ => Err(ReportError::InvalidUpload(UPLOAD_HINT.to_string())),
    }
}

/// Save both uploads and run the pipeline off the async runtime.
async fn build_report(state: Arc<AppState>, multipart: Multipart) -> ReportResult<Report> {
    let (monthly, roster) = read_uploads(multipart).await?;

    tokio::task::spawn_blocking(move || {
        let monthly_path: PathBuf = state.uploads.save(&monthly.file_name, &monthly.bytes)?;
        let roster_path: PathBuf = state.uploads.save(&roster.file_name, &roster.bytes)?;
        state.pipeline.run(&monthly_path, &roster_path)
    })
    .await
    .map_err(|e| ReportError::Io(std::io::Error::other(e)))?
}

/// GET / - Upload form
pub async fn upload_form() -> Html<String> {
    Html(views::upload_form())
}

/// POST / - Results page, or the error message as plain text
pub async fn upload_report(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match build_report(state, multipart).await {
        Ok(report) => Html(views::results_page(&report)).into_response(),
        Err(e) => {
            warn!(error = %e, "Report request failed");
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// POST /api/v1/report - Same pipeline, JSON result
pub async fn report(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match build_report(state, multipart).await {
        Ok(report) => Json(ApiResponse::ok(report)).into_response(),
        Err(e) => {
            warn!(error = %e, "Report request failed");
            (status_for(&e), Json(ApiResponse::<Report>::err(e.to_string()))).into_response()
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["upload".to_string(), "report".to_string()],
    }))
}
