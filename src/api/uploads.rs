//! Upload validation and storage

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, ReportResult};

/// Workbook extensions accepted for either upload field
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["xlsb", "xlsx", "xls"];

/// True when `file_name` has an allowed extension after its last dot
pub fn allowed_file(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Reduce a client-supplied file name to a safe, flat ASCII name.
///
/// Path separators and whitespace become `_`, anything outside
/// `[A-Za-z0-9._-]` is dropped, and leading/trailing `.`/`_` are trimmed so
/// the result can never escape the upload directory.
pub fn sanitize_filename(file_name: &str) -> String {
    let flattened = file_name.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Directory that uploaded workbooks are written to
///
/// Files are stored under their sanitized name and overwritten when a later
/// upload uses the same name.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save an upload and return where it was written
    pub fn save(&self, file_name: &str, bytes: &[u8]) -> ReportResult<PathBuf> {
        let safe_name = sanitize_filename(file_name);
        if safe_name.is_empty() {
            return Err(ReportError::InvalidUpload(format!(
                "Unusable file name: {:?}",
                file_name
            )));
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&safe_name);
        fs::write(&path, bytes)?;

        debug!(path = %path.display(), size = bytes.len(), "Upload saved");
        Ok(path)
    }
}
