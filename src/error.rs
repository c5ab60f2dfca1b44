use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("No sheet matching 'Missing Time'. Found: {found:?}")]
    SheetNotFound { found: Vec<String> },

    #[error("Couldn't find header row containing {0}")]
    HeaderNotFound(String),

    #[error("Monthly sheet missing column: {0}")]
    ColumnNotFound(String),

    #[error("Manager list must have a column containing 'Email'")]
    RosterHeaderNotFound,

    #[error("Error reading spreadsheet: {0}")]
    Read(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// HTTP status this error is reported with: 400 for input and detection
    /// problems, 500 for read/write failures.
    pub fn status_code(&self) -> u16 {
        match self {
            ReportError::InvalidUpload(_)
            | ReportError::SheetNotFound { .. }
            | ReportError::HeaderNotFound(_)
            | ReportError::ColumnNotFound(_)
            | ReportError::RosterHeaderNotFound => 400,
            ReportError::Read(_)
            | ReportError::Io(_)
            | ReportError::Export(_)
            | ReportError::Json(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
