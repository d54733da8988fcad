use thiserror::Error;

pub type FramesetResult<T> = Result<T, FramesetError>;

#[derive(Error, Debug)]
pub enum FramesetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot read spreadsheet: {0}")]
    SourceUnreadable(String),

    #[error("Cannot write frame store: {0}")]
    OutputUnwritable(String),

    #[error("Malformed frame store: {0}")]
    MalformedRecordStore(String),

    #[error("Row/record alignment mismatch: {0}")]
    AlignmentMismatch(String),
}
