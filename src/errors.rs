/*!
 * Error types for the che2-subtitles application.
 *
 * The core list and renderer never fail; these types cover the glue around
 * them: rejected submissions, session access, and document export.
 */

use thiserror::Error;

/// Errors raised when a new subtitle line is submitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The text was blank after trimming and no auto-text applied
    #[error("자막 내용을 입력하세요.")]
    EmptyContent,
}

/// Errors raised by the interactive session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Author was blank or the access code did not match
    #[error("작성자와 비밀번호를 확인하세요.")]
    AuthenticationFailed,

    /// An editing command was issued before logging in
    #[error("Login required before editing")]
    NotAuthenticated,

    /// The command line could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// A 1-based index was not a positive number
    #[error("Invalid line number: {0}")]
    InvalidIndex(String),

    /// Submission was rejected
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Errors raised while producing or saving the exported document
#[derive(Error, Debug)]
pub enum ExportError {
    /// The document library failed to pack the file
    #[error("Failed to build document: {0}")]
    Build(String),

    /// The target file exists and overwriting was not requested
    #[error("Output file already exists: {0}")]
    AlreadyExists(String),

    /// Writing the file failed
    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the editing session
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error from document export
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
