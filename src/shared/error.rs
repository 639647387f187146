use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, data integrity error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for capability report generation.
///
/// Data-integrity errors abort aggregation, transport and query errors abort
/// the fetch loop. None of them are retried.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Data integrity error: could not find parent id {parent_id} (referenced by capability {child_id})\n\n💡 Hint: The fetched capability set must contain every referenced parent")]
    MissingParent { child_id: String, parent_id: String },

    #[error("Data integrity error: capability {id} is part of a parent cycle\n\n💡 Hint: Check the parent relations of the capabilities in the workspace")]
    ParentCycle { id: String },

    #[error("Failed to reach the GraphQL endpoint: {endpoint}\nDetails: {details}\n\n💡 Hint: Please check your network connection and the configured endpoint")]
    Transport { endpoint: String, details: String },

    #[error("GraphQL query failed\nDetails: {details}")]
    Query { details: String },

    #[error("Host handshake failed\nDetails: {details}")]
    HostHandshake { details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for domain constructors and settings
    #[error("Validation error: {message}")]
    Validation { message: String },
}
