use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes for the CLI.
///
/// A missing root descriptor is reported but still exits with `Success`,
/// so only genuine failures surface as non-zero codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Diagram written, or nothing to do
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable descriptor, write failure, bad config, ...)
    ApplicationError = 3,
}

impl ExitCode {
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

/// Errors raised while building a Maven dependency graph.
#[derive(Debug, Error)]
pub enum PomGraphError {
    #[error("Descriptor file not found: {path}\n\n💡 Hint: Pass the path to an existing pom.xml with --path")]
    DescriptorNotFound { path: PathBuf },

    #[error("Failed to read descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("Failed to parse descriptor: {path}\nDetails: {details}")]
    DescriptorParseError { path: PathBuf, details: String },

    #[error("Dependency #{position} in {path} has no {field}\n\n💡 Hint: Every <dependency> needs both <groupId> and <artifactId>, or run without --strict to skip such entries")]
    MissingCoordinate {
        path: PathBuf,
        position: usize,
        field: &'static str,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid local repository: {path}\nReason: {reason}\n\n💡 Hint: Point --local-repo at a Maven repository directory such as ~/.m2/repository")]
    InvalidLocalRepository { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
