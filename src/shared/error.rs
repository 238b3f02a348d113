use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean dependency set,
/// a dependency set with findings above the configured threshold, and failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no findings, or all findings below threshold
    Success = 0,
    /// Findings were detected above the configured threshold
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (corpus load failure, file I/O error, etc.)
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
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency health analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the messages user-facing.
#[derive(Debug, Error)]
pub enum HealthError {
    /// A corpus record failed validation; the whole batch is rejected.
    #[error("Invalid vulnerability record #{index} ({id}): {reason}")]
    Validation {
        index: usize,
        id: String,
        reason: String,
    },

    #[error("Vulnerability corpus not found: {path}\n\n💡 Hint: {suggestion}")]
    CorpusNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse vulnerability corpus: {path}\nDetails: {details}\n\n💡 Hint: The corpus must be a JSON or YAML list of advisory entries")]
    CorpusParseError { path: PathBuf, details: String },

    #[error("Invalid dependency coordinate: {input}\nReason: {reason}\n\n💡 Hint: Use the group:name:version notation (e.g. org.example:libfoo:1.2.0)")]
    InvalidCoordinate { input: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
