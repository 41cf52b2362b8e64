use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a failed analysis from
/// a mistyped command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was produced
    Success = 0,
    /// Application error (unreadable trace, unknown package, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for build trace analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Build trace not found: {path}\n\n💡 Hint: {suggestion}")]
    TraceNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse build trace: {source_name}\nDetails: {details}\n\n💡 Hint: Generate the trace with `go build -debug-actiongraph=compile.json`")]
    TraceParseError {
        source_name: String,
        details: String,
    },

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

    #[error("Could not find package \"{package}\" among the build steps\n\n💡 Hint: Use the full import path as printed by `actiongraph top` (e.g. \"golang.org/x/net/http2\")")]
    PackageNotFound { package: String },

    #[error("The build trace contains no \"build\" step to start from\n\n💡 Hint: Make sure the trace was captured from a build that compiled at least one package")]
    NoRootStep,

    /// Validation error for configuration and arguments
    #[error("Validation error: {message}")]
    Validation { message: String },
}
