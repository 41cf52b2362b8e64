use super::trace_parser::TraceParser;
use crate::ports::outbound::{TraceReader, TraceSource};
use crate::shared::error::TraceError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use crate::trace_analysis::domain::StepStore;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading build traces
///
/// This adapter implements the TraceReader port for trace files and for
/// standard input, so `go build -debug-actiongraph=/dev/stdout` style
/// pipelines work without a temporary file.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(TraceError::TraceNotFound {
                path: path.to_path_buf(),
                suggestion: "Record a trace with `go build -debug-actiongraph=compile.json ./...`, \
                             or pass `-f -` to read it from standard input."
                    .to_string(),
            }
            .into());
        }

        validate_regular_file(path, "build trace")?;

        fs::read_to_string(path).map_err(|e| {
            TraceError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_stdin(&self) -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read build trace from stdin: {}", e))?;
        Ok(content)
    }
}

impl TraceReader for FileSystemReader {
    fn read_trace(&self, source: &TraceSource) -> Result<StepStore> {
        let content = match source {
            TraceSource::Stdin => self.read_stdin()?,
            TraceSource::File(path) => self.safe_read_file(path)?,
        };
        TraceParser::parse(&content, &source.to_string())
    }
}
