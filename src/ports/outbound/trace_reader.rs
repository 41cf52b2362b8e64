use crate::shared::Result;
use crate::trace_analysis::domain::StepStore;
use std::fmt;
use std::path::PathBuf;

/// Where a build trace is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TraceSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl TraceSource {
    /// Argument value that selects standard input
    pub const STDIN_ARG: &'static str = "-";

    /// Interprets a `--file` argument, `-` meaning standard input
    pub fn from_arg(arg: &str) -> Self {
        if arg == Self::STDIN_ARG {
            TraceSource::Stdin
        } else {
            TraceSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for TraceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSource::Stdin => write!(f, "<stdin>"),
            TraceSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// TraceReader port for loading a build trace
///
/// This port abstracts where the action-graph JSON comes from (a file,
/// standard input, an in-memory fixture) and how it is decoded into
/// build steps.
pub trait TraceReader {
    /// Reads and decodes the trace at `source`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the security checks
    /// - The content is not a JSON array of actions
    /// - Step IDs are not dense or a dependency points outside the trace
    fn read_trace(&self, source: &TraceSource) -> Result<StepStore>;
}
