use crate::ports::outbound::TraceSource;

/// The analysis to run over a loaded trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisQuery {
    /// Slowest individual steps; `None` lists every step
    Top { limit: Option<usize> },
    /// Cumulative time per package directory
    Tree {
        /// Packages to narrow the tree to; empty keeps the whole tree
        focus: Vec<String>,
        /// Deepest level shown; `None` is unlimited
        level: Option<usize>,
    },
    /// Dependency graph, optionally narrowed to the paths reaching `target`
    Graph { target: Option<String> },
    /// Total time per step mode
    Types,
}

impl AnalysisQuery {
    /// Subcommand name, as shown to users and recorded in JSON output
    pub fn command_name(&self) -> &'static str {
        match self {
            AnalysisQuery::Top { .. } => "top",
            AnalysisQuery::Tree { .. } => "tree",
            AnalysisQuery::Graph { .. } => "graph",
            AnalysisQuery::Types => "types",
        }
    }
}

/// AnalysisRequest - Internal request DTO for the analyze-trace use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Where to read the build trace from
    pub source: TraceSource,
    pub query: AnalysisQuery,
}

impl AnalysisRequest {
    pub fn new(source: TraceSource, query: AnalysisQuery) -> Self {
        Self { source, query }
    }
}
