use crate::trace_analysis::domain::StepId;
use std::time::Duration;

/// One step of the slowest-steps report
#[derive(Debug, Clone, PartialEq)]
pub struct TopEntry {
    pub id: StepId,
    pub mode: String,
    pub package: String,
    pub duration: Duration,
    pub cumulative_percent: f64,
}

/// One line of the package tree report
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    pub path: String,
    pub depth: usize,
    pub indent: usize,
    /// Own build time; `None` for directory-only nodes
    pub own_duration: Option<Duration>,
    pub cumulative_duration: Duration,
    pub cumulative_percent: f64,
}

/// A step kept in the dependency graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: StepId,
    pub mode: String,
    pub package: String,
    pub duration: Duration,
}

/// The rendered part of the dependency graph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphReport {
    pub target: Option<String>,
    pub nodes: Vec<GraphNode>,
    /// `(from, to)` pairs, ordered by `from` then `to`
    pub edges: Vec<(StepId, StepId)>,
}

/// Time spent in one step mode
#[derive(Debug, Clone, PartialEq)]
pub struct TypeEntry {
    pub mode: String,
    pub duration: Duration,
    pub percent: f64,
    pub step_count: usize,
}

/// Result of one query, one variant per subcommand
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisReport {
    Top(Vec<TopEntry>),
    Tree(Vec<TreeEntry>),
    Graph(GraphReport),
    Types(Vec<TypeEntry>),
}

/// AnalysisResponse - Internal response DTO from the analyze-trace use case
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    /// Display name of the trace source
    pub source: String,
    pub step_count: usize,
    /// Sum of all step durations; the base of every percentage
    pub total_duration: Duration,
    pub report: AnalysisReport,
}
