//! View structs for the individual reports
//!
//! Durations are flattened to seconds so formatters never touch
//! `std::time::Duration` directly.

use crate::trace_analysis::domain::StepId;

/// View of one step in the slowest-steps report
#[derive(Debug, Clone, PartialEq)]
pub struct TopStepView {
    pub id: StepId,
    pub mode: String,
    pub package: String,
    pub seconds: f64,
    pub cumulative_percent: f64,
}

/// View of one tree line
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRowView {
    pub path: String,
    pub depth: usize,
    /// Nesting level used for indentation
    pub indent: usize,
    /// Own build time; `None` for directory-only nodes
    pub own_seconds: Option<f64>,
    pub cumulative_seconds: f64,
    pub cumulative_percent: f64,
}

/// View of a graph node
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNodeView {
    pub id: StepId,
    pub mode: String,
    pub package: String,
    pub seconds: f64,
}

/// View of a dependency edge; `from` depends on `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdgeView {
    pub from: StepId,
    pub to: StepId,
}

/// View of one step mode's total
#[derive(Debug, Clone, PartialEq)]
pub struct ModeTotalView {
    pub mode: String,
    pub seconds: f64,
    pub percent: f64,
    pub step_count: usize,
}

/// Report body, one variant per subcommand
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView {
    Top(Vec<TopStepView>),
    Tree(Vec<TreeRowView>),
    Graph {
        target: Option<String>,
        nodes: Vec<GraphNodeView>,
        edges: Vec<GraphEdgeView>,
    },
    Types(Vec<ModeTotalView>),
}

impl ReportView {
    /// Subcommand that produced this report
    pub fn command(&self) -> &'static str {
        match self {
            ReportView::Top(_) => "top",
            ReportView::Tree(_) => "tree",
            ReportView::Graph { .. } => "graph",
            ReportView::Types(_) => "types",
        }
    }
}
