use crate::application::read_models::{
    AnalysisReadModel, GraphEdgeView, GraphNodeView, ModeTotalView, ReportMetadataView,
    ReportView, TopStepView, TraceSummaryView, TreeRowView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    metadata: Metadata,
    trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Step>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<Vec<TreeRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<Graph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modes: Option<Vec<ModeTotal>>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tool: Tool,
    command: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Trace {
    source: String,
    step_count: usize,
    total_seconds: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    id: usize,
    mode: String,
    package: String,
    seconds: f64,
    cumulative_percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TreeRow {
    path: String,
    depth: usize,
    indent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    own_seconds: Option<f64>,
    cumulative_seconds: f64,
    cumulative_percent: f64,
}

#[derive(Debug, Serialize)]
struct Graph {
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

#[derive(Debug, Serialize)]
struct GraphNode {
    id: usize,
    mode: String,
    package: String,
    seconds: f64,
}

#[derive(Debug, Serialize)]
struct GraphEdge {
    from: usize,
    to: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModeTotal {
    mode: String,
    seconds: f64,
    percent: f64,
    step_count: usize,
}

/// JsonFormatter adapter for machine-readable reports
///
/// This adapter implements the ReportFormatter port. Each report is one
/// pretty-printed JSON object carrying generation metadata, a summary of
/// the trace and exactly one report section.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &AnalysisReadModel) -> Result<String> {
        let mut document = Document {
            metadata: self.build_metadata(&model.metadata, model.report.command()),
            trace: self.build_trace(&model.summary),
            steps: None,
            tree: None,
            graph: None,
            modes: None,
        };

        match &model.report {
            ReportView::Top(steps) => document.steps = Some(self.build_steps(steps)),
            ReportView::Tree(rows) => document.tree = Some(self.build_tree(rows)),
            ReportView::Graph {
                target,
                nodes,
                edges,
            } => document.graph = Some(self.build_graph(target.as_deref(), nodes, edges)),
            ReportView::Types(modes) => document.modes = Some(self.build_modes(modes)),
        }

        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}

impl JsonFormatter {
    fn build_metadata(&self, metadata: &ReportMetadataView, command: &str) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            tool: Tool {
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            },
            command: command.to_string(),
        }
    }

    fn build_trace(&self, summary: &TraceSummaryView) -> Trace {
        Trace {
            source: summary.source.clone(),
            step_count: summary.step_count,
            total_seconds: summary.total_seconds,
        }
    }

    fn build_steps(&self, steps: &[TopStepView]) -> Vec<Step> {
        steps
            .iter()
            .map(|s| Step {
                id: s.id,
                mode: s.mode.clone(),
                package: s.package.clone(),
                seconds: s.seconds,
                cumulative_percent: s.cumulative_percent,
            })
            .collect()
    }

    fn build_tree(&self, rows: &[TreeRowView]) -> Vec<TreeRow> {
        rows.iter()
            .map(|r| TreeRow {
                path: r.path.clone(),
                depth: r.depth,
                indent: r.indent,
                own_seconds: r.own_seconds,
                cumulative_seconds: r.cumulative_seconds,
                cumulative_percent: r.cumulative_percent,
            })
            .collect()
    }

    fn build_graph(
        &self,
        target: Option<&str>,
        nodes: &[GraphNodeView],
        edges: &[GraphEdgeView],
    ) -> Graph {
        Graph {
            target: target.map(str::to_string),
            nodes: nodes
                .iter()
                .map(|n| GraphNode {
                    id: n.id,
                    mode: n.mode.clone(),
                    package: n.package.clone(),
                    seconds: n.seconds,
                })
                .collect(),
            edges: edges
                .iter()
                .map(|e| GraphEdge {
                    from: e.from,
                    to: e.to,
                })
                .collect(),
        }
    }

    fn build_modes(&self, modes: &[ModeTotalView]) -> Vec<ModeTotal> {
        modes
            .iter()
            .map(|m| ModeTotal {
                mode: m.mode.clone(),
                seconds: m.seconds,
                percent: m.percent,
                step_count: m.step_count,
            })
            .collect()
    }
}
