//! Builder for constructing AnalysisReadModel from use case responses

use super::analysis_read_model::{AnalysisReadModel, ReportMetadataView, TraceSummaryView};
use super::report_views::{
    GraphEdgeView, GraphNodeView, ModeTotalView, ReportView, TopStepView, TreeRowView,
};
use crate::application::dto::{AnalysisReport, AnalysisResponse, GraphReport};
use chrono::{DateTime, SecondsFormat, Utc};

/// Name recorded in report metadata
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
/// Version recorded in report metadata
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing AnalysisReadModel from an AnalysisResponse
pub struct AnalysisReadModelBuilder;

impl AnalysisReadModelBuilder {
    /// Builds the read model, stamping it with `generated_at`
    pub fn build(response: &AnalysisResponse, generated_at: DateTime<Utc>) -> AnalysisReadModel {
        AnalysisReadModel {
            metadata: ReportMetadataView {
                timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
            },
            summary: TraceSummaryView {
                source: response.source.clone(),
                step_count: response.step_count,
                total_seconds: response.total_duration.as_secs_f64(),
            },
            report: Self::build_report(&response.report),
        }
    }

    fn build_report(report: &AnalysisReport) -> ReportView {
        match report {
            AnalysisReport::Top(entries) => ReportView::Top(
                entries
                    .iter()
                    .map(|e| TopStepView {
                        id: e.id,
                        mode: e.mode.clone(),
                        package: e.package.clone(),
                        seconds: e.duration.as_secs_f64(),
                        cumulative_percent: e.cumulative_percent,
                    })
                    .collect(),
            ),
            AnalysisReport::Tree(entries) => ReportView::Tree(
                entries
                    .iter()
                    .map(|e| TreeRowView {
                        path: e.path.clone(),
                        depth: e.depth,
                        indent: e.indent,
                        own_seconds: e.own_duration.map(|d| d.as_secs_f64()),
                        cumulative_seconds: e.cumulative_duration.as_secs_f64(),
                        cumulative_percent: e.cumulative_percent,
                    })
                    .collect(),
            ),
            AnalysisReport::Graph(graph) => Self::build_graph(graph),
            AnalysisReport::Types(entries) => ReportView::Types(
                entries
                    .iter()
                    .map(|e| ModeTotalView {
                        mode: e.mode.clone(),
                        seconds: e.duration.as_secs_f64(),
                        percent: e.percent,
                        step_count: e.step_count,
                    })
                    .collect(),
            ),
        }
    }

    fn build_graph(graph: &GraphReport) -> ReportView {
        ReportView::Graph {
            target: graph.target.clone(),
            nodes: graph
                .nodes
                .iter()
                .map(|n| GraphNodeView {
                    id: n.id,
                    mode: n.mode.clone(),
                    package: n.package.clone(),
                    seconds: n.duration.as_secs_f64(),
                })
                .collect(),
            edges: graph
                .edges
                .iter()
                .map(|&(from, to)| GraphEdgeView { from, to })
                .collect(),
        }
    }
}
