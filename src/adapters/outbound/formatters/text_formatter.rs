use crate::application::read_models::{
    AnalysisReadModel, GraphEdgeView, GraphNodeView, ModeTotalView, ReportView, TopStepView,
    TreeRowView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::trace_analysis::domain::StepId;
use std::collections::HashMap;
use std::fmt::Write;

/// Width of every numeric column
const COLUMN_WIDTH: usize = 8;

/// Indentation added per tree level
const TREE_INDENT: &str = "  ";

/// TextFormatter adapter for terminal-friendly reports
///
/// This adapter implements the ReportFormatter port. Listings are
/// right-aligned columns of seconds and percentages; the graph report is a
/// Graphviz `digraph` ready for `dot -Tsvg`.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn seconds(seconds: f64) -> String {
        format!("{:.3}", seconds)
    }

    fn percent(percent: f64) -> String {
        format!("{:.2}%", percent)
    }

    /// Escapes text for use inside a Graphviz HTML-like label
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Splits a package path into its directory and last element
    ///
    /// Either half is `.` when empty, so `fmt` splits into `.` and `fmt`.
    fn split_package<'a>(package: &'a str) -> (&'a str, &'a str) {
        let (dir, base) = package.rsplit_once('/').unwrap_or(("", package));
        let or_dot = |s: &'a str| if s.is_empty() { "." } else { s };
        (or_dot(dir), or_dot(base))
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &AnalysisReadModel) -> Result<String> {
        let mut output = String::new();
        match &model.report {
            ReportView::Top(steps) => self.render_top(&mut output, steps)?,
            ReportView::Tree(rows) => self.render_tree(&mut output, rows)?,
            ReportView::Graph { nodes, edges, .. } => self.render_graph(&mut output, nodes, edges)?,
            ReportView::Types(modes) => self.render_types(&mut output, modes)?,
        }
        Ok(output)
    }
}

/// Helper methods for rendering each report
impl TextFormatter {
    fn render_top(&self, output: &mut String, steps: &[TopStepView]) -> Result<()> {
        for step in steps {
            writeln!(
                output,
                "{:>w$}{:>w$}  {}\t{}",
                Self::seconds(step.seconds),
                Self::percent(step.cumulative_percent),
                step.mode,
                step.package,
                w = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }

    fn render_tree(&self, output: &mut String, rows: &[TreeRowView]) -> Result<()> {
        for row in rows {
            let own = row.own_seconds.map(Self::seconds).unwrap_or_default();
            writeln!(
                output,
                "{:>w$}{:>w$} {}{}",
                Self::seconds(row.cumulative_seconds),
                own,
                TREE_INDENT.repeat(row.indent),
                row.path,
                w = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }

    fn render_graph(
        &self,
        output: &mut String,
        nodes: &[GraphNodeView],
        edges: &[GraphEdgeView],
    ) -> Result<()> {
        let mut dependencies: HashMap<StepId, Vec<StepId>> = HashMap::new();
        for edge in edges {
            dependencies.entry(edge.from).or_default().push(edge.to);
        }

        writeln!(output, "digraph {{")?;
        for node in nodes {
            let (dir, base) = Self::split_package(&node.package);
            writeln!(
                output,
                "{} [label=<<FONT POINT-SIZE=\"12\">{}</FONT><BR/><FONT POINT-SIZE=\"22\">{}</FONT><BR/>{} {}s>; shape=box];",
                node.id,
                Self::escape_html(dir),
                Self::escape_html(base),
                Self::escape_html(&node.mode),
                Self::seconds(node.seconds),
            )?;
            for to in dependencies.get(&node.id).into_iter().flatten() {
                writeln!(output, "\t{} -> {};", node.id, to)?;
            }
        }
        writeln!(output, "}}")?;
        Ok(())
    }

    fn render_types(&self, output: &mut String, modes: &[ModeTotalView]) -> Result<()> {
        for mode in modes {
            writeln!(
                output,
                "{:>w$}{:>w$}  {}",
                Self::seconds(mode.seconds),
                Self::percent(mode.percent),
                mode.mode,
                w = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ReportMetadataView, TraceSummaryView};

    fn format(report: ReportView) -> String {
        let model = AnalysisReadModel {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "actiongraph".to_string(),
                tool_version: "0.4.0".to_string(),
            },
            summary: TraceSummaryView {
                source: "compile.json".to_string(),
                step_count: 3,
                total_seconds: 10.0,
            },
            report,
        };
        TextFormatter::new().format(&model).unwrap()
    }

    #[test]
    fn test_top_layout() {
        let output = format(ReportView::Top(vec![
            TopStepView {
                id: 1,
                mode: "build".to_string(),
                package: "example.com/app/internal/db".to_string(),
                seconds: 4.0,
                cumulative_percent: 40.0,
            },
            TopStepView {
                id: 5,
                mode: "link".to_string(),
                package: "example.com/app".to_string(),
                seconds: 1.0,
                cumulative_percent: 50.0,
            },
        ]));

        assert_eq!(
            output,
            "   4.000  40.00%  build\texample.com/app/internal/db\n   \
             1.000  50.00%  link\texample.com/app\n"
        );
    }

    #[test]
    fn test_tree_layout() {
        let output = format(ReportView::Tree(vec![
            TreeRowView {
                path: "(root)".to_string(),
                depth: 0,
                indent: 0,
                own_seconds: None,
                cumulative_seconds: 5.0,
                cumulative_percent: 100.0,
            },
            TreeRowView {
                path: "x.io".to_string(),
                depth: 1,
                indent: 1,
                own_seconds: None,
                cumulative_seconds: 5.0,
                cumulative_percent: 100.0,
            },
            TreeRowView {
                path: "x.io/z".to_string(),
                depth: 2,
                indent: 2,
                own_seconds: Some(3.0),
                cumulative_seconds: 3.0,
                cumulative_percent: 60.0,
            },
        ]));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "   5.000         (root)");
        assert_eq!(lines[1], "   5.000           x.io");
        assert_eq!(lines[2], "   3.000   3.000     x.io/z");
    }

    #[test]
    fn test_types_layout() {
        let output = format(ReportView::Types(vec![ModeTotalView {
            mode: "built-in package".to_string(),
            seconds: 0.125,
            percent: 1.25,
            step_count: 2,
        }]));

        assert_eq!(output, "   0.125   1.25%  built-in package\n");
    }

    #[test]
    fn test_graph_dot_output() {
        let output = format(ReportView::Graph {
            target: Some("fmt".to_string()),
            nodes: vec![
                GraphNodeView {
                    id: 0,
                    mode: "build".to_string(),
                    package: "example.com/app".to_string(),
                    seconds: 1.0,
                },
                GraphNodeView {
                    id: 4,
                    mode: "build".to_string(),
                    package: "fmt".to_string(),
                    seconds: 0.5,
                },
            ],
            edges: vec![GraphEdgeView { from: 0, to: 4 }],
        });

        let expected = "digraph {\n\
            0 [label=<<FONT POINT-SIZE=\"12\">example.com</FONT><BR/><FONT POINT-SIZE=\"22\">app</FONT><BR/>build 1.000s>; shape=box];\n\
            \t0 -> 4;\n\
            4 [label=<<FONT POINT-SIZE=\"12\">.</FONT><BR/><FONT POINT-SIZE=\"22\">fmt</FONT><BR/>build 0.500s>; shape=box];\n\
            }\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_graph_edges_follow_their_source_node() {
        let node = |id| GraphNodeView {
            id,
            mode: "build".to_string(),
            package: format!("x.io/p{}", id),
            seconds: 0.0,
        };
        // Edges in no particular order still land under their source
        let output = format(ReportView::Graph {
            target: None,
            nodes: vec![node(0), node(1), node(2)],
            edges: vec![
                GraphEdgeView { from: 1, to: 2 },
                GraphEdgeView { from: 0, to: 1 },
                GraphEdgeView { from: 0, to: 2 },
            ],
        });

        let edge_lines: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with('\t') || l.contains("[label="))
            .map(|l| if l.starts_with('\t') { l } else { &l[..1] })
            .collect();
        assert_eq!(
            edge_lines,
            vec!["0", "\t0 -> 1;", "\t0 -> 2;", "1", "\t1 -> 2;", "2"]
        );
    }

    #[test]
    fn test_large_graph_renders_every_edge_once() {
        let count = 5000;
        let nodes: Vec<GraphNodeView> = (0..count)
            .map(|id| GraphNodeView {
                id,
                mode: "build".to_string(),
                package: format!("x.io/p{}", id),
                seconds: 0.0,
            })
            .collect();
        let edges: Vec<GraphEdgeView> = (1..count)
            .flat_map(|to| [GraphEdgeView { from: 0, to }, GraphEdgeView { from: to - 1, to }])
            .collect();

        let output = format(ReportView::Graph {
            target: None,
            nodes,
            edges: edges.clone(),
        });

        let edge_count = output.lines().filter(|l| l.starts_with('\t')).count();
        assert_eq!(edge_count, edges.len());
    }

    #[test]
    fn test_empty_graph() {
        let output = format(ReportView::Graph {
            target: None,
            nodes: vec![],
            edges: vec![],
        });
        assert_eq!(output, "digraph {\n}\n");
    }

    #[test]
    fn test_split_package() {
        assert_eq!(TextFormatter::split_package("a.io/b/c"), ("a.io/b", "c"));
        assert_eq!(TextFormatter::split_package("fmt"), (".", "fmt"));
        assert_eq!(TextFormatter::split_package(""), (".", "."));
    }

    #[test]
    fn test_labels_are_escaped() {
        assert_eq!(
            TextFormatter::escape_html("a<b>&c"),
            "a&lt;b&gt;&amp;c"
        );
    }
}
