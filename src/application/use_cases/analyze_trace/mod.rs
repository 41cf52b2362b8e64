use crate::application::dto::{
    AnalysisQuery, AnalysisReport, AnalysisRequest, AnalysisResponse, GraphNode, GraphReport,
    TopEntry, TreeEntry, TypeEntry,
};
use crate::ports::outbound::{ProgressReporter, TraceReader};
use crate::shared::Result;
use crate::trace_analysis::domain::StepStore;
use crate::trace_analysis::policies::StandardLibraryPolicy;
use crate::trace_analysis::services::{
    HierarchicalAggregator, ReachabilityFilter, StepRanking, TreeWalker,
};


/// AnalyzeTraceUseCase - Core use case for build trace analysis
///
/// This use case loads a trace through the injected reader and runs one
/// query over it. Every query reads the same immutable step store; the
/// tree and mark arrays it builds are dropped once the response is made.
///
/// # Type Parameters
/// * `TR` - TraceReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeTraceUseCase<TR, PR> {
    trace_reader: TR,
    progress_reporter: PR,
}

impl<TR, PR> AnalyzeTraceUseCase<TR, PR>
where
    TR: TraceReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeTraceUseCase with injected dependencies
    pub fn new(trace_reader: TR, progress_reporter: PR) -> Self {
        Self {
            trace_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Arguments
    /// * `request` - Trace source and the query to run
    ///
    /// # Returns
    /// AnalysisResponse holding the report rows and trace totals
    ///
    /// # Errors
    /// Returns an error if the trace cannot be loaded, or if a graph query
    /// names an unknown package or the trace has no build step.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let store = self.load_trace(&request)?;

        let report = match &request.query {
            AnalysisQuery::Top { limit } => self.top(&store, *limit),
            AnalysisQuery::Tree { focus, level } => self.tree(&store, focus, *level),
            AnalysisQuery::Graph { target } => self.graph(&store, target.as_deref())?,
            AnalysisQuery::Types => self.types(&store),
        };

        self.progress_reporter.report_completion(&format!(
            "✨ {} analysis complete",
            request.query.command_name()
        ));

        Ok(AnalysisResponse {
            source: request.source.to_string(),
            step_count: store.len(),
            total_duration: store.total_duration(),
            report,
        })
    }

    /// Reads the trace, reporting progress
    fn load_trace(&self, request: &AnalysisRequest) -> Result<StepStore> {
        self.progress_reporter
            .report(&format!("📖 Loading build trace from: {}", request.source));

        let store = self.trace_reader.read_trace(&request.source)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} build step(s), {:.3}s of recorded work",
            store.len(),
            store.total_duration().as_secs_f64()
        ));
        if store.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: The build trace contains no steps.");
        }

        Ok(store)
    }

    fn top(&self, store: &StepStore, limit: Option<usize>) -> AnalysisReport {
        let entries = StepRanking::slowest(store, limit)
            .into_iter()
            .map(|ranked| TopEntry {
                id: ranked.step.id(),
                mode: ranked.step.mode().to_string(),
                package: ranked.step.package().to_string(),
                duration: ranked.step.duration(),
                cumulative_percent: ranked.cumulative_percent,
            })
            .collect();
        AnalysisReport::Top(entries)
    }

    fn tree(&self, store: &StepStore, focus: &[String], level: Option<usize>) -> AnalysisReport {
        let mut root = HierarchicalAggregator::build_tree(store.steps());

        if !focus.is_empty() {
            for package in focus {
                let trimmed = package.trim_end_matches(['/', '.']);
                if root.find(&StandardLibraryPolicy::tree_path(trimmed)).is_none() {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Package '{}' did not match any built package or directory.",
                        package
                    ));
                }
            }

            let keep = HierarchicalAggregator::focus_tree(focus);
            HierarchicalAggregator::prune_tree(&mut root, &keep);
        }

        let entries = TreeWalker::walk(&root, store, level)
            .map(|row| TreeEntry {
                path: row.path.to_string(),
                depth: row.depth,
                indent: row.indent,
                own_duration: row.own_duration,
                cumulative_duration: row.cumulative_duration,
                cumulative_percent: row.cumulative_percent,
            })
            .collect();
        AnalysisReport::Tree(entries)
    }

    fn graph(&self, store: &StepStore, target: Option<&str>) -> Result<AnalysisReport> {
        // An empty `--why` asks for the whole graph
        let target = target.filter(|t| !t.is_empty());
        if let Some(package) = target {
            self.progress_reporter
                .report(&format!("🔍 Tracing dependency paths to: {}", package));
        }

        let graph = ReachabilityFilter::why(store, target)?;

        self.progress_reporter.report(&format!(
            "📊 Keeping {} of {} step(s) and {} edge(s)",
            graph.nodes.len(),
            store.len(),
            graph.edges.len()
        ));

        let nodes = graph
            .nodes
            .iter()
            .filter_map(|&id| store.get(id))
            .map(|step| GraphNode {
                id: step.id(),
                mode: step.mode().to_string(),
                package: step.package().to_string(),
                duration: step.duration(),
            })
            .collect();

        Ok(AnalysisReport::Graph(GraphReport {
            target: target.map(str::to_string),
            nodes,
            edges: graph.edges.into_iter().collect(),
        }))
    }

    fn types(&self, store: &StepStore) -> AnalysisReport {
        let entries = StepRanking::mode_totals(store)
            .into_iter()
            .map(|total| TypeEntry {
                mode: total.mode.to_string(),
                duration: total.duration,
                percent: total.percent,
                step_count: total.step_count,
            })
            .collect();
        AnalysisReport::Types(entries)
    }
}
