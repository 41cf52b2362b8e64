mod hierarchical_aggregator;
mod reachability_filter;
mod step_ranking;
mod tree_walker;

pub use hierarchical_aggregator::HierarchicalAggregator;
pub use reachability_filter::{ReachabilityFilter, ReachabilityGraph};
pub use step_ranking::{ModeTotal, RankedStep, StepRanking};
pub use tree_walker::{TreeRow, TreeRows, TreeWalker};
