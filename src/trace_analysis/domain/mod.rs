pub mod build_step;
pub mod path_node;
pub mod reachability_mark;
pub mod step_store;

pub use build_step::{BuildStep, StepId, StepMode};
pub use path_node::PathNode;
pub use reachability_mark::ReachabilityMark;
pub use step_store::StepStore;
