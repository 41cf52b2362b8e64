use crate::trace_analysis::domain::{PathNode, StepId, StepStore};
use std::time::Duration;

/// One rendered line of the package tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow<'a> {
    pub path: &'a str,
    pub depth: usize,
    pub origin: Option<StepId>,
    /// Duration of the node's own build step; `None` for synthetic nodes
    pub own_duration: Option<Duration>,
    pub cumulative_duration: Duration,
    pub cumulative_percent: f64,
    /// Nesting level in the rendered output, independent of `depth`
    pub indent: usize,
}

/// TreeWalker service producing the depth-first rendering order of a tree
pub struct TreeWalker;

impl TreeWalker {
    /// Starts a fresh walk over `root`
    ///
    /// Nodes whose depth exceeds `level` are skipped together with their
    /// subtree. Siblings are visited heaviest first, ties by path.
    pub fn walk<'a>(root: &'a PathNode, store: &'a StepStore, level: Option<usize>) -> TreeRows<'a> {
        TreeRows {
            store,
            level,
            groups: vec![vec![root].into_iter()],
        }
    }

    fn ordered_children(node: &PathNode) -> Vec<&PathNode> {
        let mut children: Vec<&PathNode> = node.children().values().collect();
        children.sort_by(|a, b| {
            b.cumulative_duration()
                .cmp(&a.cumulative_duration())
                .then_with(|| a.path().cmp(b.path()))
        });
        children
    }
}

/// Lazy iterator over the rows of a tree walk
///
/// Holds an explicit stack of sibling groups instead of recursing, so deep
/// package hierarchies cost heap rather than call stack.
pub struct TreeRows<'a> {
    store: &'a StepStore,
    level: Option<usize>,
    groups: Vec<std::vec::IntoIter<&'a PathNode>>,
}

impl<'a> Iterator for TreeRows<'a> {
    type Item = TreeRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let indent = self.groups.len().checked_sub(1)?;
            let Some(node) = self.groups[indent].next() else {
                self.groups.pop();
                continue;
            };
            if self.level.is_some_and(|level| node.depth() > level) {
                continue;
            }

            if !node.children().is_empty() {
                self.groups
                    .push(TreeWalker::ordered_children(node).into_iter());
            }

            let cumulative_duration = node.cumulative_duration();
            return Some(TreeRow {
                path: node.path(),
                depth: node.depth(),
                origin: node.origin(),
                own_duration: node
                    .origin()
                    .and_then(|id| self.store.get(id))
                    .map(|step| step.duration()),
                cumulative_duration,
                cumulative_percent: self.store.percent_of_total(cumulative_duration),
                indent,
            });
        }
    }
}
