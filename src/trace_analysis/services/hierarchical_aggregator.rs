use crate::trace_analysis::domain::{BuildStep, PathNode};
use crate::trace_analysis::policies::StandardLibraryPolicy;

/// HierarchicalAggregator service rolling step durations up the package tree
///
/// Pure business logic with no I/O. The tree it builds is owned by the
/// caller for the duration of one query.
pub struct HierarchicalAggregator;

impl HierarchicalAggregator {
    /// Builds the package tree from every `build` step
    ///
    /// Each package path is split at every `/`; a node exists for each
    /// prefix and every node on the walk, the root included, accumulates
    /// the step's duration. The node for the full path records the step
    /// id. Repeated builds of the same package add up.
    pub fn build_tree(steps: &[BuildStep]) -> PathNode {
        let mut root = PathNode::root();

        for step in steps.iter().filter(|s| s.mode().is_build()) {
            let package = StandardLibraryPolicy::tree_path(step.package());
            let duration = step.duration();

            root.cumulative += duration;
            let mut node = &mut root;
            for (depth, prefix) in Self::prefixes(&package).enumerate() {
                node = node
                    .children
                    .entry(prefix.to_string())
                    .or_insert_with(|| PathNode::synthetic(prefix.to_string(), depth + 1));
                node.cumulative += duration;
            }
            node.origin = Some(step.id());
        }

        root
    }

    /// Builds the tree describing which paths a pruned tree should keep
    ///
    /// Trailing `/` and `.` characters are trimmed from each focus path, so
    /// `./`-style arguments and `pkg/` both name the package itself.
    pub fn focus_tree(focus: &[String]) -> PathNode {
        let steps: Vec<BuildStep> = focus
            .iter()
            .map(|pkg| BuildStep::synthetic(pkg.trim_end_matches(['/', '.']).to_string()))
            .collect();
        Self::build_tree(&steps)
    }

    /// Narrows `root` to the branches leading to or below a path of `keep`
    ///
    /// Under synthetic keep nodes (ancestors of a focus path) children that
    /// are not in `keep` are dropped and depth is reset to zero. Under a
    /// focus path every child is kept and its depth is rebased on the focus
    /// node, so the focus renders at level zero and its descendants count
    /// up from there.
    pub fn prune_tree(root: &mut PathNode, keep: &PathNode) {
        let mut work: Vec<(&mut PathNode, KeepCursor<'_>)> = Vec::with_capacity(16);
        work.push((root, KeepCursor::from_node(keep)));

        while let Some((real, guide)) = work.pop() {
            if guide.concrete {
                for (path, child) in real.children.iter_mut() {
                    child.depth = child.depth.saturating_sub(guide.depth);
                    let next = guide
                        .child(path)
                        .map(KeepCursor::from_node)
                        .unwrap_or(KeepCursor::placeholder(guide.depth));
                    work.push((child, next));
                }
            } else {
                real.children
                    .retain(|path, _| guide.child(path).is_some());
                for (path, child) in real.children.iter_mut() {
                    child.depth = 0;
                    if let Some(kept) = guide.child(path) {
                        work.push((child, KeepCursor::from_node(kept)));
                    }
                }
            }
        }
    }

    /// Yields each `/`-boundary prefix of `package`, ending with the full path
    ///
    /// A `/` at index 0 is not a boundary, so `/a` yields only `/a`.
    fn prefixes(package: &str) -> impl Iterator<Item = &str> {
        package
            .match_indices('/')
            .map(|(index, _)| index)
            .filter(|&index| index > 0)
            .map(move |index| &package[..index])
            .chain(std::iter::once(package))
    }
}

/// Position in the keep tree paired with a real node during pruning
///
/// `node` is `None` for the zero-weight placeholders that stand in below a
/// focus path where the keep tree has no node of its own.
#[derive(Clone, Copy)]
struct KeepCursor<'k> {
    node: Option<&'k PathNode>,
    concrete: bool,
    depth: usize,
}

impl<'k> KeepCursor<'k> {
    fn from_node(node: &'k PathNode) -> Self {
        Self {
            node: Some(node),
            concrete: !node.is_synthetic(),
            depth: node.depth(),
        }
    }

    fn placeholder(depth: usize) -> Self {
        Self {
            node: None,
            concrete: true,
            depth,
        }
    }

    fn child(&self, path: &str) -> Option<&'k PathNode> {
        self.node.and_then(|n| n.child(path))
    }
}
