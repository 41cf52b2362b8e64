use super::StepId;
use std::collections::HashMap;
use std::time::Duration;

/// One segment of the package-path hierarchy
///
/// A node is either backed by exactly one package's build step
/// (`origin == Some(id)`) or synthetic: a directory-like prefix that only
/// exists because deeper packages share it. Children are keyed by their
/// full path and owned by their parent; ordering is applied when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    pub(crate) path: String,
    pub(crate) depth: usize,
    pub(crate) cumulative: Duration,
    pub(crate) origin: Option<StepId>,
    pub(crate) children: HashMap<String, PathNode>,
}

impl PathNode {
    /// Label of the synthetic root node
    pub const ROOT_LABEL: &'static str = "(root)";

    pub fn root() -> Self {
        Self::synthetic(Self::ROOT_LABEL.to_string(), 0)
    }

    pub fn synthetic(path: String, depth: usize) -> Self {
        Self {
            path,
            depth,
            cumulative: Duration::ZERO,
            origin: None,
            children: HashMap::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cumulative_duration(&self) -> Duration {
        self.cumulative
    }

    pub fn origin(&self) -> Option<StepId> {
        self.origin
    }

    pub fn is_synthetic(&self) -> bool {
        self.origin.is_none()
    }

    pub fn children(&self) -> &HashMap<String, PathNode> {
        &self.children
    }

    pub fn child(&self, path: &str) -> Option<&PathNode> {
        self.children.get(path)
    }

    /// Finds the node for `path` below this one, following prefix children
    ///
    /// A child only leads on when `path` continues past it at a `/`, so the
    /// `std/` node of an empty package is a sibling of `std/fmt`, not its
    /// parent.
    pub fn find(&self, path: &str) -> Option<&PathNode> {
        let mut node = self;
        loop {
            if node.path == path {
                return Some(node);
            }
            node = node.children.iter().find_map(|(child_path, child)| {
                let is_prefix = path.starts_with(child_path.as_str())
                    && (path.len() == child_path.len()
                        || path[child_path.len()..].starts_with('/'));
                is_prefix.then_some(child)
            })?;
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }
}
