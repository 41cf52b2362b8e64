use crate::shared::error::TraceError;
use crate::shared::Result;
use crate::trace_analysis::domain::{ReachabilityMark, StepId, StepStore};
use std::collections::BTreeSet;

/// Induced subgraph of the steps kept by a reachability query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachabilityGraph {
    pub nodes: BTreeSet<StepId>,
    /// `(from, to)` pairs, `from` depending on `to`
    pub edges: BTreeSet<(StepId, StepId)>,
}

/// ReachabilityFilter service answering "why is this package built?"
///
/// Marks every step on a dependency path from the build root to a target
/// step. The search is an iterative depth-first walk over an explicit stack
/// of dependency lists; each frame's head is the step being explored at that
/// level. Finding a `Kept` step marks every frame head on the stack `Kept`,
/// and every frame head that completes without becoming `Kept` is memoized
/// as `Avoided`, so no step is explored twice.
pub struct ReachabilityFilter;

impl ReachabilityFilter {
    /// The first `build` step in sequence order
    pub fn find_root(store: &StepStore) -> Result<StepId> {
        store
            .steps()
            .iter()
            .find(|step| step.mode().is_build())
            .map(|step| step.id())
            .ok_or_else(|| TraceError::NoRootStep.into())
    }

    /// The first `build` step whose package equals `package` exactly
    pub fn find_target(store: &StepStore, package: &str) -> Result<StepId> {
        store
            .steps()
            .iter()
            .find(|step| step.mode().is_build() && step.package() == package)
            .map(|step| step.id())
            .ok_or_else(|| {
                TraceError::PackageNotFound {
                    package: package.to_string(),
                }
                .into()
            })
    }

    /// Classifies every step relative to the path from `root` to `target`
    ///
    /// `nop` steps are always `Avoided`. Without a target, or with an empty
    /// one, every other step is `Kept` and no search runs.
    pub fn compute(
        store: &StepStore,
        root: StepId,
        target: Option<&str>,
    ) -> Result<Vec<ReachabilityMark>> {
        let mut marks: Vec<ReachabilityMark> = store
            .steps()
            .iter()
            .map(|step| {
                if step.mode().is_nop() {
                    ReachabilityMark::Avoided
                } else {
                    ReachabilityMark::Unknown
                }
            })
            .collect();

        let Some(package) = target.filter(|t| !t.is_empty()) else {
            for mark in marks.iter_mut().filter(|m| **m == ReachabilityMark::Unknown) {
                *mark = ReachabilityMark::Kept;
            }
            return Ok(marks);
        };

        let target = Self::find_target(store, package)?;
        marks[target] = ReachabilityMark::Kept;
        Self::search(store, root, &mut marks);
        Ok(marks)
    }

    /// Runs the reachability query and collects the graph to render
    ///
    /// A trace without any `build` step has no root and fails even when no
    /// target is given.
    pub fn why(store: &StepStore, target: Option<&str>) -> Result<ReachabilityGraph> {
        let root = Self::find_root(store)?;
        let marks = Self::compute(store, root, target)?;

        let mut graph = ReachabilityGraph::default();
        for step in store.steps().iter().filter(|s| marks[s.id()].is_kept()) {
            graph.nodes.insert(step.id());
            graph.edges.extend(
                step.dependencies()
                    .iter()
                    .filter(|&&dep| marks[dep].is_kept())
                    .map(|&dep| (step.id(), dep)),
            );
        }
        Ok(graph)
    }

    fn search(store: &StepStore, root: StepId, marks: &mut [ReachabilityMark]) {
        // Stack level at which a step's dependency frame was pushed. A step
        // met again while its frame is still open closes a cycle.
        let mut open_at: Vec<Option<usize>> = vec![None; marks.len()];
        let start = [root];
        let mut stack: Vec<&[StepId]> = vec![&start[..]];

        while let Some(&frame) = stack.last() {
            let level = stack.len() - 1;
            let current = frame[0];

            match marks[current] {
                ReachabilityMark::Avoided => {}
                ReachabilityMark::Unknown if open_at[current].is_some() => {}
                ReachabilityMark::Unknown => {
                    let deps = store.steps()[current].dependencies();
                    if !deps.is_empty() {
                        open_at[current] = Some(level);
                        stack.push(deps);
                        continue;
                    }
                }
                ReachabilityMark::Kept => {
                    for frame in &stack {
                        marks[frame[0]] = ReachabilityMark::Kept;
                    }
                }
            }

            // Unwind completed frames, advancing the innermost unfinished one.
            while let Some(&frame) = stack.last() {
                let level = stack.len() - 1;
                let head = frame[0];
                if open_at[head] == Some(level) {
                    open_at[head] = None;
                }
                if !marks[head].is_kept() && open_at[head].is_none() {
                    marks[head] = ReachabilityMark::Avoided;
                }

                if frame.len() == 1 {
                    stack.pop();
                } else {
                    stack[level] = &frame[1..];
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace_analysis::domain::{BuildStep, StepMode};
    use chrono::{TimeZone, Utc};

    use ReachabilityMark::{Avoided, Kept, Unknown};

    fn store(steps: Vec<(&str, &str, Vec<StepId>)>) -> StepStore {
        let steps = steps
            .into_iter()
            .enumerate()
            .map(|(id, (mode, package, deps))| {
                BuildStep::new(
                    id,
                    StepMode::from_tag(mode),
                    package.to_string(),
                    deps,
                    Utc.timestamp_opt(0, 0).unwrap(),
                    Utc.timestamp_opt(1, 0).unwrap(),
                )
            })
            .collect();
        StepStore::new(steps).unwrap()
    }

    fn kept(marks: &[ReachabilityMark]) -> Vec<StepId> {
        marks
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_kept())
            .map(|(id, _)| id)
            .collect()
    }

    #[test]
    fn test_three_step_example() {
        let store = store(vec![
            ("build", "a", vec![1]),
            ("build", "b", vec![]),
            ("nop", "", vec![1]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("b")).unwrap();
        assert_eq!(marks, vec![Kept, Kept, Avoided]);

        let graph = ReachabilityFilter::why(&store, Some("b")).unwrap();
        assert_eq!(graph.nodes, BTreeSet::from([0, 1]));
        assert_eq!(graph.edges, BTreeSet::from([(0, 1)]));
    }

    #[test]
    fn test_no_target_keeps_all_but_nop() {
        let store = store(vec![
            ("build", "a", vec![1, 2]),
            ("build", "b", vec![]),
            ("nop", "", vec![0, 1]),
            ("link", "a", vec![0]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, None).unwrap();
        assert_eq!(marks, vec![Kept, Kept, Avoided, Kept]);

        let graph = ReachabilityFilter::why(&store, None).unwrap();
        assert_eq!(graph.nodes, BTreeSet::from([0, 1, 3]));
        assert_eq!(graph.edges, BTreeSet::from([(0, 1), (3, 0)]));
    }

    #[test]
    fn test_empty_target_behaves_like_no_target() {
        let store = store(vec![
            ("build", "a", vec![1, 2]),
            ("build", "b", vec![]),
            ("nop", "", vec![0, 1]),
        ]);

        assert_eq!(
            ReachabilityFilter::compute(&store, 0, Some("")).unwrap(),
            ReachabilityFilter::compute(&store, 0, None).unwrap()
        );
        assert_eq!(
            ReachabilityFilter::why(&store, Some("")).unwrap(),
            ReachabilityFilter::why(&store, None).unwrap()
        );
    }

    #[test]
    fn test_diamond_keeps_both_branches() {
        // 0 -> {1, 2}, 1 -> 3, 2 -> {3, 4}, 4 is a dead end
        let store = store(vec![
            ("build", "root", vec![1, 2]),
            ("build", "left", vec![3]),
            ("build", "right", vec![3, 4]),
            ("build", "target", vec![]),
            ("build", "other", vec![]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(kept(&marks), vec![0, 1, 2, 3]);
        assert_eq!(marks[4], Avoided);
    }

    #[test]
    fn test_unreachable_steps_stay_unknown() {
        let store = store(vec![
            ("build", "root", vec![1]),
            ("build", "target", vec![]),
            ("build", "island", vec![1]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(marks, vec![Kept, Kept, Unknown]);

        let graph = ReachabilityFilter::why(&store, Some("target")).unwrap();
        assert!(!graph.nodes.contains(&2));
    }

    #[test]
    fn test_search_does_not_descend_past_target() {
        let store = store(vec![
            ("build", "root", vec![1]),
            ("build", "target", vec![2]),
            ("build", "below", vec![]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(marks, vec![Kept, Kept, Unknown]);
    }

    #[test]
    fn test_nop_steps_block_paths() {
        let store = store(vec![
            ("build", "root", vec![1, 2]),
            ("nop", "", vec![3]),
            ("build", "via", vec![3]),
            ("build", "target", vec![]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(kept(&marks), vec![0, 2, 3]);
    }

    #[test]
    fn test_memoized_dead_ends_are_shared() {
        // Both branches reach the dead end 3; the second visit must not
        // re-explore it and neither branch may become kept through it.
        let store = store(vec![
            ("build", "root", vec![1, 2, 4]),
            ("build", "a", vec![3]),
            ("build", "b", vec![3]),
            ("build", "dead", vec![]),
            ("build", "target", vec![]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(marks, vec![Kept, Avoided, Avoided, Avoided, Kept]);
    }

    #[test]
    fn test_root_is_target() {
        let store = store(vec![("build", "root", vec![1]), ("build", "dep", vec![])]);

        let graph = ReachabilityFilter::why(&store, Some("root")).unwrap();
        assert_eq!(graph.nodes, BTreeSet::from([0]));
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_target_must_be_a_build_step() {
        let store = store(vec![("build", "root", vec![1]), ("link", "linked", vec![])]);

        let err = ReachabilityFilter::why(&store, Some("linked")).unwrap_err();
        assert!(err.to_string().contains("\"linked\""));
    }

    #[test]
    fn test_missing_target_is_not_found() {
        let store = store(vec![("build", "root", vec![])]);

        let err = ReachabilityFilter::why(&store, Some("nowhere")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TraceError>(),
            Some(TraceError::PackageNotFound { .. })
        ));
    }

    #[test]
    fn test_no_build_step_is_no_root() {
        let store = store(vec![("link", "a", vec![]), ("nop", "", vec![0])]);

        for target in [None, Some("a")] {
            let err = ReachabilityFilter::why(&store, target).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<TraceError>(),
                Some(TraceError::NoRootStep)
            ));
        }
    }

    #[test]
    fn test_cycle_terminates_and_keeps_real_path() {
        // 1 and 2 depend on each other; 1 also reaches the target.
        let store = store(vec![
            ("build", "root", vec![1]),
            ("build", "a", vec![2, 3]),
            ("build", "b", vec![1]),
            ("build", "target", vec![]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(marks, vec![Kept, Kept, Avoided, Kept]);
    }

    #[test]
    fn test_cycle_without_target_path_is_avoided() {
        let store = store(vec![
            ("build", "root", vec![1, 3]),
            ("build", "a", vec![2]),
            ("build", "b", vec![1]),
            ("build", "target", vec![]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(marks, vec![Kept, Avoided, Avoided, Kept]);
    }

    #[test]
    fn test_self_dependency() {
        let store = store(vec![("build", "root", vec![0, 1]), ("build", "target", vec![])]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();
        assert_eq!(marks, vec![Kept, Kept]);
    }

    #[test]
    fn test_kept_set_matches_path_enumeration() {
        let store = store(vec![
            ("build", "root", vec![1, 2, 5]),
            ("build", "a", vec![3, 4]),
            ("build", "b", vec![4, 6]),
            ("build", "c", vec![]),
            ("build", "target", vec![]),
            ("build", "d", vec![2]),
            ("build", "e", vec![]),
        ]);

        let marks = ReachabilityFilter::compute(&store, 0, Some("target")).unwrap();

        // Steps on some root -> target path, found by brute force.
        let mut on_path = vec![false; store.len()];
        let mut paths = vec![vec![0]];
        while let Some(path) = paths.pop() {
            let last = *path.last().unwrap();
            if last == 4 {
                for &id in &path {
                    on_path[id] = true;
                }
                continue;
            }
            for &dep in store.get(last).unwrap().dependencies() {
                let mut next = path.clone();
                next.push(dep);
                paths.push(next);
            }
        }

        for (id, mark) in marks.iter().enumerate() {
            assert_eq!(mark.is_kept(), on_path[id], "step {id}");
        }
    }
}
