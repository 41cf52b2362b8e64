use crate::trace_analysis::domain::{BuildStep, StepMode, StepStore};
use std::collections::HashMap;
use std::time::Duration;

/// A step in the slowest-first ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStep<'a> {
    pub step: &'a BuildStep,
    /// Share of the grand total taken by this step and every step ranked
    /// before it
    pub cumulative_percent: f64,
}

/// Total time spent in one step mode
#[derive(Debug, Clone, PartialEq)]
pub struct ModeTotal {
    pub mode: StepMode,
    pub duration: Duration,
    pub percent: f64,
    pub step_count: usize,
}

/// StepRanking service for the flat (non-hierarchical) time breakdowns
pub struct StepRanking;

impl StepRanking {
    /// Steps ordered by descending duration, at most `limit` of them
    ///
    /// Equal durations keep trace order.
    pub fn slowest(store: &StepStore, limit: Option<usize>) -> Vec<RankedStep<'_>> {
        let mut ranked: Vec<&BuildStep> = store.steps().iter().collect();
        ranked.sort_by(|a, b| b.duration().cmp(&a.duration()));

        let mut running = Duration::ZERO;
        ranked
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|step| {
                running += step.duration();
                RankedStep {
                    step,
                    cumulative_percent: store.percent_of_total(running),
                }
            })
            .collect()
    }

    /// Durations summed per mode, heaviest mode first, ties by mode name
    pub fn mode_totals(store: &StepStore) -> Vec<ModeTotal> {
        let mut totals: HashMap<&StepMode, (Duration, usize)> = HashMap::new();
        for step in store.steps() {
            let entry = totals.entry(step.mode()).or_default();
            entry.0 += step.duration();
            entry.1 += 1;
        }

        let mut totals: Vec<ModeTotal> = totals
            .into_iter()
            .map(|(mode, (duration, step_count))| ModeTotal {
                mode: mode.clone(),
                duration,
                percent: store.percent_of_total(duration),
                step_count,
            })
            .collect();
        totals.sort_by(|a, b| {
            b.duration
                .cmp(&a.duration)
                .then_with(|| a.mode.as_str().cmp(b.mode.as_str()))
        });
        totals
    }
}
