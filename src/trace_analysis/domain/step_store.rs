use super::{BuildStep, StepId};
use crate::shared::error::TraceError;
use crate::shared::Result;
use std::time::Duration;

/// StepStore aggregate holding the decoded build steps of one trace
///
/// Steps are indexed by their dense id. Construction checks exactly what
/// the traversals rely on: every id equals its position and every
/// dependency id points inside the sequence. Nothing else about the graph
/// (cycles, orphan steps) is validated.
#[derive(Debug, Clone)]
pub struct StepStore {
    steps: Vec<BuildStep>,
    total: Duration,
}

impl StepStore {
    pub fn new(steps: Vec<BuildStep>) -> Result<Self> {
        let len = steps.len();
        for (index, step) in steps.iter().enumerate() {
            if step.id() != index {
                return Err(TraceError::Validation {
                    message: format!(
                        "step at position {} has ID {}; IDs must be dense and match their position",
                        index,
                        step.id()
                    ),
                }
                .into());
            }
            if let Some(dep) = step.dependencies().iter().find(|&&dep| dep >= len) {
                return Err(TraceError::Validation {
                    message: format!(
                        "step {} depends on step {}, but the trace only has {} steps",
                        index, dep, len
                    ),
                }
                .into());
            }
        }

        let total = steps.iter().map(BuildStep::duration).sum();
        Ok(Self { steps, total })
    }

    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    pub fn get(&self, id: StepId) -> Option<&BuildStep> {
        self.steps.get(id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step durations, whatever their mode
    pub fn total_duration(&self) -> Duration {
        self.total
    }

    /// Share of the grand total, in percent; zero for an all-instant trace
    pub fn percent_of_total(&self, duration: Duration) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        100.0 * duration.as_secs_f64() / self.total.as_secs_f64()
    }
}
