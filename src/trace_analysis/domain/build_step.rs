use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Dense step identifier; doubles as the index into the step sequence
pub type StepId = usize;

/// Mode tag of a build step
///
/// Only `build` and `nop` carry meaning for the analyses; every other tag
/// (`link`, `vet`, `built-in package`, ...) is kept verbatim as an opaque
/// category so it can still be grouped and printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepMode {
    /// Compiles one package
    Build,
    /// Grouping step with large fan-out and no work of its own
    Nop,
    /// Any other mode tag
    Other(String),
}

impl StepMode {
    pub const BUILD_TAG: &'static str = "build";
    pub const NOP_TAG: &'static str = "nop";

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::BUILD_TAG => StepMode::Build,
            Self::NOP_TAG => StepMode::Nop,
            other => StepMode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StepMode::Build => Self::BUILD_TAG,
            StepMode::Nop => Self::NOP_TAG,
            StepMode::Other(tag) => tag,
        }
    }

    pub fn is_build(&self) -> bool {
        matches!(self, StepMode::Build)
    }

    pub fn is_nop(&self) -> bool {
        matches!(self, StepMode::Nop)
    }
}

impl fmt::Display for StepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of compiler work recorded in the action graph
///
/// Immutable once loaded. Only the duration is kept from the timestamps;
/// it is clamped to zero if the trace records the end before the start.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildStep {
    id: StepId,
    mode: StepMode,
    package: String,
    dependencies: Vec<StepId>,
    duration: Duration,
}

impl BuildStep {
    pub fn new(
        id: StepId,
        mode: StepMode,
        package: String,
        dependencies: Vec<StepId>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        let duration = (end - start).to_std().unwrap_or(Duration::ZERO);
        Self {
            id,
            mode,
            package,
            dependencies,
            duration,
        }
    }

    /// A zero-length build step for `package`, used to shape focus trees
    pub fn synthetic(package: String) -> Self {
        Self::new(
            0,
            StepMode::Build,
            package,
            Vec::new(),
            DateTime::<Utc>::UNIX_EPOCH,
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    pub fn id(&self) -> StepId {
        self.id
    }

    pub fn mode(&self) -> &StepMode {
        &self.mode
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn dependencies(&self) -> &[StepId] {
        &self.dependencies
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
