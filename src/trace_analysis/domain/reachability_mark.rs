use std::fmt;

/// Per-step classification used by the reachability search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReachabilityMark {
    /// Permanently excluded: a `nop` step, or a fully explored dead end
    Avoided,
    /// Not classified yet; steps never reached from the root stay here
    #[default]
    Unknown,
    /// Lies on at least one path from the root to the target
    Kept,
}

impl ReachabilityMark {
    pub fn is_kept(self) -> bool {
        self == ReachabilityMark::Kept
    }
}

impl fmt::Display for ReachabilityMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReachabilityMark::Avoided => write!(f, "avoided"),
            ReachabilityMark::Unknown => write!(f, "unknown"),
            ReachabilityMark::Kept => write!(f, "kept"),
        }
    }
}
