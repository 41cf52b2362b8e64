use crate::shared::error::TraceError;
use crate::shared::Result;
use crate::trace_analysis::domain::{BuildStep, StepId, StepMode, StepStore};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One action as written by `go build -debug-actiongraph`
///
/// Only the fields the analyses need are decoded; `Objdir`, `Cmd`,
/// `BuildID` and the rest are skipped by serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawAction {
    #[serde(rename = "ID")]
    id: StepId,
    #[serde(default)]
    mode: String,
    #[serde(default)]
    package: String,
    #[serde(default)]
    deps: Option<Vec<StepId>>,
    #[serde(default)]
    time_start: Option<DateTime<Utc>>,
    #[serde(default)]
    time_done: Option<DateTime<Utc>>,
}

impl RawAction {
    fn into_step(self) -> BuildStep {
        // An action without both timestamps never ran; give it no duration.
        let (start, end) = match (self.time_start, self.time_done) {
            (Some(start), Some(end)) => (start, end),
            (Some(at), None) | (None, Some(at)) => (at, at),
            (None, None) => (DateTime::<Utc>::UNIX_EPOCH, DateTime::<Utc>::UNIX_EPOCH),
        };

        BuildStep::new(
            self.id,
            StepMode::from_tag(&self.mode),
            self.package,
            self.deps.unwrap_or_default(),
            start,
            end,
        )
    }
}

/// TraceParser decodes action-graph JSON into a validated step store
pub struct TraceParser;

impl TraceParser {
    /// Parses `content`; `source_name` only appears in error messages
    pub fn parse(content: &str, source_name: &str) -> Result<StepStore> {
        let actions: Vec<RawAction> =
            serde_json::from_str(content).map_err(|e| TraceError::TraceParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            })?;

        let steps = actions.into_iter().map(RawAction::into_step).collect();
        StepStore::new(steps).map_err(|e| {
            TraceError::TraceParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TRACE: &str = r#"[
        {
            "ID": 0,
            "Mode": "build",
            "Package": "example.com/app",
            "Deps": [1],
            "Objdir": "/tmp/go-build/b001/",
            "Priority": 2,
            "TimeReady": "2023-05-01T10:00:00.000000000Z",
            "TimeStart": "2023-05-01T10:00:01.000000000Z",
            "TimeDone": "2023-05-01T10:00:03.500000000Z",
            "Cmd": ["compile", "-o", "x.a"]
        },
        {
            "ID": 1,
            "Mode": "build",
            "Package": "fmt",
            "TimeStart": "2023-05-01T10:00:00.250000000+02:00",
            "TimeDone": "2023-05-01T10:00:00.750000000+02:00"
        },
        {
            "ID": 2,
            "Mode": "nop",
            "Package": "",
            "Deps": null
        }
    ]"#;

    #[test]
    fn test_parse_trace() {
        let store = TraceParser::parse(TRACE, "compile.json").unwrap();
        assert_eq!(store.len(), 3);

        let app = store.get(0).unwrap();
        assert_eq!(app.package(), "example.com/app");
        assert!(app.mode().is_build());
        assert_eq!(app.dependencies(), &[1]);
        assert_eq!(app.duration(), Duration::from_millis(2500));

        let fmt = store.get(1).unwrap();
        assert_eq!(fmt.duration(), Duration::from_millis(500));
        assert!(fmt.dependencies().is_empty());
    }

    #[test]
    fn test_missing_timestamps_give_zero_duration() {
        let store = TraceParser::parse(TRACE, "compile.json").unwrap();
        let nop = store.get(2).unwrap();
        assert!(nop.mode().is_nop());
        assert_eq!(nop.duration(), Duration::ZERO);
        assert!(nop.dependencies().is_empty());
    }

    #[test]
    fn test_parse_empty_array() {
        let store = TraceParser::parse("[]", "compile.json").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = TraceParser::parse("{not json", "broken.json").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse build trace"));
        assert!(message.contains("broken.json"));
    }

    #[test]
    fn test_object_instead_of_array() {
        let result = TraceParser::parse(r#"{"ID": 0}"#, "compile.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_dangling_dependency_rejected() {
        let trace = r#"[{"ID": 0, "Mode": "build", "Package": "a.io/x", "Deps": [3]}]"#;
        let err = TraceParser::parse(trace, "compile.json").unwrap_err();
        assert!(err.to_string().contains("depends on step 3"));
    }

    #[test]
    fn test_sparse_ids_rejected() {
        let trace = r#"[{"ID": 1, "Mode": "build", "Package": "a.io/x"}]"#;
        let err = TraceParser::parse(trace, "compile.json").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TraceError>(),
            Some(TraceError::TraceParseError { .. })
        ));
    }
}
