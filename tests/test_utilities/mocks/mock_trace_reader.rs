use actiongraph::prelude::*;

/// Mock TraceReader for testing
///
/// Parses fixed JSON content with the real parser, so the use case sees
/// exactly what the file reader would hand it.
pub struct MockTraceReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockTraceReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl TraceReader for MockTraceReader {
    fn read_trace(&self, source: &TraceSource) -> Result<StepStore> {
        if self.should_fail {
            anyhow::bail!("Mock trace read failure");
        }
        TraceParser::parse(&self.content, &source.to_string())
    }
}
