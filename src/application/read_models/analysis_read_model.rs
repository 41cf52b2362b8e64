//! Analysis read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! a report and its metadata in a formatter-friendly shape.

use super::report_views::ReportView;

/// Main read model handed to report formatters
#[derive(Debug, Clone)]
pub struct AnalysisReadModel {
    pub metadata: ReportMetadataView,
    pub summary: TraceSummaryView,
    pub report: ReportView,
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp of report generation
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// View of the trace the report was computed from
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSummaryView {
    pub source: String,
    pub step_count: usize,
    /// Sum of all step durations; the base of every percentage
    pub total_seconds: f64,
}
