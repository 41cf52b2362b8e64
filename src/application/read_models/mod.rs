//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of analysis results for formatters.

pub mod analysis_read_model;
pub mod analysis_read_model_builder;
pub mod report_views;

pub use analysis_read_model::{AnalysisReadModel, ReportMetadataView, TraceSummaryView};
pub use analysis_read_model_builder::AnalysisReadModelBuilder;
pub use report_views::{
    GraphEdgeView, GraphNodeView, ModeTotalView, ReportView, TopStepView, TreeRowView,
};
