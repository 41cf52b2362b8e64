//! actiongraph - build time analysis for Go action graphs
//!
//! This library loads the action graph that `go build -debug-actiongraph`
//! records and answers four questions about it: which steps were slowest,
//! how build time adds up per package directory, which steps lie on a
//! dependency path to a given package, and how time splits across step
//! modes. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`trace_analysis`): Build steps, the package tree and the reachability search
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use actiongraph::prelude::*;
//! use chrono::Utc;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let trace_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AnalyzeTraceUseCase::new(trace_reader, progress_reporter);
//!
//! // Execute
//! let request = AnalysisRequest::new(
//!     TraceSource::File(PathBuf::from("compile.json")),
//!     AnalysisQuery::Graph { target: Some("net/http".to_string()) },
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = AnalysisReadModelBuilder::build(&response, Utc::now());
//! let output = TextFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod trace_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter, TraceParser,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{
        AnalysisQuery, AnalysisReport, AnalysisRequest, AnalysisResponse, OutputFormat,
    };
    pub use crate::application::read_models::{AnalysisReadModel, AnalysisReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeTraceUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, TraceReader, TraceSource,
    };
    pub use crate::trace_analysis::domain::{BuildStep, PathNode, ReachabilityMark, StepStore};
    pub use crate::trace_analysis::policies::StandardLibraryPolicy;
    pub use crate::trace_analysis::services::{
        HierarchicalAggregator, ReachabilityFilter, StepRanking, TreeWalker,
    };
    pub use crate::shared::Result;
}
