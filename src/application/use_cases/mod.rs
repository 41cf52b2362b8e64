/// Use cases module containing application business logic orchestration
mod analyze_trace;

pub use analyze_trace::AnalyzeTraceUseCase;
