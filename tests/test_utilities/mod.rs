/// Shared helpers for integration tests
pub mod mocks;

/// The sample trace under `tests/fixtures/`
pub const FIXTURE_TRACE: &str = include_str!("../fixtures/compile.json");
