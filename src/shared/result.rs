/// Crate-wide Result alias; errors propagate as `anyhow::Error` and carry
/// a [`TraceError`](crate::shared::error::TraceError) where one applies.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
