/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound ports (driven ports - infrastructure interfaces) exist;
/// the CLI drives the use case directly.
pub mod outbound;
