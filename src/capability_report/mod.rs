/// Capability report domain - pure aggregation and ranking logic
///
/// Nothing in here performs I/O; records come in through the application layer.
pub mod domain;
pub mod policies;
pub mod services;
