/// Use cases module containing application business logic orchestration
mod build_capability_report;
mod fetch_capabilities;

pub use build_capability_report::BuildCapabilityReportUseCase;
pub use fetch_capabilities::{FetchCapabilitiesUseCase, FetchedCapabilities};
