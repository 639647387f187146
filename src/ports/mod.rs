/// Ports module defining interfaces for hexagonal architecture
///
/// The report core is driven directly through `ReportSession`; every
/// infrastructure dependency sits behind an outbound port.
pub mod outbound;
