/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (GraphQL endpoint, host, console, ...).
pub mod busy_indicator;
pub mod capability_page_source;
pub mod chart_formatter;
pub mod host_platform;
pub mod output_presenter;
pub mod progress_reporter;

pub use busy_indicator::{BusyGuard, BusyIndicator};
pub use capability_page_source::{CapabilityPage, CapabilityPageSource};
pub use chart_formatter::ChartFormatter;
pub use host_platform::{FacetConfig, HostPlatform, ReportConfiguration, ReportSettings, ReportSetup};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
