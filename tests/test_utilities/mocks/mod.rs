/// Mock implementations for testing
mod mock_busy_indicator;
mod mock_host_platform;
mod mock_page_source;
mod mock_progress_reporter;

pub use mock_busy_indicator::MockBusyIndicator;
pub use mock_host_platform::MockHostPlatform;
pub use mock_page_source::{capability, MockPageSource};
pub use mock_progress_reporter::MockProgressReporter;
