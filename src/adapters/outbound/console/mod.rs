/// Console adapters writing to stderr
mod progress_reporter;
mod spinner_indicator;

pub use progress_reporter::StderrProgressReporter;
pub use spinner_indicator::SpinnerBusyIndicator;
