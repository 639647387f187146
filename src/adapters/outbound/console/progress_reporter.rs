use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it doesn't interfere with chart output on stdout.
/// Set `quiet` to drop informational messages while keeping warnings and errors.
#[derive(Debug, Clone, Copy)]
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.green());
        }
    }
}
