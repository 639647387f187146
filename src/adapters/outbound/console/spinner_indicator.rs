use crate::ports::outbound::BusyIndicator;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// SpinnerBusyIndicator adapter drawing an indicatif spinner on stderr
pub struct SpinnerBusyIndicator {
    message: String,
    spinner: RefCell<Option<ProgressBar>>,
}

impl SpinnerBusyIndicator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            spinner: RefCell::new(None),
        }
    }

    fn is_visible(&self) -> bool {
        self.spinner.borrow().is_some()
    }
}

impl Default for SpinnerBusyIndicator {
    fn default() -> Self {
        Self::new("Loading business capabilities...")
    }
}

impl BusyIndicator for SpinnerBusyIndicator {
    fn show(&self) {
        if self.is_visible() {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(self.message.clone());
        spinner.enable_steady_tick(TICK_INTERVAL);

        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn hide(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for SpinnerBusyIndicator {
    fn drop(&mut self) {
        self.hide();
    }
}
