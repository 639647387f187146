use bizcap_chart::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock BusyIndicator counting show and hide calls
#[derive(Default, Clone)]
pub struct MockBusyIndicator {
    shows: Arc<AtomicUsize>,
    hides: Arc<AtomicUsize>,
}

impl MockBusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_count(&self) -> usize {
        self.shows.load(Ordering::SeqCst)
    }

    pub fn hide_count(&self) -> usize {
        self.hides.load(Ordering::SeqCst)
    }
}

impl BusyIndicator for MockBusyIndicator {
    fn show(&self) {
        self.shows.fetch_add(1, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.hides.fetch_add(1, Ordering::SeqCst);
    }
}
