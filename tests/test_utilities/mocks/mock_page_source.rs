use async_trait::async_trait;
use bizcap_chart::prelude::*;
use bizcap_chart::shared::error::ReportError;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Builds a capability record for tests
pub fn capability(id: &str, name: &str, level: u32, parent: Option<&str>, apps: &[&str]) -> Capability {
    Capability::new(
        id.to_string(),
        name.to_string(),
        level,
        parent.map(str::to_string),
        apps.iter().map(|a| a.to_string()).collect::<BTreeSet<_>>(),
    )
    .unwrap()
}

/// Mock CapabilityPageSource serving scripted pages by cursor
///
/// The first request (no cursor) gets page 0; a request with cursor `c`
/// gets the page following the one whose `end_cursor` is `c`.
#[derive(Default, Clone)]
pub struct MockPageSource {
    pages: Vec<CapabilityPage>,
    pub requested_cursors: Arc<Mutex<Vec<Option<String>>>>,
    failing: Arc<AtomicBool>,
}

impl MockPageSource {
    pub fn new(pages: Vec<CapabilityPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Single final page holding every record
    pub fn single(records: Vec<Capability>) -> Self {
        Self::new(vec![CapabilityPage {
            records,
            has_next_page: false,
            end_cursor: None,
        }])
    }

    /// Makes every following request fail with a transport error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> usize {
        self.requested_cursors.lock().unwrap().len()
    }

    pub fn cursors(&self) -> Vec<Option<String>> {
        self.requested_cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl CapabilityPageSource for MockPageSource {
    async fn fetch_page(&self, after: Option<&str>) -> Result<CapabilityPage> {
        self.requested_cursors
            .lock()
            .unwrap()
            .push(after.map(str::to_string));

        if self.failing.load(Ordering::SeqCst) {
            return Err(ReportError::Transport {
                endpoint: "mock://capabilities".to_string(),
                details: "connection reset".to_string(),
            }
            .into());
        }

        let position = match after {
            None => Some(0),
            Some(cursor) => self
                .pages
                .iter()
                .position(|p| p.end_cursor.as_deref() == Some(cursor))
                .map(|i| i + 1),
        };

        position
            .and_then(|i| self.pages.get(i))
            .cloned()
            .ok_or_else(|| {
                ReportError::Query {
                    details: format!("unexpected cursor {:?}", after),
                }
                .into()
            })
    }
}
