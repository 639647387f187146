use crate::capability_report::domain::Capability;
use crate::shared::Result;
use async_trait::async_trait;

/// One page of a cursor connection over capability fact sheets
#[derive(Debug, Clone, Default)]
pub struct CapabilityPage {
    /// Records mapped from the page's edges, in response order
    pub records: Vec<Capability>,
    /// Whether the host reports more pages after this one
    pub has_next_page: bool,
    /// Opaque cursor for the next page; `None` once exhausted
    pub end_cursor: Option<String>,
}

/// CapabilityPageSource port for fetching pages of capability records
///
/// This port abstracts the GraphQL connection exposed by the host platform.
/// The fetch loop drives it strictly sequentially.
#[async_trait]
pub trait CapabilityPageSource: Send + Sync {
    /// Fetches the page following `after` (`None` for the first page)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be delivered (transport error)
    /// - The endpoint reports query errors or returns a malformed payload
    /// - A record fails validation (empty id or level 0); the whole page is
    ///   rejected instead of skipping that record
    async fn fetch_page(&self, after: Option<&str>) -> Result<CapabilityPage>;
}
