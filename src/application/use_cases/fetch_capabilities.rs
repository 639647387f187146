use crate::capability_report::domain::Capability;
use crate::ports::outbound::{BusyGuard, BusyIndicator, CapabilityPageSource};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// All records of one fetch cycle, in page order
#[derive(Debug, Clone, Default)]
pub struct FetchedCapabilities {
    pub records: Vec<Capability>,
    pub pages: usize,
}

/// FetchCapabilitiesUseCase - paginated fetch of the full capability set
///
/// Requests pages one after another, starting without a cursor and following
/// `end_cursor` until the source reports no next page. The busy indicator is
/// held for the whole loop and released on every exit path. Any page failure
/// aborts the loop and nothing fetched so far is returned.
///
/// A page claiming a next page without an end cursor is a `Query` error
/// rather than the end of the data.
///
/// # Type Parameters
/// * `S` - CapabilityPageSource implementation
/// * `B` - BusyIndicator implementation
pub struct FetchCapabilitiesUseCase<S, B> {
    page_source: S,
    busy_indicator: B,
}

impl<S, B> FetchCapabilitiesUseCase<S, B>
where
    S: CapabilityPageSource,
    B: BusyIndicator,
{
    pub fn new(page_source: S, busy_indicator: B) -> Self {
        Self {
            page_source,
            busy_indicator,
        }
    }

    pub async fn execute(&self) -> Result<FetchedCapabilities> {
        let _busy = BusyGuard::show(&self.busy_indicator);

        let mut fetched = FetchedCapabilities::default();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.page_source.fetch_page(cursor.as_deref()).await?;
            fetched.pages += 1;
            fetched.records.extend(page.records);

            if !page.has_next_page {
                break;
            }

            match page.end_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    return Err(ReportError::Query {
                        details: format!(
                            "page {} reports a next page but no end cursor",
                            fetched.pages
                        ),
                    }
                    .into())
                }
            }
        }

        Ok(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::CapabilityPage;
    use async_trait::async_trait;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Serves scripted pages and records the cursor of every request
    struct ScriptedSource {
        pages: Vec<std::result::Result<CapabilityPage, String>>,
        cursors: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<std::result::Result<CapabilityPage, String>>) -> Self {
            Self {
                pages,
                cursors: Mutex::new(Vec::new()),
            }
        }

        fn cursors(&self) -> Vec<Option<String>> {
            self.cursors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CapabilityPageSource for ScriptedSource {
        async fn fetch_page(&self, after: Option<&str>) -> Result<CapabilityPage> {
            let mut cursors = self.cursors.lock().unwrap();
            let request_no = cursors.len();
            cursors.push(after.map(|s| s.to_string()));
            match self.pages.get(request_no) {
                Some(Ok(page)) => Ok(page.clone()),
                Some(Err(message)) => anyhow::bail!("{}", message),
                None => anyhow::bail!("no page scripted for request {}", request_no),
            }
        }
    }

    #[derive(Default)]
    struct CountingIndicator {
        shown: AtomicUsize,
        hidden: AtomicUsize,
    }

    impl BusyIndicator for &CountingIndicator {
        fn show(&self) {
            self.shown.fetch_add(1, Ordering::SeqCst);
        }

        fn hide(&self) {
            self.hidden.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn page(ids: &[&str], next: Option<&str>) -> std::result::Result<CapabilityPage, String> {
        Ok(CapabilityPage {
            records: ids
                .iter()
                .map(|id| {
                    Capability::new(id.to_string(), id.to_string(), 1, None, BTreeSet::new())
                        .unwrap()
                })
                .collect(),
            has_next_page: next.is_some(),
            end_cursor: next.map(|c| c.to_string()),
        })
    }

    #[tokio::test]
    async fn test_follows_cursors_until_last_page() {
        let indicator = CountingIndicator::default();
        let source = ScriptedSource::new(vec![
            page(&["a", "b"], Some("c1")),
            page(&["c"], Some("c2")),
            page(&["d"], None),
        ]);
        let use_case = FetchCapabilitiesUseCase::new(source, &indicator);

        let fetched = use_case.execute().await.unwrap();

        assert_eq!(fetched.pages, 3);
        let ids: Vec<&str> = fetched.records.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(
            use_case.page_source.cursors(),
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
        assert_eq!(indicator.shown.load(Ordering::SeqCst), 1);
        assert_eq!(indicator.hidden.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_single_empty_page() {
        let indicator = CountingIndicator::default();
        let use_case =
            FetchCapabilitiesUseCase::new(ScriptedSource::new(vec![page(&[], None)]), &indicator);

        let fetched = use_case.execute().await.unwrap();
        assert_eq!(fetched.pages, 1);
        assert!(fetched.records.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_aborts_and_releases_indicator() {
        let indicator = CountingIndicator::default();
        let source = ScriptedSource::new(vec![
            page(&["a"], Some("c1")),
            Err("connection reset".to_string()),
            page(&["never"], None),
        ]);
        let use_case = FetchCapabilitiesUseCase::new(source, &indicator);

        let err = use_case.execute().await.unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert_eq!(use_case.page_source.cursors().len(), 2);
        assert_eq!(indicator.shown.load(Ordering::SeqCst), 1);
        assert_eq!(indicator.hidden.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_next_page_without_cursor_is_query_error() {
        let indicator = CountingIndicator::default();
        let broken = Ok(CapabilityPage {
            records: vec![],
            has_next_page: true,
            end_cursor: None,
        });
        let use_case = FetchCapabilitiesUseCase::new(ScriptedSource::new(vec![broken]), &indicator);

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Query { .. })
        ));
        assert_eq!(indicator.hidden.load(Ordering::SeqCst), 1);
    }
}
