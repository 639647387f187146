use crate::ports::outbound::{HostPlatform, ReportConfiguration, ReportSettings, ReportSetup};
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// StandaloneHost adapter for running the report outside an embedding host
///
/// The handshake answers with the configured base URL, and `ready` keeps the
/// accepted configuration so callers can inspect what would have been sent.
pub struct StandaloneHost {
    base_url: String,
    accepted: Mutex<Option<ReportConfiguration>>,
}

impl StandaloneHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            accepted: Mutex::new(None),
        }
    }

    /// Configuration accepted by the last `ready` call
    pub fn accepted_configuration(&self) -> Option<ReportConfiguration> {
        self.accepted.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl HostPlatform for StandaloneHost {
    async fn init(&self) -> Result<ReportSetup> {
        Ok(ReportSetup {
            settings: ReportSettings {
                base_url: self.base_url.clone(),
            },
        })
    }

    async fn ready(&self, configuration: &ReportConfiguration) -> Result<()> {
        if let Some(facet) = configuration.facets.iter().find(|f| f.key.trim().is_empty()) {
            return Err(ReportError::HostHandshake {
                details: format!(
                    "facet for {} has an empty key",
                    facet.fixed_fact_sheet_type
                ),
            }
            .into());
        }

        let mut accepted = self.accepted.lock().map_err(|_| ReportError::HostHandshake {
            details: "host state is poisoned".to_string(),
        })?;
        *accepted = Some(configuration.clone());
        Ok(())
    }
}
