use async_trait::async_trait;
use bizcap_chart::ports::outbound::{ReportSettings, ReportSetup};
use bizcap_chart::prelude::*;
use bizcap_chart::shared::error::ReportError;
use std::sync::{Arc, Mutex};

/// Mock HostPlatform recording the handshake
#[derive(Default, Clone)]
pub struct MockHostPlatform {
    pub init_calls: Arc<Mutex<usize>>,
    pub ready_configurations: Arc<Mutex<Vec<ReportConfiguration>>>,
    reject_init: bool,
}

impl MockHostPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose `init` always fails
    pub fn rejecting() -> Self {
        Self {
            reject_init: true,
            ..Self::default()
        }
    }

    pub fn init_count(&self) -> usize {
        *self.init_calls.lock().unwrap()
    }

    pub fn ready_count(&self) -> usize {
        self.ready_configurations.lock().unwrap().len()
    }
}

#[async_trait]
impl HostPlatform for MockHostPlatform {
    async fn init(&self) -> Result<ReportSetup> {
        *self.init_calls.lock().unwrap() += 1;

        if self.reject_init {
            return Err(ReportError::HostHandshake {
                details: "host refused init".to_string(),
            }
            .into());
        }

        Ok(ReportSetup {
            settings: ReportSettings {
                base_url: "https://mock.example.invalid".to_string(),
            },
        })
    }

    async fn ready(&self, configuration: &ReportConfiguration) -> Result<()> {
        self.ready_configurations
            .lock()
            .unwrap()
            .push(configuration.clone());
        Ok(())
    }
}
