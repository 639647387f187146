use super::fact_sheet_response::{parse_page, ALL_BUSINESS_CAPABILITIES_QUERY};
use crate::ports::outbound::{CapabilityPage, CapabilityPageSource};
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    first: u32,
    after: Option<&'a str>,
}

/// GraphQlCapabilityClient adapter fetching capability pages over HTTP
///
/// Posts the capability query to the configured endpoint, one page per call.
/// Failures are not retried; the fetch loop aborts on the first error.
pub struct GraphQlCapabilityClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    page_size: u32,
}

impl GraphQlCapabilityClient {
    const TIMEOUT_SECONDS: u64 = 30;
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Creates a client for `endpoint`, authenticating with `token` when given
    pub fn new(endpoint: String, token: Option<String>, page_size: u32) -> Result<Self> {
        Self::validate_endpoint(&endpoint)?;
        if page_size == 0 {
            return Err(ReportError::Validation {
                message: "page size must be at least 1".to_string(),
            }
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bizcap-chart/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            token,
            page_size,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn validate_endpoint(endpoint: &str) -> Result<()> {
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ReportError::Validation {
                message: format!(
                    "GraphQL endpoint must be an http(s) URL, got '{}'",
                    endpoint
                ),
            }
            .into());
        }
        Ok(())
    }

    fn transport_error(&self, details: String) -> ReportError {
        ReportError::Transport {
            endpoint: self.endpoint.clone(),
            details,
        }
    }

    async fn post_query(&self, after: Option<&str>) -> Result<String> {
        let body = GraphQlRequest {
            query: ALL_BUSINESS_CAPABILITIES_QUERY,
            variables: Variables {
                first: self.page_size,
                after,
            },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self
                .transport_error(format!("endpoint returned status code {}", response.status()))
                .into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e.to_string()))?;
        Ok(text)
    }
}

#[async_trait]
impl CapabilityPageSource for GraphQlCapabilityClient {
    async fn fetch_page(&self, after: Option<&str>) -> Result<CapabilityPage> {
        let body = self.post_query(after).await?;
        parse_page(&body)
    }
}
