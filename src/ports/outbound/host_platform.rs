use crate::shared::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Environment settings returned by the host handshake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Base URL of the host workspace
    pub base_url: String,
}

/// Result of the host initialization handshake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSetup {
    pub settings: ReportSettings,
}

/// Filter widget the host renders when it manages filtering itself
///
/// Filtered records come back through `ReportSession::apply_filtered_records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetConfig {
    pub key: String,
    pub fixed_fact_sheet_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

/// Options handed to the host once the report is ready
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfiguration {
    pub allow_table_view: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<FacetConfig>,
}

/// HostPlatform port for the embedding host's lifecycle handshake
#[async_trait]
pub trait HostPlatform: Send + Sync {
    /// Initialization handshake returning environment settings
    async fn init(&self) -> Result<ReportSetup>;

    /// Signals readiness with the report configuration
    async fn ready(&self, configuration: &ReportConfiguration) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_configuration_serializes_camel_case() {
        let configuration = ReportConfiguration {
            allow_table_view: false,
            facets: vec![FacetConfig {
                key: "main".to_string(),
                fixed_fact_sheet_type: "BusinessCapability".to_string(),
                attributes: vec![],
            }],
        };

        let json = serde_json::to_value(&configuration).unwrap();
        assert_eq!(json["allowTableView"], false);
        assert_eq!(json["facets"][0]["fixedFactSheetType"], "BusinessCapability");
        assert!(json["facets"][0].get("attributes").is_none());
    }

    #[test]
    fn test_default_configuration_omits_facets() {
        let json = serde_json::to_value(ReportConfiguration::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "allowTableView": false }));
    }
}
