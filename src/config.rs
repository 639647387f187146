//! Configuration file support for bizcap-chart.
//!
//! Provides YAML-based configuration through `bizcap-chart.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::GraphQlCapabilityClient;
use crate::application::dto::OutputFormat;
use crate::application::read_models::ChartStyle;
use crate::capability_report::domain::BUSINESS_CAPABILITY_TYPE;
use crate::capability_report::policies::AggregationMode;
use crate::ports::outbound::{FacetConfig, ReportConfiguration};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bizcap-chart.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub input: Option<PathBuf>,
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub aggregation: Option<String>,
    pub format: Option<String>,
    pub allow_table_view: Option<bool>,
    pub facets: Option<Vec<FacetEntry>>,
    pub chart: Option<ChartStyle>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A filter facet the host should render.
#[derive(Debug, Deserialize)]
pub struct FacetEntry {
    pub key: String,
    pub fact_sheet_type: Option<String>,
    pub attributes: Option<Vec<String>>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.page_size == Some(0) {
        bail!(
            "Invalid config: page_size must be at least 1.\n\n\
             💡 Hint: Omit page_size to use the default of {}.",
            GraphQlCapabilityClient::DEFAULT_PAGE_SIZE
        );
    }

    if let Some(ref aggregation) = config.aggregation {
        aggregation
            .parse::<AggregationMode>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    if let Some(ref facets) = config.facets {
        for (i, facet) in facets.iter().enumerate() {
            if facet.key.trim().is_empty() {
                bail!(
                    "Invalid config: facets[{}].key must not be empty.\n\n\
                     💡 Hint: Each facet needs a unique key (e.g., \"main\").",
                    i
                );
            }
        }
    }

    if let Some(ref chart) = config.chart {
        if chart.bar_width == 0 {
            bail!("Invalid config: chart.bar_width must be at least 1.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub aggregation: Option<AggregationMode>,
    pub page_size: Option<u32>,
}

/// Where capability pages come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilitySource {
    Endpoint(String),
    RecordedPages(PathBuf),
}

/// Fully resolved settings for one report run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub source: CapabilitySource,
    pub page_size: u32,
    pub format: OutputFormat,
    pub aggregation: AggregationMode,
    pub base_url: String,
    pub report_configuration: ReportConfiguration,
    pub chart_style: ChartStyle,
}

impl RunSettings {
    /// Merges command-line overrides over the config file and defaults.
    pub fn resolve(overrides: CliOverrides, config: ConfigFile) -> Result<Self> {
        let source = match (overrides.input, overrides.endpoint) {
            (Some(input), _) => CapabilitySource::RecordedPages(input),
            (None, Some(endpoint)) => CapabilitySource::Endpoint(endpoint),
            (None, None) => match (config.input, config.endpoint.clone()) {
                (Some(input), _) => CapabilitySource::RecordedPages(input),
                (None, Some(endpoint)) => CapabilitySource::Endpoint(endpoint),
                (None, None) => bail!(
                    "No capability source configured.\n\n\
                     💡 Hint: Pass --endpoint <URL> or --input <FILE>, or set 'endpoint' in {}.",
                    CONFIG_FILENAME
                ),
            },
        };

        let format = match (overrides.format, config.format) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            (None, None) => OutputFormat::default(),
        };

        let aggregation = match (overrides.aggregation, config.aggregation) {
            (Some(mode), _) => mode,
            (None, Some(mode)) => mode.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            (None, None) => AggregationMode::default(),
        };

        let page_size = overrides
            .page_size
            .or(config.page_size)
            .unwrap_or(GraphQlCapabilityClient::DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            bail!("Invalid page size: must be at least 1.");
        }

        let base_url = config
            .base_url
            .or(config.endpoint)
            .unwrap_or_default();

        let facets = config
            .facets
            .unwrap_or_default()
            .into_iter()
            .map(|entry| FacetConfig {
                key: entry.key,
                fixed_fact_sheet_type: entry
                    .fact_sheet_type
                    .unwrap_or_else(|| BUSINESS_CAPABILITY_TYPE.to_string()),
                attributes: entry.attributes.unwrap_or_default(),
            })
            .collect();

        Ok(Self {
            source,
            page_size,
            format,
            aggregation,
            base_url,
            report_configuration: ReportConfiguration {
                allow_table_view: config.allow_table_view.unwrap_or(false),
                facets,
            },
            chart_style: config.chart.unwrap_or_default(),
        })
    }
}
