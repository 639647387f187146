use clap::Parser;
use std::path::PathBuf;

use bizcap_chart::application::dto::OutputFormat;
use bizcap_chart::capability_report::policies::AggregationMode;
use bizcap_chart::config::CliOverrides;

/// Chart business capabilities by the number of related applications
#[derive(Parser, Debug)]
#[command(name = "bizcap-chart")]
#[command(version)]
#[command(
    about = "Chart top-level business capabilities by their related applications",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./bizcap-chart.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint to query; the bearer token is read from BIZCAP_API_TOKEN
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Recorded GraphQL responses to read instead of querying an endpoint
    #[arg(short, long, value_name = "FILE", conflicts_with = "endpoint")]
    pub input: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How application counts roll up: transitive or immediate-parent
    #[arg(long, value_name = "MODE")]
    pub aggregation: Option<AggregationMode>,

    /// Number of fact sheets requested per page
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Only print warnings and errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            endpoint: self.endpoint.clone(),
            input: self.input.clone(),
            format: self.format,
            aggregation: self.aggregation,
            page_size: self.page_size,
        }
    }
}
