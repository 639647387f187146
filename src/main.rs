mod cli;

use bizcap_chart::adapters::outbound::console::{SpinnerBusyIndicator, StderrProgressReporter};
use bizcap_chart::adapters::outbound::filesystem::RecordedPagesReader;
use bizcap_chart::adapters::outbound::host::StandaloneHost;
use bizcap_chart::adapters::outbound::network::GraphQlCapabilityClient;
use bizcap_chart::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use bizcap_chart::application::session::{ReportSession, SessionOptions};
use bizcap_chart::application::use_cases::BuildCapabilityReportUseCase;
use bizcap_chart::config::{self, CapabilitySource, RunSettings};
use bizcap_chart::ports::outbound::{CapabilityPageSource, ProgressReporter};
use bizcap_chart::shared::error::ExitCode;
use bizcap_chart::shared::Result;
use cli::Args;
use std::path::Path;
use std::process;

/// Environment variable holding the bearer token for the GraphQL endpoint
const TOKEN_ENV_VAR: &str = "BIZCAP_API_TOKEN";

#[tokio::main]
async fn main() {
    // Parse command-line arguments; clap exits with status 2 on bad usage
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let settings = RunSettings::resolve(args.overrides(), config)?;
    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let output = match &settings.source {
        CapabilitySource::RecordedPages(path) => {
            let source = RecordedPagesReader::from_path(path)?;
            render_report(source, &settings, &reporter).await?
        }
        CapabilitySource::Endpoint(endpoint) => {
            let token = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty());
            let source = GraphQlCapabilityClient::new(endpoint.clone(), token, settings.page_size)?;
            render_report(source, &settings, &reporter).await?
        }
    };

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&output)?;

    if let Some(path) = &args.output {
        reporter.report_completion(&format!("✅ Chart written to: {}", path.display()));
    }

    Ok(())
}

/// Runs one report session against `source` and formats the resulting chart
async fn render_report<S: CapabilityPageSource>(
    source: S,
    settings: &RunSettings,
    reporter: &StderrProgressReporter,
) -> Result<String> {
    let use_case =
        BuildCapabilityReportUseCase::new(source, SpinnerBusyIndicator::default(), *reporter);

    let options = SessionOptions {
        aggregation: settings.aggregation,
        report_configuration: settings.report_configuration.clone(),
        chart_style: settings.chart_style.clone(),
    };
    let mut session = ReportSession::new(
        use_case,
        StandaloneHost::new(settings.base_url.clone()),
        options,
    );

    session.init_report().await?;

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    formatter.format(&session.chart())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcap_chart::config::{CliOverrides, ConfigFile};
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = r#"{ "data": { "allFactSheets": {
        "pageInfo": { "hasNextPage": false, "endCursor": null },
        "edges": [
          { "node": { "id": "bc-1", "type": "BusinessCapability", "displayName": "Sales", "level": 1,
                      "relBusinessCapabilityToApplication": { "edges": [ { "node": { "factSheet": { "id": "app-1" } } } ] } } }
        ]
    } } }"#;

    fn settings_for(path: &Path) -> RunSettings {
        let overrides = CliOverrides {
            input: Some(path.to_path_buf()),
            ..Default::default()
        };
        RunSettings::resolve(overrides, ConfigFile::default()).unwrap()
    }

    #[tokio::test]
    async fn test_render_report_from_recorded_pages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, PAGE).unwrap();

        let settings = settings_for(&path);
        let source = RecordedPagesReader::from_path(&path).unwrap();
        let output = render_report(source, &settings, &StderrProgressReporter::quiet())
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["options"]["xaxis"]["categories"][0], "Sales");
        assert_eq!(json["series"][0]["data"][0], 1);
    }

    #[tokio::test]
    async fn test_render_report_rejects_empty_facet_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, PAGE).unwrap();

        let mut settings = settings_for(&path);
        settings
            .report_configuration
            .facets
            .push(bizcap_chart::ports::outbound::FacetConfig {
                key: String::new(),
                fixed_fact_sheet_type: "BusinessCapability".to_string(),
                attributes: Vec::new(),
            });
        let source = RecordedPagesReader::from_path(&path).unwrap();

        let result = render_report(source, &settings, &StderrProgressReporter::quiet()).await;
        assert!(result.unwrap_err().to_string().contains("empty key"));
    }
}
