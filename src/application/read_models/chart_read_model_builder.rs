//! Builder for constructing ChartReadModel from the ranked dataset

use super::{ChartReadModel, ChartSeriesView, ChartStyle, ReportMetadataView};
use crate::capability_report::domain::Capability;
use crate::capability_report::policies::AggregationMode;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Builder for constructing ChartReadModel from ranked capabilities
///
/// Pure mapping: display names become categories, aggregated counts become
/// the single series, both in the dataset's order.
pub struct ChartReadModelBuilder;

impl ChartReadModelBuilder {
    pub fn build(
        dataset: &[Capability],
        style: &ChartStyle,
        metadata: ReportMetadataView,
    ) -> ChartReadModel {
        let categories = dataset
            .iter()
            .map(|c| c.display_name().to_string())
            .collect();
        let data = dataset
            .iter()
            .map(|c| c.aggregated_application_count())
            .collect();

        ChartReadModel {
            metadata,
            categories,
            series: vec![ChartSeriesView {
                name: style.series_name.clone(),
                data,
            }],
            height: Self::chart_height(dataset.len(), style),
            style: style.clone(),
        }
    }

    /// Bar count times bar width, never below the configured floor
    pub fn chart_height(bar_count: usize, style: &ChartStyle) -> u32 {
        let bars = u32::try_from(bar_count).unwrap_or(u32::MAX);
        bars.saturating_mul(style.bar_width).max(style.min_height)
    }

    /// Generates fresh metadata (timestamp and report id) for a render
    pub fn generate_metadata(aggregation: AggregationMode) -> ReportMetadataView {
        ReportMetadataView {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            report_id: format!("urn:uuid:{}", Uuid::new_v4()),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            aggregation: aggregation.to_string(),
        }
    }
}
