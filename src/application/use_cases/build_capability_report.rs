use super::FetchCapabilitiesUseCase;
use crate::application::dto::{ReportRequest, ReportResponse};
use crate::capability_report::domain::Capability;
use crate::capability_report::services::{CapabilityAggregator, CapabilityRanker};
use crate::ports::outbound::{BusyIndicator, CapabilityPageSource, ProgressReporter};
use crate::shared::Result;

/// BuildCapabilityReportUseCase - Core use case for the capability ranking
///
/// Fetch → aggregate → rank. Records can also be supplied directly when the
/// host hands over an already filtered set.
///
/// # Type Parameters
/// * `S` - CapabilityPageSource implementation
/// * `B` - BusyIndicator implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildCapabilityReportUseCase<S, B, PR> {
    fetcher: FetchCapabilitiesUseCase<S, B>,
    progress_reporter: PR,
}

impl<S, B, PR> BuildCapabilityReportUseCase<S, B, PR>
where
    S: CapabilityPageSource,
    B: BusyIndicator,
    PR: ProgressReporter,
{
    /// Creates a new BuildCapabilityReportUseCase with injected dependencies
    pub fn new(page_source: S, busy_indicator: B, progress_reporter: PR) -> Self {
        Self {
            fetcher: FetchCapabilitiesUseCase::new(page_source, busy_indicator),
            progress_reporter,
        }
    }

    /// Fetches every page, then aggregates and ranks the records
    pub async fn execute(&self, request: &ReportRequest) -> Result<ReportResponse> {
        self.progress_reporter
            .report("📡 Fetching business capabilities...");

        let fetched = self.fetcher.execute().await?;

        self.progress_reporter.report(&format!(
            "✅ Fetched {} capability record(s) in {} page(s)",
            fetched.records.len(),
            fetched.pages
        ));

        self.build_from_records(fetched.records, request)
    }

    /// Aggregates and ranks records that were obtained elsewhere
    pub fn build_from_records(
        &self,
        records: Vec<Capability>,
        request: &ReportRequest,
    ) -> Result<ReportResponse> {
        let fetched_count = records.len();
        let index = CapabilityAggregator::aggregate(records, request.aggregation)?;
        let indexed_count = index.len();

        let duplicates = fetched_count - indexed_count;
        if duplicates > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Ignored {} duplicate capability record(s); the first occurrence of each id was kept.",
                duplicates
            ));
        }

        self.progress_reporter.report(&format!(
            "📊 Aggregated {} capabilities ({} aggregation)",
            indexed_count, request.aggregation
        ));

        let ranked = CapabilityRanker::rank_top_level(index);

        self.progress_reporter.report_completion(&format!(
            "🏆 Ranked {} top-level capabilities",
            ranked.len()
        ));

        Ok(ReportResponse::new(
            ranked,
            fetched_count,
            indexed_count,
            request.aggregation,
        ))
    }
}
