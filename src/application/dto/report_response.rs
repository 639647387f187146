use crate::capability_report::domain::Capability;
use crate::capability_report::policies::AggregationMode;

/// ReportResponse - Internal response DTO from the report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Level 1 capabilities in chart order
    pub ranked: Vec<Capability>,
    /// Records received before de-duplication
    pub fetched_count: usize,
    /// Unique capabilities in the aggregated index
    pub indexed_count: usize,
    pub aggregation: AggregationMode,
}

impl ReportResponse {
    pub fn new(
        ranked: Vec<Capability>,
        fetched_count: usize,
        indexed_count: usize,
        aggregation: AggregationMode,
    ) -> Self {
        Self {
            ranked,
            fetched_count,
            indexed_count,
            aggregation,
        }
    }
}
