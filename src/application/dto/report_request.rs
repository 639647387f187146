use crate::capability_report::policies::AggregationMode;

/// ReportRequest - Internal request DTO for the report use case
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRequest {
    /// How application sets propagate up the hierarchy
    pub aggregation: AggregationMode,
}

impl ReportRequest {
    pub fn new(aggregation: AggregationMode) -> Self {
        Self { aggregation }
    }
}
