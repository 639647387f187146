use super::ChartStyle;

/// Report metadata attached to every rendered chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub report_id: String,
    pub tool_name: String,
    pub tool_version: String,
    pub aggregation: String,
}

/// Single data series of the bar chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeriesView {
    pub name: String,
    pub data: Vec<usize>,
}

/// Presentation model of the ranked capability chart
///
/// `categories` and every series' `data` have the same length and order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartReadModel {
    pub metadata: ReportMetadataView,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeriesView>,
    pub height: u32,
    pub style: ChartStyle,
}

impl ChartReadModel {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Pairs each category with its value in the first series
    pub fn rows(&self) -> impl Iterator<Item = (&str, usize)> {
        let data: &[usize] = self.series.first().map(|s| s.data.as_slice()).unwrap_or(&[]);
        self.categories
            .iter()
            .zip(data.iter())
            .map(|(name, value)| (name.as_str(), *value))
    }
}
