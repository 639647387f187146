use serde::Deserialize;

/// Presentational settings for the bar chart
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Pixels per bar; the chart height grows with the number of bars
    pub bar_width: u32,
    /// Height floor in pixels
    pub min_height: u32,
    pub width: String,
    pub color: String,
    pub font_family: String,
    pub series_name: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_width: 30,
            min_height: 100,
            width: "80%".to_string(),
            color: "#1766EE".to_string(),
            font_family: "Axiforma".to_string(),
            series_name: "Related Applications Count".to_string(),
        }
    }
}
