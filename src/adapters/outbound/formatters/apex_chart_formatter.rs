use crate::application::read_models::{ChartReadModel, ChartSeriesView, ReportMetadataView};
use crate::ports::outbound::ChartFormatter;
use crate::shared::Result;
use serde::Serialize;

const LABEL_COLOR: &str = "#2a303d";
const AXIS_LABEL_COLOR: &str = "#666666";

#[derive(Debug, Serialize)]
struct ChartDocument {
    metadata: Metadata,
    options: Options,
    series: Vec<Series>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    generated_at: String,
    report_id: String,
    tool: Tool,
    aggregation: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Options {
    chart: Chart,
    colors: Vec<String>,
    plot_options: PlotOptions,
    data_labels: DataLabels,
    grid: Grid,
    xaxis: XAxis,
    yaxis: YAxis,
    legend: Legend,
    tooltip: Tooltip,
}

#[derive(Debug, Serialize)]
struct Chart {
    #[serde(rename = "type")]
    chart_type: &'static str,
    height: u32,
    width: String,
    toolbar: Toggle,
}

#[derive(Debug, Serialize)]
struct Toggle {
    show: bool,
}

#[derive(Debug, Serialize)]
struct PlotOptions {
    bar: Bar,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bar {
    horizontal: bool,
    bar_height: &'static str,
    data_labels: BarDataLabels,
}

#[derive(Debug, Serialize)]
struct BarDataLabels {
    position: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DataLabels {
    enabled: bool,
    text_anchor: &'static str,
    style: DataLabelStyle,
    background: Background,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DataLabelStyle {
    font_family: String,
    font_weight: u32,
    font_size: u32,
    colors: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Background {
    enabled: bool,
    drop_shadow: Enabled,
}

#[derive(Debug, Serialize)]
struct Enabled {
    enabled: bool,
}

#[derive(Debug, Serialize)]
struct Grid {
    show: bool,
    padding: Padding,
}

#[derive(Debug, Serialize)]
struct Padding {
    right: u32,
    left: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct XAxis {
    categories: Vec<String>,
    axis_ticks: Toggle,
    axis_border: Toggle,
    labels: Toggle,
}

#[derive(Debug, Serialize)]
struct YAxis {
    labels: YAxisLabels,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct YAxisLabels {
    show: bool,
    align: &'static str,
    offset_x: i32,
    style: AxisLabelStyle,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AxisLabelStyle {
    font_family: String,
    font_size: u32,
    color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Legend {
    show: bool,
    position: &'static str,
    horizontal_align: &'static str,
    show_for_single_series: bool,
    font_weight: u32,
    font_family: String,
}

#[derive(Debug, Serialize)]
struct Tooltip {
    enabled: bool,
    style: FontStyle,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FontStyle {
    font_family: String,
}

#[derive(Debug, Serialize)]
struct Series {
    name: String,
    data: Vec<usize>,
}

/// ApexChartFormatter adapter producing a horizontal bar chart document
///
/// Emits `{ metadata, options, series }` where `options` and `series` can be
/// handed to ApexCharts unchanged.
pub struct ApexChartFormatter;

impl ApexChartFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(metadata: &ReportMetadataView) -> Metadata {
        Metadata {
            generated_at: metadata.generated_at.clone(),
            report_id: metadata.report_id.clone(),
            tool: Tool {
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            },
            aggregation: metadata.aggregation.clone(),
        }
    }

    fn build_options(model: &ChartReadModel) -> Options {
        let style = &model.style;
        Options {
            chart: Chart {
                chart_type: "bar",
                height: model.height,
                width: style.width.clone(),
                toolbar: Toggle { show: false },
            },
            colors: vec![style.color.clone()],
            plot_options: PlotOptions {
                bar: Bar {
                    horizontal: true,
                    bar_height: "70%",
                    data_labels: BarDataLabels { position: "top" },
                },
            },
            data_labels: DataLabels {
                enabled: true,
                text_anchor: "middle",
                style: DataLabelStyle {
                    font_family: style.font_family.clone(),
                    font_weight: 800,
                    font_size: 9,
                    colors: vec![LABEL_COLOR],
                },
                background: Background {
                    enabled: true,
                    drop_shadow: Enabled { enabled: true },
                },
            },
            grid: Grid {
                show: false,
                padding: Padding {
                    right: 100,
                    left: 100,
                },
            },
            xaxis: XAxis {
                categories: model.categories.clone(),
                axis_ticks: Toggle { show: false },
                axis_border: Toggle { show: false },
                labels: Toggle { show: false },
            },
            yaxis: YAxis {
                labels: YAxisLabels {
                    show: true,
                    align: "left",
                    offset_x: 0,
                    style: AxisLabelStyle {
                        font_family: style.font_family.clone(),
                        font_size: 11,
                        color: AXIS_LABEL_COLOR,
                    },
                },
            },
            legend: Legend {
                show: true,
                position: "top",
                horizontal_align: "right",
                show_for_single_series: true,
                font_weight: 800,
                font_family: style.font_family.clone(),
            },
            tooltip: Tooltip {
                enabled: true,
                style: FontStyle {
                    font_family: style.font_family.clone(),
                },
            },
        }
    }

    fn build_series(series: &[ChartSeriesView]) -> Vec<Series> {
        series
            .iter()
            .map(|s| Series {
                name: s.name.clone(),
                data: s.data.clone(),
            })
            .collect()
    }
}

impl Default for ApexChartFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFormatter for ApexChartFormatter {
    fn format(&self, model: &ChartReadModel) -> Result<String> {
        let document = ChartDocument {
            metadata: Self::build_metadata(&model.metadata),
            options: Self::build_options(model),
            series: Self::build_series(&model.series),
        };

        let json = serde_json::to_string_pretty(&document)?;
        Ok(json)
    }
}
