/// Formatter adapters for the chart output formats
mod apex_chart_formatter;
mod markdown_formatter;

pub use apex_chart_formatter::ApexChartFormatter;
pub use markdown_formatter::MarkdownFormatter;
