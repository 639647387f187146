use crate::adapters::outbound::formatters::{ApexChartFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ChartFormatter;

/// Factory for creating chart formatters
///
/// Selects the formatter adapter for an output format so the CLI never
/// names concrete formatter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bizcap_chart::application::dto::OutputFormat;
    /// use bizcap_chart::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ChartFormatter> {
        match format {
            OutputFormat::Json => Box::new(ApexChartFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating chart JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown table output...",
        }
    }
}
