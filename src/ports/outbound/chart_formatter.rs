use crate::application::read_models::ChartReadModel;
use crate::shared::Result;

/// ChartFormatter port for rendering the chart read model
///
/// Implementations turn the presentation model into a document
/// (chart options JSON, Markdown table, ...).
pub trait ChartFormatter {
    /// Formats the chart model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ChartReadModel) -> Result<String>;
}
