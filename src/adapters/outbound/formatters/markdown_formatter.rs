use crate::application::read_models::ChartReadModel;
use crate::ports::outbound::ChartFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Markdown table header for the ranking
const TABLE_HEADER: &str = "| Rank | Capability | Related Applications |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----:|------------|---------------------:|\n";

/// MarkdownFormatter adapter rendering the ranking as a Markdown table
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFormatter for MarkdownFormatter {
    fn format(&self, model: &ChartReadModel) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Business Capabilities by Related Applications")?;
        writeln!(output)?;
        writeln!(
            output,
            "Generated by {} {} at {} ({} aggregation)",
            model.metadata.tool_name,
            model.metadata.tool_version,
            model.metadata.generated_at,
            model.metadata.aggregation
        )?;
        writeln!(output)?;

        if model.is_empty() {
            writeln!(output, "_No top-level capabilities found._")?;
            return Ok(output);
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for (rank, (name, count)) in model.rows().enumerate() {
            writeln!(
                output,
                "| {} | {} | {} |",
                rank + 1,
                Self::escape_markdown_table_cell(name),
                count
            )?;
        }

        Ok(output)
    }
}
