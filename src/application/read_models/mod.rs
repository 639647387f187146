//! Read models for the chart presentation
//!
//! View-optimized structs derived from the ranked dataset. Formatters only
//! ever see these, never the domain capabilities.

mod chart_read_model;
mod chart_read_model_builder;
mod chart_style;

pub use chart_read_model::{ChartReadModel, ChartSeriesView, ReportMetadataView};
pub use chart_read_model_builder::ChartReadModelBuilder;
pub use chart_style::ChartStyle;
