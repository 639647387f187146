//! bizcap-chart - business capability analytics
//!
//! This library fetches business capability fact sheets page by page from a
//! GraphQL endpoint, rolls the related applications of every capability up
//! its ancestors, ranks the top-level capabilities and renders them as a bar
//! chart configuration. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`capability_report`): Capabilities, aggregation and ranking
//! - **Application Layer** (`application`): Use cases, report session and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bizcap_chart::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! let source = RecordedPagesReader::from_path(Path::new("pages.json"))?;
//! let use_case = BuildCapabilityReportUseCase::new(
//!     source,
//!     SpinnerBusyIndicator::default(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let mut session = ReportSession::new(
//!     use_case,
//!     StandaloneHost::new("https://example.invalid"),
//!     SessionOptions::default(),
//! );
//! session.init_report().await?;
//!
//! let output = ApexChartFormatter::new().format(&session.chart())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod capability_report;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SpinnerBusyIndicator, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, RecordedPagesReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{ApexChartFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::host::StandaloneHost;
    pub use crate::adapters::outbound::network::GraphQlCapabilityClient;
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::{ChartReadModel, ChartStyle};
    pub use crate::application::session::{ReportSession, SessionOptions, UpdateCoalescer};
    pub use crate::application::use_cases::{
        BuildCapabilityReportUseCase, FetchCapabilitiesUseCase,
    };
    pub use crate::capability_report::domain::{Capability, CapabilityIndex};
    pub use crate::capability_report::policies::AggregationMode;
    pub use crate::capability_report::services::{CapabilityAggregator, CapabilityRanker};
    pub use crate::ports::outbound::{
        BusyIndicator, CapabilityPage, CapabilityPageSource, ChartFormatter, HostPlatform,
        OutputPresenter, ProgressReporter, ReportConfiguration,
    };
    pub use crate::shared::Result;
}
