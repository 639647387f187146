use super::UpdateCoalescer;
use crate::application::dto::ReportRequest;
use crate::application::read_models::{ChartReadModel, ChartReadModelBuilder, ChartStyle};
use crate::application::use_cases::BuildCapabilityReportUseCase;
use crate::capability_report::domain::Capability;
use crate::capability_report::policies::AggregationMode;
use crate::ports::outbound::{
    BusyIndicator, CapabilityPageSource, HostPlatform, ProgressReporter, ReportConfiguration,
    ReportSetup,
};
use crate::shared::Result;
use tokio::sync::mpsc;

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub aggregation: AggregationMode,
    pub report_configuration: ReportConfiguration,
    pub chart_style: ChartStyle,
}

/// ReportSession - state of one embedded report instance
///
/// Holds the current ranked dataset and the initialized flag. The dataset is
/// replaced wholesale on every successful load; a failed load leaves the
/// previous dataset in place.
///
/// # Type Parameters
/// * `S` - CapabilityPageSource implementation
/// * `B` - BusyIndicator implementation
/// * `H` - HostPlatform implementation
/// * `PR` - ProgressReporter implementation
pub struct ReportSession<S, B, H, PR> {
    use_case: BuildCapabilityReportUseCase<S, B, PR>,
    host: H,
    options: SessionOptions,
    dataset: Vec<Capability>,
    setup: Option<ReportSetup>,
    initialized: bool,
}

impl<S, B, H, PR> ReportSession<S, B, H, PR>
where
    S: CapabilityPageSource,
    B: BusyIndicator,
    H: HostPlatform,
    PR: ProgressReporter,
{
    pub fn new(
        use_case: BuildCapabilityReportUseCase<S, B, PR>,
        host: H,
        options: SessionOptions,
    ) -> Self {
        Self {
            use_case,
            host,
            options,
            dataset: Vec::new(),
            setup: None,
            initialized: false,
        }
    }

    /// Runs the host handshake and the first load
    ///
    /// Calling it again after the first attempt is a no-op. The session
    /// counts as initialized once the handshake was attempted, even if it
    /// failed.
    pub async fn init_report(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let handshake = self.handshake().await;
        self.initialized = true;
        self.setup = Some(handshake?);

        self.fetch_dataset().await?;
        Ok(())
    }

    async fn handshake(&self) -> Result<ReportSetup> {
        let setup = self.host.init().await?;
        self.host.ready(&self.options.report_configuration).await?;
        Ok(setup)
    }

    /// Fetches, aggregates and ranks the full capability set
    pub async fn fetch_dataset(&mut self) -> Result<&[Capability]> {
        let request = ReportRequest::new(self.options.aggregation);
        let response = self.use_case.execute(&request).await?;
        self.dataset = response.ranked;
        Ok(&self.dataset)
    }

    /// Replaces the dataset from records the host already filtered
    pub fn apply_filtered_records(&mut self, records: Vec<Capability>) -> Result<&[Capability]> {
        let request = ReportRequest::new(self.options.aggregation);
        let response = self.use_case.build_from_records(records, &request)?;
        self.dataset = response.ranked;
        Ok(&self.dataset)
    }

    /// Applies host filter callbacks, coalescing bursts into one recomputation
    ///
    /// Returns the number of applied updates once the channel closes.
    pub async fn run_filter_updates(
        &mut self,
        updates: mpsc::Receiver<Vec<Capability>>,
        coalescer: &UpdateCoalescer,
    ) -> Result<usize> {
        coalescer
            .run(updates, |records| {
                self.apply_filtered_records(records).map(|_| ())
            })
            .await
    }

    pub fn dataset(&self) -> &[Capability] {
        &self.dataset
    }

    /// Chart model for the current dataset
    pub fn chart(&self) -> ChartReadModel {
        ChartReadModelBuilder::build(
            &self.dataset,
            &self.options.chart_style,
            ChartReadModelBuilder::generate_metadata(self.options.aggregation),
        )
    }

    pub fn setup(&self) -> Option<&ReportSetup> {
        self.setup.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Drops the dataset and handshake state so the next `init_report` starts over
    pub fn reset(&mut self) {
        self.dataset.clear();
        self.setup = None;
        self.initialized = false;
    }
}
