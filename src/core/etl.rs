use crate::domain::model::RunSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ComplianceEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ComplianceEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Locate and relocate, check every line, rewrite the file, then log the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting IMEI compliance run");
        self.monitor.log_stats("Start");

        let batch = self.pipeline.extract().await?;
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(batch).await?;
        tracing::debug!("Annotated {} records", result.records.len());
        self.monitor.log_stats("Transform");

        let summary = self.pipeline.load(result).await?;
        self.monitor.log_stats("Load");

        summary.log();
        self.monitor.log_final_stats();
        Ok(summary)
    }
}
