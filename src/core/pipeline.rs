use crate::core::{locator, processor, relocator};
use crate::domain::model::{
    ExtractedBatch, LocatedFile, RelocationPlan, RunSummary, TransformResult,
};
use crate::domain::ports::{ComplianceChecker, ConfigProvider, Pipeline, Storage};
use crate::utils::error::{ImeiError, Result};
use chrono::Local;

pub struct CompliancePipeline<S: Storage, K: ComplianceChecker, C: ConfigProvider> {
    storage: S,
    checker: K,
    config: C,
}

impl<S: Storage, K: ComplianceChecker, C: ConfigProvider> CompliancePipeline<S, K, C> {
    pub fn new(storage: S, checker: K, config: C) -> Self {
        Self {
            storage,
            checker,
            config,
        }
    }

    pub async fn locate(&self) -> Result<LocatedFile> {
        let directory = self.config.input_directory();

        let entries = match self.storage.list_files(directory).await {
            Ok(entries) => entries,
            Err(ImeiError::IoError(source)) => {
                let err = ImeiError::DirectoryRead {
                    directory: directory.to_path_buf(),
                    source,
                };
                tracing::error!("{}", err);
                return Err(err);
            }
            Err(other) => return Err(other),
        };

        let located = locator::select_single_csv(directory, entries).inspect_err(|e| {
            if let ImeiError::AmbiguousInput { count, .. } = e {
                tracing::warn!("Expected one CSV file in directory, but found: {}", count);
            } else {
                tracing::warn!("Expected one CSV file in directory, but found: 0");
            }
        })?;

        tracing::info!("Input file detected: {}", located.file_name());
        Ok(located)
    }

    /// Locates the input and computes its destination without touching disk.
    pub async fn plan(&self) -> Result<RelocationPlan> {
        let located = self.locate().await?;
        Ok(relocator::plan_relocation(
            located,
            self.config.output_directory(),
            &Local::now(),
        ))
    }

    async fn relocate(&self, plan: &RelocationPlan) -> Result<()> {
        self.storage
            .move_file(plan.source.path(), &plan.destination)
            .await
            .map_err(|e| match e {
                ImeiError::IoError(source) => ImeiError::Relocate {
                    from: plan.source.path().to_path_buf(),
                    to: plan.destination.clone(),
                    source,
                },
                other => other,
            })?;

        tracing::info!(
            "Moved input file to output directory with new name: {}",
            plan.destination.display()
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl<S: Storage, K: ComplianceChecker, C: ConfigProvider> Pipeline for CompliancePipeline<S, K, C> {
    async fn extract(&self) -> Result<ExtractedBatch> {
        let plan = self.plan().await?;
        self.relocate(&plan).await?;

        // 先完整讀入，再覆寫同一路徑
        let content = self.storage.read_to_string(&plan.destination).await?;
        let lines = processor::split_lines(&content);
        tracing::info!("Processing {} IMEIs from the input file.", lines.len());

        Ok(ExtractedBatch {
            output_path: plan.destination,
            lines,
        })
    }

    async fn transform(&self, batch: ExtractedBatch) -> Result<TransformResult> {
        let (records, counters) = processor::annotate(&self.checker, batch.lines).await;

        Ok(TransformResult {
            output_path: batch.output_path,
            records,
            counters,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<RunSummary> {
        let data = processor::render_csv(&result.records)?;
        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.records.len(),
            data.len(),
            result.output_path.display()
        );
        self.storage.write_file(&result.output_path, &data).await?;

        Ok(RunSummary {
            output_path: result.output_path,
            counters: result.counters,
        })
    }
}
