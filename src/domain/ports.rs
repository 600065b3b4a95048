use crate::domain::model::{ExtractedBatch, RunSummary, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Regular files directly inside `dir`, not recursive.
    fn list_files(
        &self,
        dir: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<PathBuf>>> + Send;
    /// Moves `from` to `to`, replacing anything already at `to`.
    fn move_file(
        &self,
        from: &Path,
        to: &Path,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_directory(&self) -> &Path;
    fn output_directory(&self) -> &Path;
}

/// The external compliance lookup.
///
/// `Ok(None)` is a lookup that completed without a status; it is counted as
/// processed but written as the error sentinel.
#[async_trait]
pub trait ComplianceChecker: Send + Sync {
    async fn identify_compliance_status(
        &self,
        imei: &str,
        provider_code: &str,
    ) -> Result<Option<String>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractedBatch>;
    async fn transform(&self, batch: ExtractedBatch) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<RunSummary>;
}
