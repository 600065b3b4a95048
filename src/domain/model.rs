use std::path::{Path, PathBuf};

/// Compliance program tag sent with every lookup.
pub const PROVIDER_CODE: &str = "NWL";
/// Status written when a lookup fails or yields no status.
pub const ERROR_STATUS: &str = "Error";
pub const OUTPUT_HEADER: [&str; 2] = ["IMEI", "Status"];
pub const CSV_SUFFIX: &str = ".csv";

/// The one CSV file found in the input directory.
///
/// Only the locator can build one, so holding a `LocatedFile` means the
/// "exactly one file" precondition was met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFile {
    path: PathBuf,
    file_name: String,
}

impl LocatedFile {
    pub(crate) fn new(path: PathBuf, file_name: String) -> Self {
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Where the located file is going to be moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationPlan {
    pub source: LocatedFile,
    pub destination: PathBuf,
}

/// Raw lines of the relocated file, read in full before anything is written.
#[derive(Debug, Clone)]
pub struct ExtractedBatch {
    pub output_path: PathBuf,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRecord {
    pub imei: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub processed: usize,
    pub failed: usize,
    pub empty: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub output_path: PathBuf,
    pub records: Vec<ProcessedRecord>,
    pub counters: RunCounters,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub counters: RunCounters,
}

impl RunSummary {
    pub fn log(&self) {
        tracing::info!(
            "Processing completed. Output saved to {}",
            self.output_path.display()
        );
        tracing::info!("Total records processed: {}", self.counters.processed);
        tracing::info!("Total records failed: {}", self.counters.failed);
        tracing::info!("Total empty lines skipped: {}", self.counters.empty);
    }
}
