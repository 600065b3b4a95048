use crate::domain::model::{LocatedFile, RelocationPlan, CSV_SUFFIX};
use chrono::{DateTime, Local};
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn format_timestamp(now: &DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// `devices.csv` -> `devices_processed_20240131_235959.csv`
pub fn processed_file_name(file_name: &str, timestamp: &str) -> String {
    let stem = file_name.strip_suffix(CSV_SUFFIX).unwrap_or(file_name);
    format!("{}_processed_{}{}", stem, timestamp, CSV_SUFFIX)
}

pub fn plan_relocation(
    source: LocatedFile,
    output_directory: &Path,
    now: &DateTime<Local>,
) -> RelocationPlan {
    let name = processed_file_name(source.file_name(), &format_timestamp(now));
    RelocationPlan {
        destination: output_directory.join(name),
        source,
    }
}
