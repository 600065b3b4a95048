use crate::domain::model::{
    ProcessedRecord, RunCounters, ERROR_STATUS, OUTPUT_HEADER, PROVIDER_CODE,
};
use crate::domain::ports::ComplianceChecker;
use crate::utils::error::{ImeiError, Result};

/// Splits on `\r\n`, `\n` or a bare `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Checks every non-blank line in order.
///
/// Blank lines produce no record. A failed lookup never stops the loop; the
/// record is kept with the error sentinel.
pub async fn annotate<K>(checker: &K, lines: Vec<String>) -> (Vec<ProcessedRecord>, RunCounters)
where
    K: ComplianceChecker + ?Sized,
{
    let mut counters = RunCounters::default();
    let mut records = Vec::with_capacity(lines.len());

    for imei in lines {
        if imei.trim().is_empty() {
            counters.empty += 1;
            tracing::warn!("Skipped empty line in input file.");
            continue;
        }

        let status = match checker
            .identify_compliance_status(&imei, PROVIDER_CODE)
            .await
        {
            Ok(Some(status)) => {
                counters.processed += 1;
                status
            }
            Ok(None) => {
                counters.processed += 1;
                tracing::debug!("No compliance status returned for IMEI {}", imei);
                ERROR_STATUS.to_string()
            }
            Err(e) => {
                counters.failed += 1;
                tracing::error!("Error fetching compliance status for IMEI {}: {}", imei, e);
                ERROR_STATUS.to_string()
            }
        };

        records.push(ProcessedRecord { imei, status });
    }

    (records, counters)
}

pub fn render_csv(records: &[ProcessedRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_HEADER)?;
    for record in records {
        writer.write_record([record.imei.as_str(), record.status.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| ImeiError::ProcessingError {
            message: format!("failed to flush CSV output: {}", e),
        })
}
