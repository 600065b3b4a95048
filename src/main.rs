use clap::Parser;
use imei_compliance::config::cli::LogFormat;
use imei_compliance::utils::logger;
use imei_compliance::{
    CliConfig, ComplianceEngine, CompliancePipeline, HttpComplianceChecker, ImeiError,
    LocalStorage,
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("🚀 Starting imei-compliance");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let monitor_enabled = config.monitoring;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let checker = HttpComplianceChecker::new(&config.compliance);
    let pipeline = CompliancePipeline::new(LocalStorage::new(), checker, config);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be moved or checked");
        return match pipeline.plan().await {
            Ok(plan) => {
                println!("🔍 Dry run:");
                println!("  Input:  {}", plan.source.path().display());
                println!("  Output: {}", plan.destination.display());
                ExitCode::SUCCESS
            }
            Err(e) => report_failure(&e),
        };
    }

    let engine = ComplianceEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ Processing completed!");
            println!("📁 Output saved to: {}", summary.output_path.display());
            println!(
                "   processed: {}, failed: {}, empty lines skipped: {}",
                summary.counters.processed, summary.counters.failed, summary.counters.empty
            );
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &ImeiError) -> ExitCode {
    if e.is_no_actionable_file() {
        tracing::error!("No CSV file found or multiple files detected in the specified directory.");
    }
    tracing::error!("❌ Error processing IMEIs: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    ExitCode::FAILURE
}
