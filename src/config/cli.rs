use crate::config::toml_config::TomlConfig;
use crate::config::{ConfigOverrides, ProcessorConfig};
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "imei-compliance")]
#[command(about = "Annotate a CSV file of IMEIs with their compliance status")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory expected to hold exactly one .csv file
    #[arg(long)]
    pub input_dir: Option<String>,

    /// Directory that receives the processed file
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Compliance service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Per-request timeout for compliance lookups
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Log CPU and memory usage for each phase
    #[arg(long)]
    pub monitor: bool,

    /// Locate the input file and show the planned destination without moving it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// Loads the optional config file and applies command line overrides.
    pub fn resolve(&self) -> Result<ProcessorConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let overrides = ConfigOverrides {
            input_directory: self.input_dir.clone(),
            output_directory: self.output_dir.clone(),
            endpoint: self.endpoint.clone(),
            timeout_seconds: self.timeout_seconds,
            monitoring: self.monitor.then_some(true),
        };

        ProcessorConfig::resolve(file, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_flags_only() {
        let cli = CliConfig::parse_from([
            "imei-compliance",
            "--input-dir",
            "/in",
            "--output-dir",
            "/out",
            "--endpoint",
            "https://compliance.example.com/status",
            "--dry-run",
        ]);

        assert!(cli.dry_run);
        assert_eq!(cli.log_format, LogFormat::Compact);

        let config = cli.resolve().unwrap();
        assert_eq!(config.input_directory, PathBuf::from("/in"));
        assert_eq!(config.output_directory, PathBuf::from("/out"));
    }

    #[test]
    fn test_file_with_flag_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("imei.toml");
        std::fs::write(
            &path,
            r#"
[imei]
input_directory = "/file/in"
output_directory = "/file/out"

[compliance]
endpoint = "https://compliance.example.com/status"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "imei-compliance",
            "--config",
            path.to_str().unwrap(),
            "--output-dir",
            "/flag/out",
            "--log-format",
            "json",
            "--monitor",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(config.input_directory, PathBuf::from("/file/in"));
        assert_eq!(config.output_directory, PathBuf::from("/flag/out"));
        assert!(config.monitoring);
    }

    #[test]
    fn test_missing_everything_fails() {
        let cli = CliConfig::parse_from(["imei-compliance"]);
        assert!(cli.resolve().is_err());
    }
}
