#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_required_field,
    validate_url, Validate,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

const MAX_TIMEOUT_SECONDS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceSettings {
    pub endpoint: String,
    /// Unset means the lookup may block indefinitely.
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
}

/// Settings for one run, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub compliance: ComplianceSettings,
    pub monitoring: bool,
}

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_directory: Option<String>,
    pub output_directory: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub monitoring: Option<bool>,
}

impl ProcessorConfig {
    pub fn resolve(file: TomlConfig, overrides: ConfigOverrides) -> Result<Self> {
        let monitoring = overrides
            .monitoring
            .unwrap_or_else(|| file.monitoring_enabled());

        let input_directory = overrides.input_directory.or(file.imei.input_directory);
        let output_directory = overrides.output_directory.or(file.imei.output_directory);
        let endpoint = overrides.endpoint.or(file.compliance.endpoint);

        let config = Self {
            input_directory: PathBuf::from(validate_required_field(
                "imei.input_directory",
                &input_directory,
            )?),
            output_directory: PathBuf::from(validate_required_field(
                "imei.output_directory",
                &output_directory,
            )?),
            compliance: ComplianceSettings {
                endpoint: validate_required_field("compliance.endpoint", &endpoint)?.clone(),
                timeout_seconds: overrides
                    .timeout_seconds
                    .or(file.compliance.timeout_seconds),
                headers: file.compliance.headers.unwrap_or_default(),
            },
            monitoring,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Validate for ProcessorConfig {
    fn validate(&self) -> Result<()> {
        validate_path(
            "imei.input_directory",
            &self.input_directory.to_string_lossy(),
        )?;
        validate_path(
            "imei.output_directory",
            &self.output_directory.to_string_lossy(),
        )?;
        validate_url("compliance.endpoint", &self.compliance.endpoint)?;

        if let Some(timeout) = self.compliance.timeout_seconds {
            validate_range(
                "compliance.timeout_seconds",
                timeout,
                1,
                MAX_TIMEOUT_SECONDS,
            )?;
        }

        for name in self.compliance.headers.keys() {
            validate_non_empty_string("compliance.headers", name)?;
        }

        if self.input_directory == self.output_directory {
            tracing::warn!(
                "Input and output directories are the same; the processed file will be picked up by the next run"
            );
        }

        Ok(())
    }
}

impl ConfigProvider for ProcessorConfig {
    fn input_directory(&self) -> &Path {
        &self.input_directory
    }

    fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ImeiError;

    fn file_config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[imei]
input_directory = "/data/in"
output_directory = "/data/out"

[compliance]
endpoint = "https://compliance.example.com/status"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_from_file() {
        let config = ProcessorConfig::resolve(file_config(), ConfigOverrides::default()).unwrap();

        assert_eq!(config.input_directory, PathBuf::from("/data/in"));
        assert_eq!(config.output_directory, PathBuf::from("/data/out"));
        assert_eq!(config.compliance.timeout_seconds, None);
        assert!(config.compliance.headers.is_empty());
        assert!(!config.monitoring);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = ConfigOverrides {
            input_directory: Some("/override/in".to_string()),
            endpoint: Some("http://localhost:9000/check".to_string()),
            timeout_seconds: Some(10),
            monitoring: Some(true),
            ..Default::default()
        };

        let config = ProcessorConfig::resolve(file_config(), overrides).unwrap();

        assert_eq!(config.input_directory, PathBuf::from("/override/in"));
        assert_eq!(config.output_directory, PathBuf::from("/data/out"));
        assert_eq!(config.compliance.endpoint, "http://localhost:9000/check");
        assert_eq!(config.compliance.timeout_seconds, Some(10));
        assert!(config.monitoring);
    }

    #[test]
    fn test_missing_output_directory() {
        let overrides = ConfigOverrides {
            input_directory: Some("/in".to_string()),
            endpoint: Some("https://compliance.example.com".to_string()),
            ..Default::default()
        };

        let result = ProcessorConfig::resolve(TomlConfig::default(), overrides);

        assert!(matches!(
            result,
            Err(ImeiError::MissingConfigError { field }) if field == "imei.output_directory"
        ));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let overrides = ConfigOverrides {
            endpoint: Some("ftp://compliance.example.com".to_string()),
            ..Default::default()
        };

        let result = ProcessorConfig::resolve(file_config(), overrides);

        assert!(matches!(
            result,
            Err(ImeiError::InvalidConfigValueError { field, .. }) if field == "compliance.endpoint"
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let overrides = ConfigOverrides {
            timeout_seconds: Some(0),
            ..Default::default()
        };

        assert!(ProcessorConfig::resolve(file_config(), overrides).is_err());
    }
}
