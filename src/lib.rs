pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpComplianceChecker, LocalStorage};
pub use config::{ComplianceSettings, ConfigOverrides, ProcessorConfig};
pub use crate::core::{etl::ComplianceEngine, pipeline::CompliancePipeline};
pub use domain::model::{RunCounters, RunSummary, ERROR_STATUS, PROVIDER_CODE};
pub use utils::error::{ImeiError, Result};
