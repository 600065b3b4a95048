pub mod etl;
pub mod locator;
pub mod pipeline;
pub mod processor;
pub mod relocator;

pub use crate::domain::model::{RunSummary, TransformResult};
pub use crate::domain::ports::{ComplianceChecker, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
