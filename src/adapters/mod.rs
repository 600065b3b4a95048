// Adapters layer: concrete implementations for external systems.

pub mod http;
pub mod storage;

pub use http::HttpComplianceChecker;
pub use storage::LocalStorage;
