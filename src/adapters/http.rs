use crate::config::ComplianceSettings;
use crate::domain::ports::ComplianceChecker;
use crate::utils::error::{ImeiError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ComplianceResponse {
    status: Option<String>,
}

/// Looks up compliance status over HTTP:
/// `GET <endpoint>?imei=<imei>&provider=<code>` answering `{"status": ...}`.
pub struct HttpComplianceChecker {
    client: Client,
    endpoint: String,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl HttpComplianceChecker {
    pub fn new(settings: &ComplianceSettings) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.endpoint.clone(),
            headers: settings.headers.clone(),
            timeout: settings.timeout_seconds.map(Duration::from_secs),
        }
    }
}

#[async_trait::async_trait]
impl ComplianceChecker for HttpComplianceChecker {
    async fn identify_compliance_status(
        &self,
        imei: &str,
        provider_code: &str,
    ) -> Result<Option<String>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("imei", imei), ("provider", provider_code)]);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Requesting compliance status for IMEI {}", imei);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Compliance API response status: {}", status);

        if !status.is_success() {
            return Err(ImeiError::ApiStatus {
                status: status.as_u16(),
                imei: imei.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: ComplianceResponse = serde_json::from_str(&body)?;
        Ok(parsed.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use httpmock::prelude::*;

    fn settings(endpoint: String) -> ComplianceSettings {
        ComplianceSettings {
            endpoint,
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_returns_status_from_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/status")
                .query_param("imei", "123456789012345")
                .query_param("provider", "NWL");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "Compliant"}));
        });

        let checker = HttpComplianceChecker::new(&settings(server.url("/status")));
        let status = checker
            .identify_compliance_status("123456789012345", "NWL")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(status.as_deref(), Some("Compliant"));
    }

    #[tokio::test]
    async fn test_null_status_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": null}));
        });

        let checker = HttpComplianceChecker::new(&settings(server.url("/status")));
        let status = checker
            .identify_compliance_status("111111111111111", "NWL")
            .await
            .unwrap();

        assert_eq!(status, None);
    }

    #[tokio::test]
    async fn test_server_error_is_api_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(503);
        });

        let checker = HttpComplianceChecker::new(&settings(server.url("/status")));
        let result = checker
            .identify_compliance_status("222222222222222", "NWL")
            .await;

        assert!(matches!(
            result,
            Err(ImeiError::ApiStatus { status: 503, ref imei }) if imei == "222222222222222"
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(200).body("not json");
        });

        let checker = HttpComplianceChecker::new(&settings(server.url("/status")));
        let result = checker
            .identify_compliance_status("333333333333333", "NWL")
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ImeiError::SerializationError(_)));
        assert_eq!(err.category(), ErrorCategory::Compliance);
    }

    #[tokio::test]
    async fn test_configured_headers_are_sent() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/status")
                .header("Authorization", "Bearer secret");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "Blocked"}));
        });

        let mut settings = settings(server.url("/status"));
        settings
            .headers
            .insert("Authorization".to_string(), "Bearer secret".to_string());
        settings.timeout_seconds = Some(5);

        let checker = HttpComplianceChecker::new(&settings);
        let status = checker
            .identify_compliance_status("444444444444444", "NWL")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(status.as_deref(), Some("Blocked"));
    }
}
