//! HTTP client for the calculation service.

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use solara_types::{
    CalculationRequest, ConsumptionInput, ErrorBody, EstimateResult, RequestError, Result,
    ServiceInfo,
};
use std::time::Duration;
use tracing::{debug, warn};

use crate::url::{BASE_URL_ENV, base_url, calculate_url, root_url};

/// Configuration for the estimate client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL without trailing slash.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: base_url(None),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("solara/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with the base URL taken from the
    /// `SOLARA_API_URL` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        let configured = std::env::var(BASE_URL_ENV).ok();
        Self::default().with_base_url(configured.as_deref())
    }

    /// Sets the base URL, normalizing it.
    #[must_use]
    pub fn with_base_url(mut self, url: Option<&str>) -> Self {
        self.base_url = base_url(url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the solar sizing calculation service.
///
/// Each call issues at most one request; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct EstimateClient {
    client: Client,
    config: ClientConfig,
}

impl EstimateClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> std::result::Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates raw user text and, if valid, requests an estimate.
    ///
    /// Invalid input never reaches the network.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Validation`] for bad input, otherwise any
    /// error from [`Self::calculate`].
    pub async fn submit(&self, raw: &str) -> Result<EstimateResult> {
        let input = ConsumptionInput::parse(raw).inspect_err(|e| {
            debug!(input = raw, reason = ?e, "rejected consumption input");
        })?;
        self.calculate(input).await
    }

    /// Requests an estimate for a validated consumption.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Service`] for a non-success status and
    /// [`RequestError::Network`] for transport failures or an undecodable
    /// success body.
    pub async fn calculate(&self, input: ConsumptionInput) -> Result<EstimateResult> {
        let url = calculate_url(&self.config.base_url);
        let body = CalculationRequest::new(input)
            .to_json()
            .map_err(|e| RequestError::network(&e))?;

        debug!(%url, monthly_kwh = input.monthly_kwh(), "requesting estimate");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| network_failure(&e))?;

        let text = Self::read_success(response).await?;
        serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, "malformed estimate body");
            RequestError::network(&e)
        })
    }

    /// Fetches the service root document.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::calculate`].
    pub async fn service_info(&self) -> Result<ServiceInfo> {
        let url = root_url(&self.config.base_url);
        debug!(%url, "probing service");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| network_failure(&e))?;

        let text = Self::read_success(response).await?;
        serde_json::from_str(&text).map_err(|e| RequestError::network(&e))
    }

    /// Reads the body of a success response, or converts a failure status
    /// into a service error.
    async fn read_success(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        debug!(status = status.as_u16(), "service responded");

        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| ErrorBody::detail_from(&body));
            let error = RequestError::service(status.as_u16(), detail);
            warn!(status = status.as_u16(), error = %error, "service returned an error");
            return Err(error);
        }

        response.text().await.map_err(|e| network_failure(&e))
    }
}

fn network_failure(error: &reqwest::Error) -> RequestError {
    let error = RequestError::network(error);
    warn!(error = %error, "request failed");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use solara_types::{GENERIC_SERVER_ERROR, VALIDATION_MESSAGE};

    const SAMPLE_BODY: &str = r#"{"system_size_kw":4.5,"panel_count":9,"monthly_savings_cop":370400,"installation_cost_cop":18900000,"payback_years":4.25,"area_m2":18.9}"#;

    fn test_client(server: &MockServer) -> EstimateClient {
        let config = ClientConfig::default()
            .with_base_url(Some(&format!("{}/", server.base_url())))
            .with_timeout(Duration::from_secs(5));
        EstimateClient::new(config).unwrap()
    }

    fn sample() -> EstimateResult {
        EstimateResult {
            system_size_kw: 4.5,
            panel_count: 9,
            monthly_savings_cop: 370_400.0,
            installation_cost_cop: 18_900_000.0,
            payback_years: 4.25,
            area_m2: 18.9,
        }
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("solara/"));
    }

    #[test]
    fn test_client_config_base_url() {
        let config = ClientConfig::default().with_base_url(Some("https://api.example.com///"));
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = EstimateClient::with_defaults();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_submit_success_is_verbatim() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/calculate")
                .header("content-type", "application/json")
                .body(r#"{"monthly_kwh":400}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(SAMPLE_BODY);
        });

        let result = test_client(&server).submit("400").await.unwrap();

        assert_eq!(result, sample());
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_sends_parsed_value() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/calculate")
                .json_body(serde_json::json!({ "monthly_kwh": 412.5 }));
            then.status(200).body(SAMPLE_BODY);
        });

        test_client(&server).submit(" 412.5 ").await.unwrap();

        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_invalid_input_sends_nothing() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.path("/calculate");
            then.status(200).body(SAMPLE_BODY);
        });
        let client = test_client(&server);

        for raw in ["0", "-5", "", "abc", "inf"] {
            let err = client.submit(raw).await.unwrap_err();
            assert!(err.is_validation(), "expected validation error for {raw:?}");
            assert_eq!(err.to_string(), VALIDATION_MESSAGE);
        }

        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_service_error_detail_is_relayed() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(POST).path("/calculate");
            then.status(400)
                .header("content-type", "application/json")
                .body(r#"{"detail":"X"}"#);
        });

        let err = test_client(&server).submit("100").await.unwrap_err();

        assert_eq!(err.to_string(), "X");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_service_error_without_detail_uses_fallback() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(POST).path("/calculate");
            then.status(500).body("Internal Server Error");
        });

        let err = test_client(&server).submit("100").await.unwrap_err();

        assert_eq!(err.to_string(), GENERIC_SERVER_ERROR);
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_service_error_structured_detail_uses_fallback() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(POST).path("/calculate");
            then.status(422)
                .header("content-type", "application/json")
                .body(r#"{"detail":[{"loc":["body","monthly_kwh"],"msg":"Input should be greater than 0"}]}"#);
        });

        let err = test_client(&server).submit("100").await.unwrap_err();

        assert_eq!(err.to_string(), GENERIC_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_network_error() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200).body(r#"{"system_size_kw":4.5}"#);
        });

        let err = test_client(&server).submit("100").await.unwrap_err();

        assert!(matches!(err, RequestError::Network(_)));
        assert_ne!(err.to_string(), GENERIC_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let base = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };
        let config = ClientConfig::default()
            .with_base_url(Some(&base))
            .with_timeout(Duration::from_secs(5));
        let client = EstimateClient::new(config).unwrap();

        let err = client.submit("100").await.unwrap_err();

        assert!(matches!(err, RequestError::Network(_)));
        assert!(!err.to_string().is_empty());
        assert_ne!(err.to_string(), GENERIC_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_timeout_attempts_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200)
                .body(SAMPLE_BODY)
                .delay(Duration::from_secs(2));
        });
        let config = ClientConfig::default()
            .with_base_url(Some(&server.base_url()))
            .with_timeout(Duration::from_millis(200));
        let client = EstimateClient::new(config).unwrap();

        let err = client.submit("100").await.unwrap_err();

        assert!(matches!(err, RequestError::Network(_)));
        assert_ne!(err.to_string(), GENERIC_SERVER_ERROR);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_info() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .body(r#"{"message":"Solar System Sizing API","docs":"/docs"}"#);
        });

        let info = test_client(&server).service_info().await.unwrap();

        assert_eq!(info.message, "Solar System Sizing API");
        assert_eq!(info.docs, "/docs");
    }
}
