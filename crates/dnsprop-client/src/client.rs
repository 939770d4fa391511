//! DNS-over-HTTPS resolver client.

use crate::resolver::Resolver;
use async_trait::async_trait;
use dnsprop_core::{CheckError, DohResponse, RecordType, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Public JSON DNS-over-HTTPS endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dns.google/resolve";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a JSON DNS-over-HTTPS resolver
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct DohClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    endpoint: Url,
}

impl DohClient {
    /// Create a client for the default endpoint
    pub fn new() -> Result<Self> {
        DohClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> DohClientBuilder {
        DohClientBuilder::new()
    }

    /// Endpoint queries are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    /// Look up `record_type` records for `domain`
    pub async fn lookup(&self, domain: &str, record_type: RecordType) -> Result<DohResponse> {
        let url = self.build_url(domain, record_type);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CheckError::unknown(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Build the query URL: `name`, `type` and `cd=1`
    fn build_url(&self, domain: &str, record_type: RecordType) -> Url {
        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("name", domain)
            .append_pair("type", record_type.as_str())
            .append_pair("cd", "1");
        url
    }

    /// Check the HTTP and DNS status and parse the body
    async fn handle_response(&self, response: reqwest::Response) -> Result<DohResponse> {
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), "resolver returned HTTP error");
            return Err(CheckError::http_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CheckError::unknown(e.to_string()))?;
        let data: DohResponse = serde_json::from_str(&body)?;

        if !data.is_success() {
            debug!(status = data.status, comment = ?data.comment, "resolver reported failure");
            return Err(CheckError::response_err());
        }

        Ok(data)
    }
}

#[async_trait]
impl Resolver for DohClient {
    async fn resolve(&self, domain: &str, record_type: RecordType) -> Result<DohResponse> {
        self.lookup(domain, record_type).await
    }
}

/// Builder for configuring a [`DohClient`]
pub struct DohClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for DohClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DohClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("dnsprop/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the resolver endpoint (useful for testing)
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DohClient> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| CheckError::unknown(format!("invalid endpoint {}: {e}", self.endpoint)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| CheckError::unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(DohClient {
            inner: Arc::new(ClientInner { http, endpoint }),
        })
    }
}
