//! Fetch orchestration: URL construction, the HTTP GET, and response
//! decryption.
//!
//! One [`ApiClient::fetch`] call is one request: a fresh host label, a single
//! GET with no custom headers, and one categorized outcome. Retry policy, if
//! any, belongs to the caller. Completion is delivered by awaiting the
//! returned future, so the result always lands back on the invoking task.

use common::FetchError;
use tracing::{debug, warn};

use crate::crypto;
use crate::host;

/// Fixed apex domain of the remote API.
pub const API_DOMAIN: &str = "s-25.shop";

/// Fixed API version path segment.
pub const API_VERSION: &str = "v6.2";

/// How the request origin is formed for each call.
#[derive(Debug, Clone)]
enum Origin {
    /// `https://{label}.{domain}` with a fresh label per request.
    Rotating { domain: String },
    /// A literal origin such as `http://127.0.0.1:9000`; no label rotation.
    Fixed { base: String },
}

/// Asynchronous client for the encrypted Ostora API.
///
/// Cheap to clone; the underlying [`reqwest::Client`] pools connections
/// internally. Concurrent calls share nothing beyond the embedded key
/// material, which is read-only.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: Origin,
}

impl ApiClient {
    /// Client for the production rotating hostname under [`API_DOMAIN`].
    pub fn new() -> Self {
        Self::with_domain(API_DOMAIN)
    }

    /// Client rotating subdomains under an alternative apex domain.
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: Origin::Rotating {
                domain: domain.into(),
            },
        }
    }

    /// Client pinned to a literal origin, bypassing subdomain rotation.
    /// Intended for staging deployments and HTTP-mock tests.
    pub fn with_fixed_origin(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: Origin::Fixed { base: base.into() },
        }
    }

    /// Build the request URL for `endpoint`.
    ///
    /// The endpoint is interpolated into the path verbatim — callers must
    /// supply a URL-safe value.
    fn request_url(&self, endpoint: &str) -> String {
        match &self.origin {
            Origin::Rotating { domain } => {
                let label = host::generate_label(host::LABEL_LEN);
                format!("https://{label}.{domain}/api/{API_VERSION}/{endpoint}")
            }
            Origin::Fixed { base } => {
                format!("{}/api/{API_VERSION}/{endpoint}", base.trim_end_matches('/'))
            }
        }
    }

    /// Fetch `endpoint` from the remote service and decrypt the response
    /// body into plaintext.
    ///
    /// Exactly one HTTP GET is issued per call, with no retry and no
    /// timeout beyond the HTTP client's defaults.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidArgument`] — `endpoint` is empty or blank;
    ///   no request is issued.
    /// - [`FetchError::Network`] — DNS, connection, or timeout failure.
    /// - [`FetchError::Http`] — non-success status, or an unreadable body.
    /// - [`FetchError::Decoding`] — the body failed Base64 decoding or
    ///   decryption.
    pub async fn fetch(&self, endpoint: &str) -> Result<String, FetchError> {
        if endpoint.trim().is_empty() {
            return Err(FetchError::InvalidArgument);
        }

        let url = self.request_url(endpoint);
        debug!(endpoint, "fetching");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(endpoint, error = %e, "transport failure");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "non-success response");
            return Err(FetchError::Http(status.as_u16()));
        }

        // An unreadable body is reported the same way as a missing one: an
        // HTTP-level failure carrying the response status.
        let status_code = status.as_u16();
        let body = response
            .text()
            .await
            .map_err(|_| FetchError::Http(status_code))?;

        crypto::decode_response(&body).map_err(|e| FetchError::Decoding(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
