//! Firefox Relay async client and its HTTP transport.

use crate::{Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Production Relay endpoint.
pub const DEFAULT_BASE_URL: &str = "https://relay.firefox.com";

/// Path prefix shared by every API resource.
pub const API_BASE_PATH: &str = "/api/v1/";

const USER_AGENT_VALUE: &str = concat!("ffrelay-client/", env!("CARGO_PKG_VERSION"));

/// Async client for the Firefox Relay API.
///
/// Holds only immutable configuration, so a single instance (or its clones,
/// which share one connection pool) can serve concurrent calls.
///
/// Resource operations live in `resources/`: profiles, relay addresses,
/// domain addresses and inbound contacts.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the production endpoint with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use ffrelay_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ffrelay_client::Error> {
    /// let client = Client::new("my-api-token")?;
    /// let profiles = client.list_profiles().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().token(token).build()
    }

    /// Base URL requests are sent to, without the API path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Full URL for a path relative to [`API_BASE_PATH`].
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_BASE_PATH, path)
    }

    /// Perform one HTTP exchange and return the status and the whole body.
    ///
    /// The response is consumed by reading its body, so nothing is left open
    /// whichever way the caller handles the result.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<(StatusCode, String)> {
        let url = self.url(path);
        debug!(method = %method, url = %url, "sending request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = body_text(&response.bytes().await?);
        debug!(status = status.as_u16(), bytes = text.len(), "received response");

        Ok((status, text))
    }

    pub(crate) async fn get(&self, path: &str) -> Result<(StatusCode, String)> {
        self.send(Method::GET, path, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: Vec<u8>) -> Result<(StatusCode, String)> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn patch(&self, path: &str, body: Vec<u8>) -> Result<(StatusCode, String)> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(StatusCode, String)> {
        self.send(Method::DELETE, path, None).await
    }

    /// GET `path` and decode the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (status, body) = self.get(path).await?;
        decode(classify(status, body)?)
    }

    /// POST `payload` as JSON to `path` and decode the body as `T`.
    pub(crate) async fn post_json<B, T>(&self, path: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, body) = self.post(path, encode(payload)?).await?;
        decode(classify(status, body)?)
    }

    /// PATCH `payload` as JSON to `path` and decode the body as `T`.
    pub(crate) async fn patch_json<B, T>(&self, path: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, body) = self.patch(path, encode(payload)?).await?;
        decode(classify(status, body)?)
    }

    /// DELETE `path`, ignoring any success body.
    pub(crate) async fn delete_item(&self, path: &str) -> Result<()> {
        let (status, body) = self.delete(path).await?;
        classify(status, body).map(|_| ())
    }
}

/// Item path under a collection: `<collection><id>/`.
pub(crate) fn item_path(collection: &str, id: u64) -> String {
    format!("{collection}{id}/")
}

/// Map any status of 400 or above to [`Error::Api`], passing the body through
/// untouched otherwise.
pub(crate) fn classify(status: StatusCode, body: String) -> Result<String> {
    if status.as_u16() >= 400 {
        return Err(Error::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Body bytes as text, ignoring any `charset` the response declares.
///
/// Valid UTF-8 passes through unchanged; invalid sequences become U+FFFD.
fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Serialize a request body before anything touches the network.
fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(Error::Encode)
}

fn decode<T: DeserializeOwned>(body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(Error::Decode)
}

/// Builder for configuring a Relay client.
///
/// Start with [`Client::builder`]; only the token is required.
#[derive(Clone)]
pub struct ClientBuilder {
    token: Option<String>,
    base_url: String,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No token (must be set before [`build`](Self::build), which fails
    ///   with [`Error::MissingToken`] otherwise)
    /// - [`DEFAULT_BASE_URL`]
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - `ffrelay-client/<version>` user agent
    /// - No timeout beyond reqwest's own
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
        }
    }

    /// API token from the Relay account settings page.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the service root (e.g. a local mock server).
    ///
    /// A trailing `/` is dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:9050").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Total per-request timeout, enforced by reqwest.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// No network request is made. Fails with [`Error::MissingToken`] when no
    /// token (or a blank one) was set.
    ///
    /// # Examples
    /// ```no_run
    /// # use ffrelay_client::Client;
    /// # fn main() -> Result<(), ffrelay_client::Error> {
    /// let client = Client::builder()
    ///     .token("my-api-token")
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder()
            .default_headers(self.headers()?)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Client {
            http: builder.build()?,
            base_url: self.base_url,
            proxy: self.proxy,
        })
    }

    /// Headers sent with every request.
    fn headers(&self) -> Result<HeaderMap> {
        let token = match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return Err(Error::MissingToken),
        };
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        Ok(headers)
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("danger_accept_invalid_certs", &self.danger_accept_invalid_certs)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
