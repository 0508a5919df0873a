//! Main PDD API client implementation.

use crate::api::DnsApi;
use crate::config::{Role, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FORM_CONTENT_TYPE, PDD_TOKEN_HEADER};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use yapdd_core::{DnsParams, PddError, Result};

/// Main PDD API client
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct PddClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    token: HeaderValue,
    authorization: Option<HeaderValue>,
    role: Role,
    base_url: String,
}

impl fmt::Debug for PddClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PddClient")
            .field("role", &self.inner.role)
            .field("base_url", &self.inner.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl PddClient {
    /// Create an administrator client with the given PDD token
    pub fn new(token: impl Into<String>) -> Result<Self> {
        PddClientBuilder::new(token).build()
    }

    /// Create a registrar client with the given PDD and OAuth tokens
    pub fn registrar(token: impl Into<String>, oauth_token: impl Into<String>) -> Result<Self> {
        PddClientBuilder::new(token).registrar(oauth_token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(token: impl Into<String>) -> PddClientBuilder {
        PddClientBuilder::new(token)
    }

    /// The role this client authenticates as
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.inner.role
    }

    /// Access DNS record endpoints
    #[must_use]
    pub fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// Perform a GET request with the parameters in the query string
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        section: &str,
        action: &str,
        params: &DnsParams,
    ) -> Result<T> {
        let mut url = self.build_url(section, action);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query());
        }
        debug!(url = %url, "GET request");

        self.send(Method::GET, url, None).await
    }

    /// Perform a POST request with the parameters as a form body
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        section: &str,
        action: &str,
        params: &DnsParams,
    ) -> Result<T> {
        let url = self.build_url(section, action);
        debug!(url = %url, "POST form request");

        self.send(Method::POST, url, Some(params.to_body())).await
    }

    /// Build `{base}/{role}/{section}/{action}`
    fn build_url(&self, section: &str, action: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.inner.base_url,
            self.inner.role.path_segment(),
            section,
            action
        )
    }

    /// Attach auth headers, send once and decode the reply
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<T> {
        let mut request = self
            .inner
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(PDD_TOKEN_HEADER, self.inner.token.clone());

        if let Some(authorization) = &self.inner.authorization {
            request = request.header(AUTHORIZATION, authorization.clone());
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let transport = |e: reqwest::Error| PddError::Transport {
            method: method.to_string(),
            url: url.clone(),
            source: Box::new(e.without_url()),
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        trace!(status = %status, "response received");

        if status != StatusCode::OK {
            return Err(PddError::UnexpectedStatus {
                code: status.as_u16(),
                status: status.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(PddError::Decode)
    }
}

/// Builder for configuring a [`PddClient`]
pub struct PddClientBuilder {
    token: String,
    role: Role,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    http: Option<HttpClient>,
}

impl PddClientBuilder {
    /// Create a new builder with the given PDD token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            role: Role::Admin,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("yapdd-rust/{}", env!("CARGO_PKG_VERSION")),
            http: None,
        }
    }

    /// Act as a registrar using the given OAuth token
    #[must_use]
    pub fn registrar(mut self, oauth_token: impl Into<String>) -> Self {
        self.role = Role::Registrar {
            oauth_token: oauth_token.into(),
        };
        self
    }

    /// Set the role explicitly
    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
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

    /// Use a caller-supplied HTTP client.
    ///
    /// Timeout and User-Agent settings of this builder are ignored; the
    /// supplied client's own configuration applies.
    #[must_use]
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PddClient> {
        if self.token.is_empty() {
            return Err(PddError::Config("PDD token is empty".into()));
        }
        if let Role::Registrar { oauth_token } = &self.role {
            if oauth_token.is_empty() {
                return Err(PddError::Config("registrar OAuth token is empty".into()));
            }
        }

        let token = sensitive_header(&self.token, "PDD token")?;
        let authorization = self
            .role
            .authorization()
            .map(|value| sensitive_header(&value, "registrar OAuth token"))
            .transpose()?;

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder()
                .timeout(self.timeout)
                .user_agent(&self.user_agent)
                .gzip(true)
                .build()
                .map_err(|e| PddError::Config(format!("failed to build HTTP client: {e}")))?,
        };

        Ok(PddClient {
            inner: Arc::new(ClientInner {
                http,
                token,
                authorization,
                role: self.role,
                base_url: self.base_url,
            }),
        })
    }
}

/// Header value for a secret; rejected up front if not a valid header value
fn sensitive_header(value: &str, what: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        PddError::Config(format!("{what} contains characters not allowed in a header"))
    })?;
    header.set_sensitive(true);
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_admin() {
        let client = PddClient::new("token").unwrap();
        assert_eq!(
            client.build_url("dns", "add"),
            "https://pddimp.yandex.ru/api2/admin/dns/add"
        );
    }

    #[test]
    fn test_build_url_registrar() {
        let client = PddClient::registrar("token", "oauthToken").unwrap();
        assert!(client.role().is_registrar());
        assert_eq!(
            client.build_url("dns", "del"),
            "https://pddimp.yandex.ru/api2/registrar/dns/del"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = PddClient::builder("token")
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(
            client.build_url("dns", "list"),
            "http://localhost:8080/admin/dns/list"
        );
    }

    #[test]
    fn test_empty_tokens_rejected() {
        assert!(matches!(PddClient::new(""), Err(PddError::Config(_))));
        assert!(matches!(
            PddClient::registrar("token", ""),
            Err(PddError::Config(_))
        ));
    }

    #[test]
    fn test_tokens_must_be_header_safe() {
        let err = PddClient::new("tok\nen").unwrap_err();
        assert!(matches!(err, PddError::Config(ref msg) if msg.starts_with("PDD token")));

        let err = PddClient::registrar("token", "oauth\r\n").unwrap_err();
        assert!(
            matches!(err, PddError::Config(ref msg) if msg.starts_with("registrar OAuth token"))
        );
    }

    #[test]
    fn test_debug_hides_tokens() {
        let client = PddClient::registrar("secret-pdd", "secret-oauth").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("Registrar"));
        assert!(!debug.contains("secret-pdd"));
        assert!(!debug.contains("secret-oauth"));
    }

    #[test]
    fn test_custom_http_client() {
        let client = PddClient::builder("token")
            .http_client(HttpClient::new())
            .role(Role::Registrar {
                oauth_token: "o".into(),
            })
            .build()
            .unwrap();
        assert_eq!(client.role().path_segment(), "registrar");
    }
}
