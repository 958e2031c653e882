//! Lockstep API client.
//!
//! Low-level HTTP client that handles credentials and raw requests.
//! Resource operations live on the resource clients, which reach the network
//! through this type's [`Transport`] implementation.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{multipart, Client, Method, RequestBuilder, Response};
use url::Url;

use crate::error::{LockstepError, Result};
use crate::params::QueryParams;
use crate::transport::{ApiResponse, RequestBody, Transport};

const SANDBOX_API_URL: &str = "https://api.sbx.lockstep.io/";
const PRODUCTION_API_URL: &str = "https://api.lockstep.io/";
const USER_AGENT: &str = concat!("lockstep-sdk-rust/", env!("CARGO_PKG_VERSION"));
const SDK_TYPE: &str = "Rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A named Lockstep Platform environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// `https://api.sbx.lockstep.io/`
    Sandbox,
    /// `https://api.lockstep.io/`
    Production,
}

impl Environment {
    /// Base URL of this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_API_URL,
            Self::Production => PRODUCTION_API_URL,
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = LockstepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sbx" | "sandbox" => Ok(Self::Sandbox),
            "prd" | "production" => Ok(Self::Production),
            other => Err(LockstepError::ConfigMissing(format!(
                "unknown environment '{other}', expected 'sbx' or 'prd'"
            ))),
        }
    }
}

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Sent as the `Api-Key` header.
    ApiKey(String),
    /// Sent as `Authorization: Bearer <token>`.
    BearerToken(String),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(..)"),
            Self::BearerToken(_) => f.write_str("BearerToken(..)"),
        }
    }
}

/// Low-level Lockstep API client.
///
/// Handles credentials and HTTP requests. Resource-specific operations are
/// reached through the resource clients, e.g. [`LockstepClient::companies`].
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use lockstep_sdk::{Credential, LockstepClient};
///
/// # fn example() -> lockstep_sdk::Result<()> {
/// // Create from environment variables
/// let client = LockstepClient::from_env()?;
///
/// // Or configure manually
/// let client = LockstepClient::new(
///     Credential::ApiKey("your-api-key".to_string()),
///     "https://api.sbx.lockstep.io",
/// )?
/// .with_app_name("my-integration");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LockstepClient {
    http: Client,
    base_url: Arc<Url>,
    credential: Credential,
    app_name: Option<String>,
}

impl std::fmt::Debug for LockstepClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockstepClient")
            .field("base_url", &self.base_url.as_str())
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}

impl LockstepClient {
    /// Create a client from environment variables.
    ///
    /// - `LOCKSTEP_API_KEY` or `LOCKSTEP_BEARER_TOKEN` (one is required; the
    ///   API key wins when both are set)
    /// - `LOCKSTEP_API_URL` (explicit base URL), otherwise `LOCKSTEP_ENV`
    ///   (`sbx` by default, or `prd`)
    /// - `LOCKSTEP_APP_NAME` (optional, sent as `ApplicationName`)
    ///
    /// # Errors
    ///
    /// Returns an error if no credential is set or the environment is unknown.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a client from configuration values supplied by `lookup`, which
    /// is queried with the same variable names as [`from_env`](Self::from_env).
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let credential = match (lookup("LOCKSTEP_API_KEY"), lookup("LOCKSTEP_BEARER_TOKEN")) {
            (Some(key), _) => Credential::ApiKey(key),
            (None, Some(token)) => Credential::BearerToken(token),
            (None, None) => {
                return Err(LockstepError::ConfigMissing(
                    "LOCKSTEP_API_KEY or LOCKSTEP_BEARER_TOKEN environment variable not set"
                        .to_string(),
                ))
            }
        };

        let base_url = match lookup("LOCKSTEP_API_URL") {
            Some(url) => url,
            None => {
                let environment = match lookup("LOCKSTEP_ENV") {
                    Some(name) => name.parse()?,
                    None => Environment::Sandbox,
                };
                environment.base_url().to_string()
            }
        };

        let client = Self::new(credential, &base_url)?;
        Ok(match lookup("LOCKSTEP_APP_NAME") {
            Some(name) => client.with_app_name(name),
            None => client,
        })
    }

    /// Create a client for a named environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn for_environment(credential: Credential, environment: Environment) -> Result<Self> {
        Self::new(credential, environment.base_url())
    }

    /// Create a new client with the provided credential and base URL.
    ///
    /// # Arguments
    ///
    /// * `credential` - API key or bearer token
    /// * `base_url` - Base URL for the Lockstep API (e.g., `https://api.lockstep.io`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(credential: Credential, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("sdktype"), HeaderValue::from_static(SDK_TYPE));
        headers.insert(
            HeaderName::from_static("sdkversion"),
            HeaderValue::from_static(SDK_VERSION),
        );

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(LockstepError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            credential,
            app_name: None,
        })
    }

    /// Identify the calling application in the `ApplicationName` header.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path against the base URL, keeping any path prefix the
    /// base URL carries.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = match &self.credential {
            Credential::ApiKey(key) => builder.header("Api-Key", key),
            Credential::BearerToken(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        };
        match &self.app_name {
            Some(name) => builder.header("ApplicationName", name),
            None => builder,
        }
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Handle rate limiting
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(LockstepError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;
        Err(LockstepError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// Lockstep returns RFC 7807 problem details; older endpoints use a plain
    /// `message` or `error` field.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            for field in ["detail", "title", "message", "error"] {
                if let Some(msg) = json.get(field).and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

#[async_trait]
impl Transport for LockstepClient {
    #[tracing::instrument(skip(self, body, params), fields(params = params.len()))]
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        params: QueryParams,
    ) -> Result<ApiResponse> {
        let url = self.endpoint(path)?;

        let mut builder = self.authorize(self.http.request(method, url));
        if !params.is_empty() {
            builder = builder.query(params.pairs());
        }
        builder = match body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::File(file)) => {
                let part = multipart::Part::bytes(file.contents).file_name(file.file_name);
                builder.multipart(multipart::Form::new().part("file", part))
            }
            None => builder,
        };

        let response = builder.send().await.map_err(LockstepError::HttpError)?;
        tracing::debug!(status = %response.status(), "received response");

        let response = Self::check_response(response).await?;
        ApiResponse::from_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_key() -> Credential {
        Credential::ApiKey("test-key".to_string())
    }

    #[test]
    fn test_client_debug() {
        let client = LockstepClient::new(api_key(), "https://api.sbx.lockstep.io").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("LockstepClient"));
        assert!(debug.contains("base_url"));
        // Credential should not be in debug output
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let debug = format!("{:?}", Credential::BearerToken("secret".to_string()));
        assert_eq!(debug, "BearerToken(..)");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = LockstepClient::new(api_key(), "https://api.lockstep.io").unwrap();
        let client2 = LockstepClient::new(api_key(), "https://api.lockstep.io/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let client = LockstepClient::new(api_key(), "https://proxy.example.com/lockstep").unwrap();
        let url = client.endpoint("/api/v1/Companies/abc-123").unwrap();
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/lockstep/api/v1/Companies/abc-123"
        );
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("sbx".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("PRD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_for_environment() {
        let client = LockstepClient::for_environment(api_key(), Environment::Production).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.lockstep.io/");
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_config_api_key_wins_over_bearer_token() {
        let client = LockstepClient::from_lookup(lookup(&[
            ("LOCKSTEP_BEARER_TOKEN", "jwt"),
            ("LOCKSTEP_API_KEY", "key-1"),
        ]))
        .unwrap();
        assert_eq!(client.credential, Credential::ApiKey("key-1".to_string()));

        let client =
            LockstepClient::from_lookup(lookup(&[("LOCKSTEP_BEARER_TOKEN", "jwt")])).unwrap();
        assert_eq!(client.credential, Credential::BearerToken("jwt".to_string()));
    }

    #[test]
    fn test_config_requires_a_credential() {
        let result = LockstepClient::from_lookup(lookup(&[("LOCKSTEP_ENV", "prd")]));
        assert!(matches!(result, Err(LockstepError::ConfigMissing(_))));
    }

    #[test]
    fn test_config_api_url_wins_over_environment() {
        let client = LockstepClient::from_lookup(lookup(&[
            ("LOCKSTEP_API_KEY", "key-1"),
            ("LOCKSTEP_ENV", "prd"),
            ("LOCKSTEP_API_URL", "http://localhost:8080"),
        ]))
        .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_config_environment_defaults_to_sandbox() {
        let client =
            LockstepClient::from_lookup(lookup(&[("LOCKSTEP_API_KEY", "key-1")])).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.sbx.lockstep.io/");

        let client = LockstepClient::from_lookup(lookup(&[
            ("LOCKSTEP_API_KEY", "key-1"),
            ("LOCKSTEP_ENV", "prd"),
        ]))
        .unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.lockstep.io/");
    }

    #[test]
    fn test_config_unknown_environment_is_an_error() {
        let result = LockstepClient::from_lookup(lookup(&[
            ("LOCKSTEP_API_KEY", "key-1"),
            ("LOCKSTEP_ENV", "staging"),
        ]));
        assert!(matches!(result, Err(LockstepError::ConfigMissing(_))));
    }

    #[test]
    fn test_config_app_name() {
        let client = LockstepClient::from_lookup(lookup(&[
            ("LOCKSTEP_API_KEY", "key-1"),
            ("LOCKSTEP_APP_NAME", "billing-sync"),
        ]))
        .unwrap();
        assert_eq!(client.app_name.as_deref(), Some("billing-sync"));

        let client =
            LockstepClient::from_lookup(lookup(&[("LOCKSTEP_API_KEY", "key-1")])).unwrap();
        assert!(client.app_name.is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = LockstepClient::new(api_key(), "not a url");
        assert!(matches!(result, Err(LockstepError::UrlError(_))));
    }
}
