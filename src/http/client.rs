use std::sync::LazyLock;

use reqwest::{Client, Method, RequestBuilder};

use crate::config::ClientConfiguration;
use crate::error::ApiError;
use super::builder::{header_map, join_url};

/// Build a `reqwest::Client` from `config`.
pub fn build_client(config: &ClientConfiguration) -> Result<Client, ApiError> {
    let settings = &config.settings;
    let mut builder = Client::builder()
        .use_rustls_tls()
        .default_headers(header_map(&config.default_headers)?)
        .cookie_store(config.with_credentials)
        .timeout(settings.timeout);

    if let Some(connect) = settings.connect_timeout {
        builder = builder.connect_timeout(connect);
    }
    if let Some(ua) = &settings.user_agent {
        builder = builder.user_agent(ua.as_str());
    }

    Ok(builder.build()?)
}

/// A configured client bound to the API base URL. Cloning shares the
/// connection pool and the cookie store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfiguration,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ClientConfiguration) -> Result<Self, ApiError> {
        let client = build_client(&config)?;
        tracing::debug!(
            base_url = %config.base_url,
            with_credentials = config.with_credentials,
            timeout = ?config.settings.timeout,
            "api client built"
        );
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfiguration {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The underlying client, for anything the helpers below don't cover.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "request");
        self.client.request(method, url)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}

static SHARED: LazyLock<ApiClient> = LazyLock::new(|| {
    ApiClient::new(ClientConfiguration::from_env()).expect("Failed to build HTTP client")
});

/// The process-wide client, resolved from the environment on first use.
/// Only `VITE_API_URL` is read; transport settings stay at their defaults.
/// Callers wanting `client.toml` build their own client with
/// `ClientConfiguration::with_settings`.
pub fn shared() -> &'static ApiClient {
    &SHARED
}
