//
// (C) Copyright IBM 2026
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at http://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.

//! API Definitions v2 Client

use log::{debug, error};
use reqwest::header;
use reqwest_middleware::{ClientBuilder as ReqwestClientBuilder, Middleware};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::middleware::LoggingMiddleware;
use crate::models::errors::ProblemDetail;

/// An asynchronous `Client` to make Requests with.
///
/// The client holds no mutable state; clone it freely to share it between
/// tasks.
#[derive(Debug, Clone)]
pub struct Client {
    /// The base URL this client sends requests to
    pub(crate) base_url: String,
    /// HTTP client to interact with the API Definitions service
    pub(crate) client: reqwest_middleware::ClientWithMiddleware,
    pub(crate) config: Config,
}

impl Client {
    /// Configuration this client was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn endpoint_url(&self, endpoint_id: u64) -> String {
        format!("{}/api-definitions/v2/endpoints/{}", self.base_url, endpoint_id)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        self.handle_request(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, U: Serialize>(
        &self,
        url: &str,
        body: &U,
    ) -> Result<T> {
        debug!("PUT {}", url);
        let resp = self.client.put(url).json(body).send().await?;
        self.handle_request(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, U: Serialize>(
        &self,
        url: &str,
        body: &U,
    ) -> Result<T> {
        debug!("POST {}", url);
        let resp = self.client.post(url).json(body).send().await?;
        self.handle_request(resp).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("DELETE {}", url);
        let resp = self.client.delete(url).send().await?;
        self.handle_request(resp).await
    }

    async fn handle_request<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let url = resp.url().to_string();
        let json_text = resp.text().await?;
        if status.is_success() {
            debug!("{}", json_text);
            serde_json::from_str(&json_text).map_err(|source| {
                error!("{} {}: {}", status, url, source);
                Error::Decode {
                    source,
                    body: json_text,
                }
            })
        } else {
            error!("{} {} {}", status, url, json_text);
            Err(Error::Api {
                status,
                problem: ProblemDetail::parse(&json_text),
                body: json_text,
            })
        }
    }
}

/// A [`ClientBuilder`] can be used to create a [`Client`] with custom configuration.
#[must_use]
#[derive(Clone)]
pub struct ClientBuilder {
    config: Config,
    middlewares: Vec<Arc<dyn Middleware>>,
    request_logging: bool,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("middlewares", &self.middlewares.len())
            .field("request_logging", &self.request_logging)
            .finish()
    }
}

impl ClientBuilder {
    /// Construct a new [`ClientBuilder`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use api_endpoints::ClientBuilder;
    ///
    /// let _builder = ClientBuilder::new("https://example.com");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(Config {
            base_url: base_url.into(),
            ..Config::default()
        })
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            middlewares: Vec::new(),
            request_logging: true,
        }
    }

    /// Construct a [`ClientBuilder`] from `API_ENDPOINTS_*` environment
    /// variables, see [`Config::from_env`].
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(Config::from_env()?))
    }

    pub fn with_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    pub fn with_read_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    pub fn with_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a middleware to the transport. Middlewares run in the order they
    /// were added, after the request logger. Request signing and retry
    /// policies are plugged in here.
    pub fn with_middleware<M: Middleware>(&mut self, middleware: M) -> &mut Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Do not install [`LoggingMiddleware`].
    pub fn without_request_logging(&mut self) -> &mut Self {
        self.request_logging = false;
        self
    }

    /// Returns a [`Client`] that uses this [`ClientBuilder`] configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use api_endpoints::ClientBuilder;
    /// use std::time::Duration;
    ///
    /// let _client = ClientBuilder::new("https://example.com")
    ///     .with_timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base URL or a header is invalid,
    /// and [`Error::Transport`] when the HTTP client cannot be created.
    pub fn build(&mut self) -> Result<Client> {
        let base_url = self.config.trimmed_base_url().to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let mut reqwest_client_builder = reqwest::Client::builder();
        reqwest_client_builder = reqwest_client_builder.connection_verbose(true);
        if let Some(v) = self.config.timeout {
            reqwest_client_builder = reqwest_client_builder.timeout(v)
        }
        if let Some(v) = self.config.read_timeout {
            reqwest_client_builder = reqwest_client_builder.read_timeout(v)
        }
        if let Some(v) = self.config.connect_timeout {
            reqwest_client_builder = reqwest_client_builder.connect_timeout(v)
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        for (name, value) in &self.config.headers {
            let name = header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("Invalid header name '{}': {}", name, e)))?;
            let value = header::HeaderValue::from_str(value)
                .map_err(|e| Error::Config(format!("Invalid value for header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }
        reqwest_client_builder = reqwest_client_builder.default_headers(headers);

        let mut reqwest_builder = ReqwestClientBuilder::new(reqwest_client_builder.build()?);
        if self.request_logging {
            reqwest_builder = reqwest_builder.with(LoggingMiddleware);
        }
        for middleware in &self.middlewares {
            reqwest_builder = reqwest_builder.with_arc(middleware.clone());
        }

        Ok(Client {
            base_url,
            client: reqwest_builder.build(),
            config: self.config.clone(),
        })
    }
}
