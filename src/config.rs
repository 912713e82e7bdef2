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

//! Client configuration

use std::time::Duration;

use crate::error::{Error, Result};

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Settings shared by every request a [`Client`](crate::Client) sends.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Scheme and host of the API, without the `/api-definitions/v2` prefix.
    pub base_url: String,
    /// Total time allowed for a request, including the response body.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
    /// Extra headers added to every request.
    pub headers: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            read_timeout: None,
            headers: Vec::new(),
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// # Environment variables
    ///
    /// * `API_ENDPOINTS_BASE_URL`: base URL of the service
    /// * `API_ENDPOINTS_TIMEOUT_SECS`: total request timeout in seconds
    /// * `API_ENDPOINTS_CONNECT_TIMEOUT_SECS`: connect timeout in seconds
    /// * `API_ENDPOINTS_READ_TIMEOUT_SECS`: read timeout in seconds
    /// * `API_ENDPOINTS_HEADERS`: comma separated `name=value` pairs
    ///
    /// Unset variables keep their default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Config::default();
        if let Some(base_url) = env("API_ENDPOINTS_BASE_URL") {
            config.base_url = base_url.trim().to_string();
        }
        config.timeout = parse_secs("API_ENDPOINTS_TIMEOUT_SECS", env("API_ENDPOINTS_TIMEOUT_SECS"))?;
        config.connect_timeout = parse_secs(
            "API_ENDPOINTS_CONNECT_TIMEOUT_SECS",
            env("API_ENDPOINTS_CONNECT_TIMEOUT_SECS"),
        )?;
        config.read_timeout = parse_secs(
            "API_ENDPOINTS_READ_TIMEOUT_SECS",
            env("API_ENDPOINTS_READ_TIMEOUT_SECS"),
        )?;
        if let Some(headers) = env("API_ENDPOINTS_HEADERS") {
            config.headers = headers
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| match s.split_once('=') {
                    Some((k, v)) if !k.trim().is_empty() => {
                        Ok((k.trim().to_string(), v.trim().to_string()))
                    }
                    _ => Err(Error::Config(format!(
                        "Invalid API_ENDPOINTS_HEADERS entry '{s}'"
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
        }
        Ok(config)
    }

    /// Base URL with any trailing `/` removed.
    pub(crate) fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn parse_secs(key: &str, value: Option<String>) -> Result<Option<Duration>> {
    value
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|secs| *secs > 0.0)
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .ok_or_else(|| Error::Config(format!("Invalid {key}: '{v}'")))
        })
        .transpose()
}
