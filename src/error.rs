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

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::errors::ProblemDetail;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connection, TLS, timeout or
    /// middleware failure).
    #[error(transparent)]
    Transport(#[from] reqwest_middleware::Error),

    /// The service answered with a non-2xx status.
    #[error("Status: {status}, Fail {body}")]
    Api {
        status: StatusCode,
        body: String,
        /// Parsed form of `body` when the service sent a problem document.
        problem: Option<ProblemDetail>,
    },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// `latest` was requested for an endpoint that has no versions.
    #[error("endpoint {endpoint_id} has no versions")]
    NotFound { endpoint_id: u64 },

    #[error("invalid version '{0}', expected 'latest' or a version number")]
    InvalidVersion(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.into())
    }
}

impl Error {
    /// HTTP status of an [`Error::Api`], `None` for every other variant.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
