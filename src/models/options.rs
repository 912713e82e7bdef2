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

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Selects a version of an endpoint: either an explicit version number or
/// the most recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSelector {
    /// Resolved to the last entry of the endpoint's version list.
    Latest,
    Number(u64),
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VersionSelector::Latest => write!(f, "latest"),
            VersionSelector::Number(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for VersionSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(VersionSelector::Latest);
        }
        s.parse::<u64>()
            .map(VersionSelector::Number)
            .map_err(|_| Error::InvalidVersion(s.to_string()))
    }
}

impl From<u64> for VersionSelector {
    fn from(n: u64) -> Self {
        VersionSelector::Number(n)
    }
}

/// Body of a clone request. The source version is taken from the path.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct CloneVersionRequest {}

/// Fields to change on an endpoint version. Only non-empty fields are sent.
///
/// # Example
///
/// ```rust
/// use api_endpoints::ModifyVersionOptions;
///
/// let _options = ModifyVersionOptions::new()
///     .with_name("bookstore")
///     .with_hostnames(vec!["books.example.com".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModifyVersionOptions {
    #[serde(rename = "apiEndPointName", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "basePath", skip_serializing_if = "String::is_empty")]
    pub base_path: String,
    #[serde(rename = "apiEndPointHosts", skip_serializing_if = "Vec::is_empty")]
    pub hostnames: Vec<String>,
    #[serde(rename = "apiEndPointScheme", skip_serializing_if = "String::is_empty")]
    pub scheme: String,
}

impl ModifyVersionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_hostnames(mut self, hostnames: Vec<String>) -> Self {
        self.hostnames = hostnames;
        self
    }

    /// Accepted values are `http`, `https` and `http/https`.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// `true` when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.base_path.is_empty()
            && self.hostnames.is_empty()
            && self.scheme.is_empty()
    }
}
