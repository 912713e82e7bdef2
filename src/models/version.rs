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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment state of a version on the staging or production network.
// SCREAMING_SNAKE_CASE matches the upper case values used by the API,
// e.g. "DEACTIVATED".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusValue {
    Pending,
    Active,
    Deactivated,
    Failed,
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StatusValue::Pending => "PENDING",
            StatusValue::Active => "ACTIVE",
            StatusValue::Deactivated => "DEACTIVATED",
            StatusValue::Failed => "FAILED",
        };
        write!(f, "{}", name)
    }
}

/// All versions of one endpoint, in the order returned by the service.
/// The last entry is the most recent version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Versions {
    #[serde(rename = "apiEndPointId")]
    pub api_endpoint_id: u64,
    #[serde(rename = "apiEndPointName")]
    pub api_endpoint_name: String,
    #[serde(rename = "apiVersions")]
    pub api_versions: Vec<Version>,
}

/// Summary of a single endpoint version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Version {
    pub created_by: String,
    pub create_date: String,
    pub update_date: String,
    pub updated_by: String,
    #[serde(rename = "apiEndPointVersionId")]
    pub api_endpoint_version_id: u64,
    pub base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version number this version was cloned from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_status: Option<StatusValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_status: Option<StatusValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_date: Option<String>,
    pub is_version_locked: bool,
    pub available_actions: Vec<String>,
    pub version_number: u64,
    pub lock_version: u64,
}

/// Pointer to the version active on one network, as embedded in an
/// [`Endpoint`](crate::Endpoint). Empty fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<u64>,
}

impl Versions {
    /// Most recent version, i.e. the last one in server order.
    pub fn latest(&self) -> Option<&Version> {
        self.api_versions.last()
    }
}
