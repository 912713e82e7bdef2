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

use super::version::VersionSummary;

/// Endpoint configuration at a given version, as returned by the
/// `resources-detail`, modify, clone and remove calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(rename = "apiEndPointId")]
    pub api_endpoint_id: u64,
    #[serde(rename = "apiEndPointName")]
    pub api_endpoint_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub base_path: String,
    #[serde(rename = "apiEndPointScheme", skip_serializing_if = "Option::is_none")]
    pub api_endpoint_scheme: Option<String>,
    #[serde(rename = "apiEndPointHosts")]
    pub api_endpoint_hosts: Vec<String>,
    #[serde(rename = "apiEndPointLocked")]
    pub api_endpoint_locked: bool,
    #[serde(rename = "apiEndPointVersion", skip_serializing_if = "Option::is_none")]
    pub api_endpoint_version: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<u64>,
    pub lock_version: u64,
    pub api_category_ids: Vec<u64>,
    pub api_resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_version: Option<VersionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_version: Option<VersionSummary>,
    pub protected_by_api_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date: Option<String>,
}

/// A resource (path) defined on an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub api_resource_id: u64,
    pub api_resource_name: String,
    pub resource_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub api_resource_methods: Vec<ResourceMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceMethod {
    pub api_resource_method_id: u64,
    /// HTTP method name, e.g. `GET`.
    pub api_resource_method: String,
}
