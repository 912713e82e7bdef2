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

use log::debug;

use crate::error::{Error, Result};
use crate::models::{
    CloneVersionRequest, Endpoint, ModifyVersionOptions, Version, VersionSelector, Versions,
};
use crate::Client;

impl Client {
    /// Returns every version of an endpoint, oldest first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     use api_endpoints::ClientBuilder;
    ///
    ///     let client = ClientBuilder::new("http://localhost:8080").build()?;
    ///     let versions = client.list_versions(42).await?;
    ///     for v in &versions.api_versions {
    ///         println!("{} {:?}", v.version_number, v.production_status);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    /// - connection failed.
    /// - the service answered with a non-2xx status.
    /// - the response body is not a version list.
    ///
    pub async fn list_versions(&self, endpoint_id: u64) -> Result<Versions> {
        let url = format!("{}/versions", self.endpoint_url(endpoint_id));
        self.get(&url).await
    }

    /// Returns the most recent version of an endpoint, i.e. the last entry
    /// of [`list_versions`](Self::list_versions).
    ///
    /// # Errors
    ///
    /// Same as [`list_versions`](Self::list_versions), plus
    /// [`Error::NotFound`] when the endpoint has no versions.
    pub async fn latest_version(&self, endpoint_id: u64) -> Result<Version> {
        let versions = self.list_versions(endpoint_id).await?;
        versions
            .latest()
            .cloned()
            .ok_or(Error::NotFound { endpoint_id })
    }

    async fn resolve_version(&self, endpoint_id: u64, version: VersionSelector) -> Result<u64> {
        match version {
            VersionSelector::Number(n) => Ok(n),
            VersionSelector::Latest => {
                let n = self.latest_version(endpoint_id).await?.version_number;
                debug!("endpoint {}: latest resolved to version {}", endpoint_id, n);
                Ok(n)
            }
        }
    }

    /// Returns an endpoint version together with its resources.
    ///
    /// `VersionSelector::Latest` costs one extra request to look up the
    /// version list first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     use api_endpoints::{ClientBuilder, VersionSelector};
    ///
    ///     let client = ClientBuilder::new("http://localhost:8080").build()?;
    ///     let endpoint = client.get_version(42, "latest".parse()?).await?;
    ///     let pinned = client.get_version(42, VersionSelector::Number(3)).await?;
    ///     println!("{} {}", endpoint.api_endpoint_name, pinned.api_resources.len());
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    /// - connection failed.
    /// - the service answered with a non-2xx status.
    /// - the response body is not an endpoint.
    /// - `Latest` was requested and the endpoint has no versions ([`Error::NotFound`]).
    ///
    pub async fn get_version(&self, endpoint_id: u64, version: VersionSelector) -> Result<Endpoint> {
        let version = self.resolve_version(endpoint_id, version).await?;
        let url = format!(
            "{}/versions/{}/resources-detail",
            self.endpoint_url(endpoint_id),
            version
        );
        self.get(&url).await
    }

    /// Updates an endpoint version. Only the non-empty fields of `options`
    /// are sent, the rest is left unchanged by the service.
    ///
    /// # Example
    ///
    /// ```no_run
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     use api_endpoints::{ClientBuilder, ModifyVersionOptions, VersionSelector};
    ///
    ///     let client = ClientBuilder::new("http://localhost:8080").build()?;
    ///     let options = ModifyVersionOptions::new().with_description("Bookstore v2");
    ///     let endpoint = client
    ///         .modify_version(42, VersionSelector::Number(3), &options)
    ///         .await?;
    ///     println!("{:?}", endpoint.description);
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`get_version`](Self::get_version).
    pub async fn modify_version(
        &self,
        endpoint_id: u64,
        version: VersionSelector,
        options: &ModifyVersionOptions,
    ) -> Result<Endpoint> {
        let version = self.resolve_version(endpoint_id, version).await?;
        let url = format!("{}/versions/{}", self.endpoint_url(endpoint_id), version);
        self.put(&url, options).await
    }

    /// Creates a new version as a copy of `version`. The returned endpoint
    /// describes the new version.
    ///
    /// # Errors
    ///
    /// Same as [`get_version`](Self::get_version).
    pub async fn clone_version(
        &self,
        endpoint_id: u64,
        version: VersionSelector,
    ) -> Result<Endpoint> {
        let version = self.resolve_version(endpoint_id, version).await?;
        let url = format!(
            "{}/versions/{}/cloneVersion",
            self.endpoint_url(endpoint_id),
            version
        );
        self.post(&url, &CloneVersionRequest {}).await
    }

    /// Deletes a version of an endpoint.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    /// - connection failed.
    /// - the service answered with a non-2xx status, e.g. when the version is
    ///   active on a network.
    /// - the response body is not an endpoint.
    ///
    pub async fn remove_version(&self, endpoint_id: u64, version_number: u64) -> Result<Endpoint> {
        let url = format!(
            "{}/versions/{}",
            self.endpoint_url(endpoint_id),
            version_number
        );
        self.delete(&url).await
    }
}
