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

//! # api_endpoints
//!
//! This is a Rust client to administer endpoint versions through the
//! API Definitions v2 REST API.
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     use api_endpoints::{ClientBuilder, VersionSelector};
//!
//!     let client = ClientBuilder::new("https://example.com").build()?;
//!     let versions = client.list_versions(42).await?;
//!     println!("{} has {} versions", versions.api_endpoint_name, versions.api_versions.len());
//!
//!     let endpoint = client.get_version(42, VersionSelector::Latest).await?;
//!     println!("{:?}", endpoint.version_number);
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod common;
mod config;
mod error;
mod middleware;
pub mod models;

pub use client::{Client, ClientBuilder};
pub use common::initialize;
pub use config::Config;
pub use error::{Error, Result};
pub use middleware::LoggingMiddleware;
pub use models::{
    Endpoint, ModifyVersionOptions, ProblemDetail, Resource, ResourceMethod, StatusValue,
    Version, VersionSelector, VersionSummary, Versions,
};
