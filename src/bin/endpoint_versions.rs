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

use anyhow::{bail, Context, Result};
use api_endpoints::{ClientBuilder, Config, ModifyVersionOptions, VersionSelector};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::{debug, info};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Administer endpoint versions through the API Definitions v2 API")]
struct Args {
    /// Base URL of the service. Overrides API_ENDPOINTS_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Extra header sent with every request, as `name=value`. Repeatable.
    #[arg(long = "header", global = true)]
    headers: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all versions of an endpoint
    List { endpoint_id: u64 },
    /// Show a version with its resources
    Get {
        endpoint_id: u64,
        /// Version number or `latest`
        #[arg(default_value = "latest")]
        version: String,
    },
    /// Change the name, description, base path, hostnames or scheme of a version
    Modify {
        endpoint_id: u64,
        /// Version number or `latest`
        version: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        base_path: Option<String>,
        /// Hostname served by the endpoint. Repeatable.
        #[arg(long = "hostname")]
        hostnames: Vec<String>,
        /// One of http, https or http/https
        #[arg(long)]
        scheme: Option<String>,
    },
    /// Create a new version from an existing one
    Clone {
        endpoint_id: u64,
        /// Version number or `latest`
        #[arg(default_value = "latest")]
        version: String,
    },
    /// Delete a version
    Remove { endpoint_id: u64, version_number: u64 },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_version(s: &str) -> Result<VersionSelector> {
    s.parse::<VersionSelector>()
        .with_context(|| format!("failed parsing version '{s}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging: use RUST_LOG to control verbosity.
    // Example: RUST_LOG=api_endpoints=debug
    dotenv().ok();
    api_endpoints::initialize();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    let mut builder = ClientBuilder::from_config(config);
    for header in &args.headers {
        match header.split_once('=') {
            Some((name, value)) => {
                builder.with_header(name.trim(), value.trim());
            }
            None => bail!("--header expects name=value, got '{header}'"),
        }
    }
    let client = builder.build()?;
    debug!("using {}", client.config().base_url);

    match args.command {
        Command::List { endpoint_id } => {
            let versions = client.list_versions(endpoint_id).await?;
            info!(
                "endpoint {} has {} versions",
                endpoint_id,
                versions.api_versions.len()
            );
            print_json(&versions)?;
        }
        Command::Get {
            endpoint_id,
            version,
        } => {
            let endpoint = client
                .get_version(endpoint_id, parse_version(&version)?)
                .await?;
            print_json(&endpoint)?;
        }
        Command::Modify {
            endpoint_id,
            version,
            name,
            description,
            base_path,
            hostnames,
            scheme,
        } => {
            let options = ModifyVersionOptions {
                name: name.unwrap_or_default(),
                description: description.unwrap_or_default(),
                base_path: base_path.unwrap_or_default(),
                hostnames,
                scheme: scheme.unwrap_or_default(),
            };
            if options.is_empty() {
                bail!("nothing to modify, pass at least one of --name, --description, --base-path, --hostname, --scheme");
            }
            let endpoint = client
                .modify_version(endpoint_id, parse_version(&version)?, &options)
                .await?;
            print_json(&endpoint)?;
        }
        Command::Clone {
            endpoint_id,
            version,
        } => {
            let endpoint = client
                .clone_version(endpoint_id, parse_version(&version)?)
                .await?;
            info!(
                "cloned endpoint {} into version {:?}",
                endpoint_id, endpoint.version_number
            );
            print_json(&endpoint)?;
        }
        Command::Remove {
            endpoint_id,
            version_number,
        } => {
            let endpoint = client.remove_version(endpoint_id, version_number).await?;
            print_json(&endpoint)?;
        }
    }

    Ok(())
}
