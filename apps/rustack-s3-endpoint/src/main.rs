//! Rustack S3 endpoint resolver CLI.
//!
//! Resolves the S3 endpoint for each bucket given on the command line using
//! the client configuration found in the environment, and prints one JSON
//! document per bucket. With no arguments it resolves a bucket-less request.
//!
//! # Usage
//!
//! ```text
//! AWS_REGION=us-west-2 rustack-s3-endpoint my-bucket arn:aws:s3:::other
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | *(unset)* | Client region (`AWS_DEFAULT_REGION` as fallback) |
//! | `AWS_ENDPOINT_URL_S3` | *(unset)* | Custom endpoint (`AWS_ENDPOINT_URL` as fallback) |
//! | `AWS_USE_FIPS_ENDPOINT` | `false` | Use FIPS endpoints |
//! | `AWS_USE_DUALSTACK_ENDPOINT` | `false` | Use dual-stack endpoints |
//! | `AWS_S3_FORCE_PATH_STYLE` | `false` | Path-style addressing |
//! | `S3_ENDPOINT_RULES` | *(bundled)* | JSON graph definition to use instead of the bundled rules |
//! | `S3_ENDPOINT_PARTITIONS` | *(bundled)* | JSON partition metadata to use instead of the bundled file |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rustack_s3_endpoint::functions::PartitionResolver;
use rustack_s3_endpoint::graph::{DecisionGraph, GraphDefinition};
use rustack_s3_endpoint::{Endpoint, EndpointConfig, EndpointError, S3EndpointResolver};

/// One line of CLI output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolution<'a> {
    bucket: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint: Option<Endpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<ExitCode> {
    let config = EndpointConfig::from_env();
    init_tracing(&config.log_level)?;
    debug!(?config, "loaded endpoint configuration");

    let resolver = build_resolver()?;
    let buckets: Vec<String> = std::env::args().skip(1).collect();

    let mut rejected = false;
    if buckets.is_empty() {
        rejected |= resolve_and_print(&resolver, &config, None)?;
    }
    for bucket in &buckets {
        rejected |= resolve_and_print(&resolver, &config, Some(bucket))?;
    }

    Ok(if rejected {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Build the resolver, swapping in rule or partition files when configured.
fn build_resolver() -> Result<S3EndpointResolver> {
    let mut resolver = S3EndpointResolver::new();

    if let Ok(path) = std::env::var("S3_ENDPOINT_RULES") {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read rule graph {path}"))?;
        let definition: GraphDefinition = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse rule graph {path}"))?;
        let graph = DecisionGraph::from_definition(definition)
            .with_context(|| format!("invalid rule graph {path}"))?;
        info!(%path, nodes = graph.node_count(), "using external rule graph");
        resolver = resolver
            .with_graph(graph)
            .with_context(|| format!("rule graph {path} does not match this resolver"))?;
    }

    if let Ok(path) = std::env::var("S3_ENDPOINT_PARTITIONS") {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read partitions {path}"))?;
        let partitions = PartitionResolver::from_json(&raw)
            .with_context(|| format!("invalid partitions {path}"))?;
        info!(%path, "using external partition metadata");
        resolver = resolver.with_partitions(partitions);
    }

    Ok(resolver)
}

/// Resolve one request and print it. Returns `true` when the rules rejected it.
fn resolve_and_print(
    resolver: &S3EndpointResolver,
    config: &EndpointConfig,
    bucket: Option<&str>,
) -> Result<bool> {
    let params = config.params_for(bucket);
    let (line, rejected) = match resolver.resolve(&params) {
        Ok(endpoint) => (
            Resolution {
                bucket,
                endpoint: Some(endpoint),
                error: None,
            },
            false,
        ),
        Err(EndpointError::Validation { message }) => (
            Resolution {
                bucket,
                endpoint: None,
                error: Some(message),
            },
            true,
        ),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to resolve bucket {bucket:?}"));
        }
    };

    let json = serde_json::to_string(&line).context("failed to serialize resolution")?;
    println!("{json}");
    Ok(rejected)
}
