//! Integration tests for the Rustack S3 endpoint resolver.
//!
//! These tests cross-check [`S3EndpointResolver`] against the default
//! endpoint resolver generated into `aws-sdk-s3`. Both run in-process, so no
//! server or network access is needed.
//!
//! Run them with:
//! ```text
//! cargo test -p rustack-integration
//! ```

use std::sync::Once;

use aws_sdk_s3::config::endpoint::{DefaultResolver, Params as SdkParams, ResolveEndpoint as _};
use rustack_s3_endpoint::{EndpointError, Params, S3EndpointResolver};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Result of one resolution, reduced to what both resolvers expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Resolved endpoint URL.
    Url(String),
    /// Rule set error message.
    Error(String),
}

/// Resolve `params` with the graph-backed resolver.
///
/// Panics on internal errors: the bundled rules must always reach a terminal.
#[must_use]
pub fn resolve_local(params: &Params) -> Outcome {
    init_tracing();
    match S3EndpointResolver::new().resolve(params) {
        Ok(endpoint) => Outcome::Url(endpoint.url),
        Err(EndpointError::Validation { message }) => Outcome::Error(message),
        Err(err) => panic!("internal resolver error for {params:?}: {err}"),
    }
}

/// Resolve `params` with the resolver shipped in `aws-sdk-s3`.
pub async fn resolve_sdk(params: &Params) -> Outcome {
    let sdk_params = sdk_params(params);
    match DefaultResolver::new().resolve_endpoint(&sdk_params).await {
        Ok(endpoint) => Outcome::Url(endpoint.url().to_owned()),
        Err(err) => Outcome::Error(err.to_string()),
    }
}

/// Convert resolver parameters into the SDK's endpoint parameters.
#[must_use]
pub fn sdk_params(params: &Params) -> SdkParams {
    SdkParams::builder()
        .set_region(params.region.clone())
        .set_bucket(params.bucket.clone())
        .set_use_fips(Some(params.use_fips))
        .set_use_dual_stack(Some(params.use_dual_stack))
        .set_endpoint(params.endpoint.clone())
        .set_force_path_style(Some(params.force_path_style))
        .set_accelerate(Some(params.accelerate))
        .set_use_global_endpoint(Some(params.use_global_endpoint))
        .set_use_object_lambda_endpoint(params.use_object_lambda_endpoint)
        .set_disable_access_points(params.disable_access_points)
        .set_disable_multi_region_access_points(Some(
            params.disable_multi_region_access_points,
        ))
        .set_use_arn_region(params.use_arn_region)
        .set_use_s3_express_control_endpoint(params.use_s3_express_control_endpoint)
        .set_disable_s3_express_session_auth(params.disable_s3_express_session_auth)
        .build()
        .expect("endpoint params should be complete")
}

mod test_config;
mod test_sdk_parity;
