//! Graph-backed S3 endpoint resolver.
//!
//! [`S3EndpointResolver`] walks the compiled rule graph for one set of
//! [`Params`], turns the terminal it reaches into an [`Endpoint`] or a
//! validation error, and applies the bucket-ARN hint to error messages.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::context::EvalContext;
use crate::endpoint::Endpoint;
use crate::error::{EndpointError, EndpointResult};
use crate::functions::PartitionResolver;
use crate::graph::DecisionGraph;
use crate::params::Params;
use crate::rules::{CONDITION_COUNT, RESULT_COUNT, RuleResult, S3_GRAPH};

/// Sentence appended to errors about simple bucket ARNs (`arn:aws:s3:::b`).
pub const BUCKET_ARN_HINT: &str =
    ". Use the bucket name instead of simple bucket ARNs in GetBucketLocationRequest.";

/// Something that maps request parameters to an endpoint.
pub trait ResolveEndpoint: Send + Sync + std::fmt::Debug {
    /// Resolve the endpoint for `params`.
    fn resolve_endpoint(&self, params: &Params) -> Result<Endpoint, EndpointError>;
}

/// Resolves S3 endpoints from the compiled rule graph.
///
/// The resolver holds no per-request state and can be shared freely between
/// threads; every call builds its own evaluation context.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::{Params, S3EndpointResolver};
///
/// let resolver = S3EndpointResolver::new();
/// let params = Params::builder().region("us-west-2").bucket("my-bucket").build();
/// let endpoint = resolver.resolve(&params).unwrap();
/// assert_eq!(endpoint.url, "https://my-bucket.s3.us-west-2.amazonaws.com");
///
/// let err = resolver.resolve(&Params::default()).unwrap_err();
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Clone, Default)]
pub struct S3EndpointResolver {
    graph: Option<Arc<DecisionGraph>>,
    partitions: Option<Arc<PartitionResolver>>,
}

impl S3EndpointResolver {
    /// Resolver over the bundled rule graph and partition metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rule graph, e.g. with one regenerated from newer rules.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::Graph`] if the graph references conditions or
    /// results this crate does not implement.
    pub fn with_graph(mut self, graph: DecisionGraph) -> EndpointResult<Self> {
        graph.validate_bounds(CONDITION_COUNT, RESULT_COUNT)?;
        self.graph = Some(Arc::new(graph));
        Ok(self)
    }

    /// Replace the partition metadata.
    #[must_use]
    pub fn with_partitions(mut self, partitions: PartitionResolver) -> Self {
        self.partitions = Some(Arc::new(partitions));
        self
    }

    fn graph(&self) -> &DecisionGraph {
        self.graph.as_deref().unwrap_or(&S3_GRAPH)
    }

    fn partitions(&self) -> &PartitionResolver {
        self.partitions
            .as_deref()
            .unwrap_or(PartitionResolver::bundled())
    }

    /// Resolve the endpoint for `params`.
    ///
    /// # Errors
    ///
    /// - [`EndpointError::Validation`] when the rule set rejects the
    ///   parameters; the message is what the caller should see.
    /// - Any other variant when the graph and this runtime disagree.
    pub fn resolve(&self, params: &Params) -> EndpointResult<Endpoint> {
        let ctx = EvalContext::new(params, self.partitions());
        let outcome = self
            .graph()
            .walk(|id| ctx.condition(id))
            .and_then(|index| Ok((index, ctx.result(index)?)));

        match outcome {
            Ok((index, RuleResult::Endpoint(endpoint))) => {
                debug!(result = index, url = %endpoint.url, "resolved endpoint");
                Ok(endpoint)
            }
            Ok((index, RuleResult::Error(message))) => {
                debug!(result = index, %message, "rule set rejected parameters");
                Err(EndpointError::validation(append_bucket_arn_hint(message)))
            }
            Err(err) => {
                warn!(error = %err, region = ?params.region, bucket = ?params.bucket, "endpoint resolution failed");
                Err(err)
            }
        }
    }
}

impl ResolveEndpoint for S3EndpointResolver {
    fn resolve_endpoint(&self, params: &Params) -> Result<Endpoint, EndpointError> {
        self.resolve(params)
    }
}

/// Append [`BUCKET_ARN_HINT`] to an error about a simple bucket ARN.
///
/// Applies when the message mentions both `Invalid ARN` and `:s3:::`, and
/// only once.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::resolver::append_bucket_arn_hint;
///
/// let msg = append_bucket_arn_hint("Invalid ARN: `arn:aws:s3:::b` was not a valid ARN".into());
/// assert!(msg.ends_with("in GetBucketLocationRequest."));
/// assert_eq!(append_bucket_arn_hint(msg.clone()), msg);
///
/// let other = append_bucket_arn_hint("Invalid region".into());
/// assert_eq!(other, "Invalid region");
/// ```
#[must_use]
pub fn append_bucket_arn_hint(mut message: String) -> String {
    if message.contains("Invalid ARN")
        && message.contains(":s3:::")
        && !message.ends_with(BUCKET_ARN_HINT)
    {
        message.push_str(BUCKET_ARN_HINT);
    }
    message
}
