//! S3 endpoint resolution for Rustack.
//!
//! This crate turns a set of S3 client parameters (region, bucket, FIPS and
//! dual-stack flags, custom endpoint, ...) into a concrete endpoint URL plus
//! signing properties, or into a descriptive validation error. The rules are
//! compiled into a binary decision diagram and evaluated lazily: each node
//! names a condition, and the walk stops at the first result reached.
//!
//! # Architecture
//!
//! ```text
//!        Params / EndpointConfig
//!               |
//!               v
//!   S3EndpointResolver (validation, ARN hint)
//!               |
//!               v
//!   DecisionGraph::walk (BDD, complemented edges)
//!               |            \
//!               v             v
//!   EvalContext::condition   EvalContext::result
//!     (derived-value cache)    (endpoint / error templates)
//!               |
//!               v
//!   functions (ARN, URL, host label, partition)
//! ```
//!
//! # Examples
//!
//! ```
//! use rustack_s3_endpoint::{Params, S3EndpointResolver};
//!
//! let params = Params::builder().region("us-west-2").bucket("my-bucket").build();
//! let endpoint = S3EndpointResolver::new().resolve(&params).unwrap();
//! assert_eq!(endpoint.url, "https://my-bucket.s3.us-west-2.amazonaws.com");
//! ```

pub mod config;
mod context;
pub mod endpoint;
pub mod error;
pub mod functions;
pub mod graph;
pub mod params;
pub mod resolver;
pub mod rules;

pub use config::EndpointConfig;
pub use endpoint::{AuthScheme, Endpoint};
pub use error::{EndpointError, EndpointResult, GraphError};
pub use params::Params;
pub use resolver::{ResolveEndpoint, S3EndpointResolver};
