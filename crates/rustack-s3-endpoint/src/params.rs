//! Endpoint resolution parameters.
//!
//! [`Params`] is the immutable input of one resolution. It mirrors the S3
//! endpoint rule set parameters: client-level switches (region, FIPS,
//! dual-stack, ...) plus the per-request bucket.
//!
//! # Examples
//!
//! ```
//! use rustack_s3_endpoint::Params;
//!
//! let params = Params::builder()
//!     .region("us-west-2")
//!     .bucket("my-bucket")
//!     .force_path_style(true)
//!     .build();
//!
//! assert_eq!(params.region.as_deref(), Some("us-west-2"));
//! assert!(params.force_path_style);
//! assert!(params.use_arn_region.is_none());
//! ```

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Input parameters for a single S3 endpoint resolution.
///
/// Flags without an `Option` default to `false`, the rest are unset unless
/// given. `key`, `prefix` and `copy_source` are accepted for parity with the
/// rule set's parameter list; no rule currently reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct Params {
    /// The AWS region used to dispatch the request.
    #[builder(default, setter(into, strip_option))]
    pub region: Option<String>,

    /// The S3 bucket name or ARN used to send the request.
    #[builder(default, setter(into, strip_option))]
    pub bucket: Option<String>,

    /// Use the FIPS-compliant regional endpoint.
    #[builder(default)]
    pub use_fips: bool,

    /// Use the dual-stack (IPv4 + IPv6) endpoint.
    #[builder(default)]
    pub use_dual_stack: bool,

    /// Override the endpoint used to send this request.
    #[builder(default, setter(into, strip_option))]
    pub endpoint: Option<String>,

    /// Force path-style addressing instead of virtual-hosted buckets.
    #[builder(default)]
    pub force_path_style: bool,

    /// Use the S3 Transfer Acceleration endpoint.
    #[builder(default)]
    pub accelerate: bool,

    /// Send `us-east-1` requests to the global `s3.<suffix>` endpoint.
    #[builder(default)]
    pub use_global_endpoint: bool,

    /// Route the request to S3 Object Lambda.
    #[builder(default, setter(strip_option))]
    pub use_object_lambda_endpoint: Option<bool>,

    /// The object key, if the operation targets one.
    #[builder(default, setter(into, strip_option))]
    pub key: Option<String>,

    /// The listing prefix, if the operation takes one.
    #[builder(default, setter(into, strip_option))]
    pub prefix: Option<String>,

    /// The copy source, for copy operations.
    #[builder(default, setter(into, strip_option))]
    pub copy_source: Option<String>,

    /// The operation does not support access points.
    #[builder(default, setter(strip_option))]
    pub disable_access_points: Option<bool>,

    /// Reject multi-region access point ARNs.
    #[builder(default)]
    pub disable_multi_region_access_points: bool,

    /// Allow the ARN's region to override the client region.
    #[builder(default, setter(strip_option))]
    pub use_arn_region: Option<bool>,

    /// Route S3 Express bucket operations to the control-plane endpoint.
    #[builder(default, setter(strip_option))]
    pub use_s3_express_control_endpoint: Option<bool>,

    /// Sign S3 Express requests with plain SigV4 instead of session auth.
    #[builder(default, setter(strip_option))]
    pub disable_s3_express_session_auth: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_flags_to_false() {
        let params = Params::builder().build();
        assert!(params.region.is_none());
        assert!(params.bucket.is_none());
        assert!(!params.use_fips);
        assert!(!params.use_dual_stack);
        assert!(!params.force_path_style);
        assert!(!params.accelerate);
        assert!(!params.use_global_endpoint);
        assert!(!params.disable_multi_region_access_points);
        assert!(params.use_object_lambda_endpoint.is_none());
        assert_eq!(params, Params::default());
    }

    #[test]
    fn test_should_deserialize_camel_case_with_missing_fields() {
        let params: Params = serde_json::from_str(
            r#"{"region":"eu-west-1","bucket":"logs","useFips":true,"useArnRegion":false}"#,
        )
        .expect("test deserialization");
        assert_eq!(params.region.as_deref(), Some("eu-west-1"));
        assert_eq!(params.bucket.as_deref(), Some("logs"));
        assert!(params.use_fips);
        assert_eq!(params.use_arn_region, Some(false));
        assert!(params.endpoint.is_none());
    }

    #[test]
    fn test_should_accept_pass_through_fields() {
        let params = Params::builder()
            .key("photos/cat.jpg")
            .prefix("photos/")
            .copy_source("src-bucket/cat.jpg")
            .build();
        assert_eq!(params.key.as_deref(), Some("photos/cat.jpg"));
        assert_eq!(params.prefix.as_deref(), Some("photos/"));
        assert_eq!(params.copy_source.as_deref(), Some("src-bucket/cat.jpg"));
    }
}
