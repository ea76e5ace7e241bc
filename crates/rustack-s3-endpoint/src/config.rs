//! Client-level endpoint configuration.
//!
//! Provides [`EndpointConfig`], the S3 client settings that feed endpoint
//! resolution. Values are loaded from the standard AWS SDK environment
//! variables so the resolver picks endpoints the same way an SDK client
//! configured from the same environment would.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::params::Params;

/// S3 client configuration relevant to endpoint resolution.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::config::EndpointConfig;
///
/// let config = EndpointConfig::builder()
///     .region("eu-west-1")
///     .force_path_style(true)
///     .build();
/// let params = config.params_for(Some("my-bucket"));
/// assert_eq!(params.region.as_deref(), Some("eu-west-1"));
/// assert_eq!(params.bucket.as_deref(), Some("my-bucket"));
/// assert!(params.force_path_style);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    /// Client region.
    #[builder(default, setter(into, strip_option))]
    pub region: Option<String>,

    /// Custom endpoint URL overriding the resolved host.
    #[builder(default, setter(into, strip_option))]
    pub endpoint_url: Option<String>,

    /// Use FIPS endpoints.
    #[builder(default = false)]
    pub use_fips: bool,

    /// Use dual-stack endpoints.
    #[builder(default = false)]
    pub use_dual_stack: bool,

    /// Always use path-style addressing.
    #[builder(default = false)]
    pub force_path_style: bool,

    /// Use S3 Transfer Acceleration.
    #[builder(default = false)]
    pub accelerate: bool,

    /// Send `us-east-1` traffic to the global endpoint.
    #[builder(default = false)]
    pub use_global_endpoint: bool,

    /// Let an access point ARN's region override the client region.
    #[builder(default, setter(strip_option))]
    pub use_arn_region: Option<bool>,

    /// Reject multi-region access point ARNs.
    #[builder(default = false)]
    pub disable_multi_region_access_points: bool,

    /// Sign S3 Express requests with plain SigV4 instead of session auth.
    #[builder(default, setter(strip_option))]
    pub disable_s3_express_session_auth: Option<bool>,

    /// Log level filter string (e.g. `"warn"`, `"debug"`).
    #[builder(default = String::from("warn"))]
    pub log_level: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            use_fips: false,
            use_dual_stack: false,
            force_path_style: false,
            accelerate: false,
            use_global_endpoint: false,
            use_arn_region: None,
            disable_multi_region_access_points: false,
            disable_s3_express_session_auth: None,
            log_level: String::from("warn"),
        }
    }
}

impl EndpointConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | `region` |
    /// | `AWS_ENDPOINT_URL_S3`, then `AWS_ENDPOINT_URL` | `endpoint_url` |
    /// | `AWS_USE_FIPS_ENDPOINT` | `use_fips` |
    /// | `AWS_USE_DUALSTACK_ENDPOINT` | `use_dual_stack` |
    /// | `AWS_S3_FORCE_PATH_STYLE` | `force_path_style` |
    /// | `AWS_S3_USE_ACCELERATE_ENDPOINT` | `accelerate` |
    /// | `AWS_S3_US_EAST_1_REGIONAL_ENDPOINT` (`legacy`) | `use_global_endpoint` |
    /// | `AWS_S3_USE_ARN_REGION` | `use_arn_region` |
    /// | `AWS_S3_DISABLE_MULTIREGION_ACCESS_POINTS` | `disable_multi_region_access_points` |
    /// | `AWS_S3_DISABLE_EXPRESS_SESSION_AUTH` | `disable_s3_express_session_auth` |
    /// | `LOG_LEVEL` | `log_level` |
    ///
    /// # Examples
    ///
    /// ```
    /// use rustack_s3_endpoint::config::EndpointConfig;
    ///
    /// let config = EndpointConfig::from_env();
    /// assert!(!config.log_level.is_empty());
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.region = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION"));
        config.endpoint_url = lookup("AWS_ENDPOINT_URL_S3").or_else(|| lookup("AWS_ENDPOINT_URL"));

        if let Some(v) = lookup("AWS_USE_FIPS_ENDPOINT") {
            config.use_fips = parse_bool(&v);
        }
        if let Some(v) = lookup("AWS_USE_DUALSTACK_ENDPOINT") {
            config.use_dual_stack = parse_bool(&v);
        }
        if let Some(v) = lookup("AWS_S3_FORCE_PATH_STYLE") {
            config.force_path_style = parse_bool(&v);
        }
        if let Some(v) = lookup("AWS_S3_USE_ACCELERATE_ENDPOINT") {
            config.accelerate = parse_bool(&v);
        }
        if let Some(v) = lookup("AWS_S3_US_EAST_1_REGIONAL_ENDPOINT") {
            config.use_global_endpoint = v.eq_ignore_ascii_case("legacy");
        }
        if let Some(v) = lookup("AWS_S3_USE_ARN_REGION") {
            config.use_arn_region = Some(parse_bool(&v));
        }
        if let Some(v) = lookup("AWS_S3_DISABLE_MULTIREGION_ACCESS_POINTS") {
            config.disable_multi_region_access_points = parse_bool(&v);
        }
        if let Some(v) = lookup("AWS_S3_DISABLE_EXPRESS_SESSION_AUTH") {
            config.disable_s3_express_session_auth = Some(parse_bool(&v));
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Resolution parameters for a request against `bucket`.
    #[must_use]
    pub fn params_for(&self, bucket: Option<&str>) -> Params {
        Params {
            region: self.region.clone(),
            bucket: bucket.map(str::to_owned),
            use_fips: self.use_fips,
            use_dual_stack: self.use_dual_stack,
            endpoint: self.endpoint_url.clone(),
            force_path_style: self.force_path_style,
            accelerate: self.accelerate,
            use_global_endpoint: self.use_global_endpoint,
            use_arn_region: self.use_arn_region,
            disable_multi_region_access_points: self.disable_multi_region_access_points,
            disable_s3_express_session_auth: self.disable_s3_express_session_auth,
            ..Params::default()
        }
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
