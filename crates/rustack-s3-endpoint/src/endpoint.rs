//! Resolved endpoint descriptors.
//!
//! An [`Endpoint`] is the successful outcome of a resolution: the URL the
//! request must be sent to and the signing schemes the signer may choose
//! from, in order of preference.

use serde::{Deserialize, Serialize};

/// Backend attribute value attached to S3 Express endpoints.
pub const S3_EXPRESS_BACKEND: &str = "S3Express";

/// A resolved S3 endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Fully formed endpoint URL (scheme, host and optional path).
    pub url: String,
    /// Signing schemes, most preferred first.
    pub auth_schemes: Vec<AuthScheme>,
    /// Storage backend hint (`"S3Express"` for directory buckets).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

impl Endpoint {
    /// Create an endpoint with the given URL and signing schemes.
    #[must_use]
    pub fn new(url: impl Into<String>, auth_schemes: Vec<AuthScheme>) -> Self {
        Self {
            url: url.into(),
            auth_schemes,
            backend: None,
        }
    }

    /// Tag the endpoint as served by the S3 Express backend.
    #[must_use]
    pub fn with_s3_express_backend(mut self) -> Self {
        self.backend = Some(S3_EXPRESS_BACKEND.to_owned());
        self
    }

    /// Parse the endpoint URL into an [`http::Uri`].
    ///
    /// # Errors
    ///
    /// Returns the parse error if the interpolated URL is not a valid URI,
    /// which can happen when a custom endpoint contains characters the rule
    /// set did not reject.
    pub fn uri(&self) -> Result<http::Uri, http::uri::InvalidUri> {
        self.url.parse()
    }

    /// The first signing scheme, if any.
    #[must_use]
    pub fn preferred_auth_scheme(&self) -> Option<&AuthScheme> {
        self.auth_schemes.first()
    }
}

/// A request signing scheme attached to an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum AuthScheme {
    /// AWS Signature Version 4, scoped to a single region.
    #[serde(rename = "sigv4", rename_all = "camelCase")]
    SigV4 {
        /// Service name used in the credential scope.
        signing_name: String,
        /// Region used in the credential scope.
        signing_region: String,
        /// Whether the canonical path must not be encoded twice.
        disable_double_encoding: bool,
    },
    /// Asymmetric SigV4 valid for a set of regions (`"*"` for any).
    #[serde(rename = "sigv4a", rename_all = "camelCase")]
    SigV4a {
        /// Service name used in the credential scope.
        signing_name: String,
        /// Regions the signature is valid in.
        signing_region_set: Vec<String>,
        /// Whether the canonical path must not be encoded twice.
        disable_double_encoding: bool,
    },
    /// S3 Express session-based SigV4.
    #[serde(rename = "sigv4-s3express", rename_all = "camelCase")]
    SigV4S3Express {
        /// Service name used in the credential scope.
        signing_name: String,
        /// Region used in the credential scope.
        signing_region: String,
        /// Whether the canonical path must not be encoded twice.
        disable_double_encoding: bool,
    },
}

impl AuthScheme {
    /// SigV4 with double encoding disabled, as every S3 rule uses it.
    #[must_use]
    pub fn sigv4(signing_name: &str, signing_region: &str) -> Self {
        Self::SigV4 {
            signing_name: signing_name.to_owned(),
            signing_region: signing_region.to_owned(),
            disable_double_encoding: true,
        }
    }

    /// SigV4a valid in every region.
    #[must_use]
    pub fn sigv4a_any_region(signing_name: &str) -> Self {
        Self::SigV4a {
            signing_name: signing_name.to_owned(),
            signing_region_set: vec!["*".to_owned()],
            disable_double_encoding: true,
        }
    }

    /// S3 Express session auth with double encoding disabled.
    #[must_use]
    pub fn sigv4_s3express(signing_name: &str, signing_region: &str) -> Self {
        Self::SigV4S3Express {
            signing_name: signing_name.to_owned(),
            signing_region: signing_region.to_owned(),
            disable_double_encoding: true,
        }
    }

    /// Scheme identifier as it appears in endpoint `authSchemes` lists.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SigV4 { .. } => "sigv4",
            Self::SigV4a { .. } => "sigv4a",
            Self::SigV4S3Express { .. } => "sigv4-s3express",
        }
    }

    /// Service name used in the credential scope.
    #[must_use]
    pub fn signing_name(&self) -> &str {
        match self {
            Self::SigV4 { signing_name, .. }
            | Self::SigV4a { signing_name, .. }
            | Self::SigV4S3Express { signing_name, .. } => signing_name,
        }
    }

    /// Single signing region, `None` for region-set schemes.
    #[must_use]
    pub fn signing_region(&self) -> Option<&str> {
        match self {
            Self::SigV4 { signing_region, .. } | Self::SigV4S3Express { signing_region, .. } => {
                Some(signing_region)
            }
            Self::SigV4a { .. } => None,
        }
    }

    /// Whether the signer must not double-encode the request path.
    #[must_use]
    pub fn disable_double_encoding(&self) -> bool {
        match self {
            Self::SigV4 {
                disable_double_encoding,
                ..
            }
            | Self::SigV4a {
                disable_double_encoding,
                ..
            }
            | Self::SigV4S3Express {
                disable_double_encoding,
                ..
            } => *disable_double_encoding,
        }
    }
}
