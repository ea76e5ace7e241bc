//! Terminal templates of the S3 rule set, indexed by result index.

use crate::context::EvalContext;
use crate::endpoint::{AuthScheme, Endpoint};
use crate::error::{EndpointError, EndpointResult};

/// Number of results in the S3 rule set.
pub const RESULT_COUNT: usize = 113;

/// Region SigV4 signs with on the global `us-east-1` endpoints.
const US_EAST_1: &str = "us-east-1";

/// A terminal reached by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleResult {
    /// A resolved endpoint.
    Endpoint(Endpoint),
    /// A rule-set error message, before post-processing.
    Error(String),
}

impl RuleResult {
    fn endpoint(url: String, auth_schemes: Vec<AuthScheme>) -> EndpointResult<Self> {
        Ok(Self::Endpoint(Endpoint::new(url, auth_schemes)))
    }

    fn s3_express(url: String, auth_scheme: AuthScheme) -> EndpointResult<Self> {
        Ok(Self::Endpoint(
            Endpoint::new(url, vec![auth_scheme]).with_s3_express_backend(),
        ))
    }

    fn error(message: impl Into<String>) -> EndpointResult<Self> {
        Ok(Self::Error(message.into()))
    }
}

fn s3(signing_region: &str) -> Vec<AuthScheme> {
    vec![AuthScheme::sigv4("s3", signing_region)]
}

fn object_lambda(signing_region: &str) -> Vec<AuthScheme> {
    vec![AuthScheme::sigv4("s3-object-lambda", signing_region)]
}

fn outposts(signing_region: &str) -> Vec<AuthScheme> {
    vec![
        AuthScheme::sigv4a_any_region("s3-outposts"),
        AuthScheme::sigv4("s3-outposts", signing_region),
    ]
}

impl EvalContext<'_> {
    /// Build the outcome of result `index` from the current bindings.
    #[allow(clippy::too_many_lines)]
    pub(crate) fn result(&self, index: usize) -> EndpointResult<RuleResult> {
        let d = &self.derived;
        let region = || Self::required(self.region(), "region");
        let bucket = || Self::required(self.bucket(), "bucket");
        let suffix = || {
            d.partition_result
                .value()
                .map(|p| p.dns_suffix.as_str())
        };

        match index {
            0 => RuleResult::error("Accelerate cannot be used with FIPS"),
            1 => RuleResult::error("Cannot set dual-stack in combination with a custom endpoint."),
            2 => RuleResult::error("A custom endpoint cannot be combined with FIPS"),
            3 => RuleResult::error("A custom endpoint cannot be combined with S3 Accelerate"),
            4 => RuleResult::error("Partition does not support FIPS"),
            5 => RuleResult::error("S3Express does not support S3 Accelerate."),

            // S3 Express
            6 => {
                let url = d.url.value()?;
                RuleResult::s3_express(
                    format!(
                        "{}://{}/{}{}",
                        url.scheme,
                        url.authority,
                        d.uri_encoded_bucket.value()?,
                        url.path
                    ),
                    self.s3_express_auth(region()?)?,
                )
            }
            7 => {
                let url = d.url.value()?;
                RuleResult::s3_express(
                    format!("{}://{}.{}{}", url.scheme, bucket()?, url.authority, url.path),
                    self.s3_express_auth(region()?)?,
                )
            }
            8 => RuleResult::error("S3Express bucket name is not a valid virtual hostable name."),
            9 => RuleResult::s3_express(
                format!(
                    "https://s3express-control{}{}.{}.{}/{}",
                    d.s3e_fips.value()?,
                    d.s3e_ds.value()?,
                    region()?,
                    suffix()?,
                    d.uri_encoded_bucket.value()?
                ),
                AuthScheme::sigv4("s3express", region()?),
            ),
            10 => RuleResult::s3_express(
                format!(
                    "https://{}.s3express{}-{}{}.{}.{}",
                    bucket()?,
                    d.s3e_fips.value()?,
                    d.s3express_availability_zone_id.value()?,
                    d.s3e_ds.value()?,
                    region()?,
                    suffix()?
                ),
                self.s3_express_auth(region()?)?,
            ),
            11 => RuleResult::error("Unrecognized S3Express bucket name format."),
            12 => {
                let url = d.url.value()?;
                RuleResult::s3_express(
                    format!("{}://{}{}", url.scheme, url.authority, url.path),
                    self.s3_express_auth(region()?)?,
                )
            }
            13 => RuleResult::s3_express(
                format!(
                    "https://s3express-control{}{}.{}.{}",
                    d.s3e_fips.value()?,
                    d.s3e_ds.value()?,
                    region()?,
                    suffix()?
                ),
                AuthScheme::sigv4("s3express", region()?),
            ),
            14 => RuleResult::error("Expected a endpoint to be specified but no endpoint was found"),

            // Outposts bucket aliases
            15 => RuleResult::endpoint(
                format!("https://{}.ec2.{}", bucket()?, d.url.value()?.authority),
                outposts(region()?),
            ),
            16 => RuleResult::endpoint(
                format!(
                    "https://{}.ec2.s3-outposts.{}.{}",
                    bucket()?,
                    region()?,
                    d.region_partition.value()?.dns_suffix
                ),
                outposts(region()?),
            ),
            17 => RuleResult::endpoint(
                format!(
                    "https://{}.op-{}.{}",
                    bucket()?,
                    d.outpost_id_ssa_2.value()?,
                    d.url.value()?.authority
                ),
                outposts(region()?),
            ),
            18 => RuleResult::endpoint(
                format!(
                    "https://{}.op-{}.s3-outposts.{}.{}",
                    bucket()?,
                    d.outpost_id_ssa_2.value()?,
                    region()?,
                    d.region_partition.value()?.dns_suffix
                ),
                outposts(region()?),
            ),
            19 => RuleResult::error(format!(
                "Unrecognized hardware type: \"Expected hardware type o or e but got {}\"",
                d.hardware_type.value()?
            )),
            20 => RuleResult::error(
                "Invalid ARN: The outpost Id must only contain a-z, A-Z, 0-9 and `-`.",
            ),
            21 => RuleResult::error(format!(
                "Custom endpoint `{}` was not a valid URI",
                Self::required(self.params.endpoint.as_deref(), "endpoint")?
            )),
            22 => RuleResult::error("S3 Accelerate cannot be used in this region"),

            // Virtual-hosted buckets
            23 => RuleResult::endpoint(
                format!("https://{}.s3-fips.dualstack.us-east-1.{}", bucket()?, suffix()?),
                s3(US_EAST_1),
            ),
            24 => RuleResult::endpoint(
                format!(
                    "https://{}.s3-fips.dualstack.{}.{}",
                    bucket()?,
                    region()?,
                    suffix()?
                ),
                s3(region()?),
            ),
            25 => RuleResult::endpoint(
                format!("https://{}.s3-fips.us-east-1.{}", bucket()?, suffix()?),
                s3(US_EAST_1),
            ),
            26 => RuleResult::endpoint(
                format!("https://{}.s3-fips.{}.{}", bucket()?, region()?, suffix()?),
                s3(region()?),
            ),
            27 => RuleResult::endpoint(
                format!(
                    "https://{}.s3-accelerate.dualstack.us-east-1.{}",
                    bucket()?,
                    suffix()?
                ),
                s3(US_EAST_1),
            ),
            28 => RuleResult::endpoint(
                format!("https://{}.s3-accelerate.dualstack.{}", bucket()?, suffix()?),
                s3(region()?),
            ),
            29 => RuleResult::endpoint(
                format!("https://{}.s3.dualstack.us-east-1.{}", bucket()?, suffix()?),
                s3(US_EAST_1),
            ),
            30 => RuleResult::endpoint(
                format!(
                    "https://{}.s3.dualstack.{}.{}",
                    bucket()?,
                    region()?,
                    suffix()?
                ),
                s3(region()?),
            ),
            31 | 33 => {
                let url = d.url.value()?;
                RuleResult::endpoint(
                    format!(
                        "{}://{}{}{}",
                        url.scheme,
                        url.authority,
                        url.normalized_path,
                        bucket()?
                    ),
                    s3(if index == 31 { US_EAST_1 } else { region()? }),
                )
            }
            32 | 34 => {
                let url = d.url.value()?;
                RuleResult::endpoint(
                    format!("{}://{}.{}{}", url.scheme, bucket()?, url.authority, url.path),
                    s3(if index == 32 { US_EAST_1 } else { region()? }),
                )
            }
            35 | 36 => RuleResult::endpoint(
                format!("https://{}.s3-accelerate.{}", bucket()?, suffix()?),
                s3(if index == 35 { US_EAST_1 } else { region()? }),
            ),
            37 | 38 => RuleResult::endpoint(
                format!("https://{}.s3.{}", bucket()?, suffix()?),
                s3(if index == 37 { US_EAST_1 } else { region()? }),
            ),
            39 => RuleResult::endpoint(
                format!("https://{}.s3.{}.{}", bucket()?, region()?, suffix()?),
                s3(region()?),
            ),
            40 => RuleResult::error("Invalid region: region was not a valid DNS name."),
            41 => RuleResult::error("S3 Object Lambda does not support Dual-stack"),
            42 => RuleResult::error("S3 Object Lambda does not support S3 Accelerate"),
            43 => RuleResult::error("Access points are not supported for this operation"),
            44 => RuleResult::error(format!(
                "Invalid configuration: region from ARN `{}` does not match client region `{}` and UseArnRegion is `false`",
                d.bucket_arn.value()?.region,
                region()?
            )),
            45 => RuleResult::error("Invalid ARN: Missing account id"),

            // Access points
            46 => {
                let arn = d.bucket_arn.value()?;
                let url = d.url.value()?;
                RuleResult::endpoint(
                    format!(
                        "{}://{}-{}.{}{}",
                        url.scheme,
                        d.access_point_name_ssa_1.value()?,
                        arn.account_id,
                        url.authority,
                        url.path
                    ),
                    object_lambda(&arn.region),
                )
            }
            47 => self.access_point("s3-object-lambda-fips", object_lambda),
            48 => self.access_point("s3-object-lambda", object_lambda),
            49 => RuleResult::error(format!(
                "Invalid ARN: The access point name may only contain a-z, A-Z, 0-9 and `-`. Found: `{}`",
                d.access_point_name_ssa_1.value()?
            )),
            50 => RuleResult::error(format!(
                "Invalid ARN: The account id may only contain a-z, A-Z, 0-9 and `-`. Found: `{}`",
                d.bucket_arn.value()?.account_id
            )),
            51 => RuleResult::error(format!(
                "Invalid region in ARN: `{}` (invalid DNS name)",
                d.bucket_arn.value()?.region
            )),
            52 => RuleResult::error(format!(
                "Client was configured for partition `{}` but ARN (`{}`) has `{}`",
                d.partition_result.value()?.name,
                bucket()?,
                d.bucket_partition.value()?.name
            )),
            53 => RuleResult::error(
                "Invalid ARN: The ARN may only contain a single resource component after `accesspoint`.",
            ),
            54 => RuleResult::error("Invalid ARN: bucket ARN is missing a region"),
            55 => RuleResult::error(
                "Invalid ARN: Expected a resource of the format `accesspoint:<accesspoint name>` but no name was provided",
            ),
            56 => RuleResult::error(format!(
                "Invalid ARN: Object Lambda ARNs only support `accesspoint` arn types, but found: `{}`",
                d.arn_type.value()?
            )),
            57 => RuleResult::error("Access Points do not support S3 Accelerate"),
            58 => self.access_point("s3-accesspoint-fips.dualstack", s3),
            59 => self.access_point("s3-accesspoint-fips", s3),
            60 => self.access_point("s3-accesspoint.dualstack", s3),
            61 => {
                let arn = d.bucket_arn.value()?;
                let url = d.url.value()?;
                RuleResult::endpoint(
                    format!(
                        "{}://{}-{}.{}{}",
                        url.scheme,
                        d.access_point_name_ssa_1.value()?,
                        arn.account_id,
                        url.authority,
                        url.path
                    ),
                    s3(&arn.region),
                )
            }
            62 => self.access_point("s3-accesspoint", s3),
            63 => RuleResult::error(format!(
                "Invalid ARN: The ARN was not for the S3 service, found: {}",
                d.bucket_arn.value()?.service
            )),

            // Multi-region access points
            64 => RuleResult::error("S3 MRAP does not support dual-stack"),
            65 => RuleResult::error("S3 MRAP does not support FIPS"),
            66 => RuleResult::error("S3 MRAP does not support S3 Accelerate"),
            67 => RuleResult::error(
                "Invalid configuration: Multi-Region Access Point ARNs are disabled.",
            ),
            68 => RuleResult::endpoint(
                format!(
                    "https://{}.accesspoint.s3-global.{}",
                    d.access_point_name_ssa_1.value()?,
                    d.mrap_partition.value()?.dns_suffix
                ),
                vec![AuthScheme::sigv4a_any_region("s3")],
            ),
            69 => RuleResult::error(format!(
                "Client was configured for partition `{}` but bucket referred to partition `{}`",
                d.mrap_partition.value()?.name,
                d.bucket_arn.value()?.partition
            )),
            70 => RuleResult::error("Invalid Access Point Name"),

            // Outposts access points
            71 => RuleResult::error("S3 Outposts does not support Dual-stack"),
            72 => RuleResult::error("S3 Outposts does not support FIPS"),
            73 => RuleResult::error("S3 Outposts does not support S3 Accelerate"),
            74 => RuleResult::error("Invalid Arn: Outpost Access Point ARN contains sub resources"),
            75 => {
                let arn = d.bucket_arn.value()?;
                RuleResult::endpoint(
                    format!(
                        "https://{}-{}.{}.{}",
                        d.access_point_name_ssa_2.value()?,
                        arn.account_id,
                        d.outpost_id_ssa_1.value()?,
                        d.url.value()?.authority
                    ),
                    outposts(&arn.region),
                )
            }
            76 => {
                let arn = d.bucket_arn.value()?;
                RuleResult::endpoint(
                    format!(
                        "https://{}-{}.{}.s3-outposts.{}.{}",
                        d.access_point_name_ssa_2.value()?,
                        arn.account_id,
                        d.outpost_id_ssa_1.value()?,
                        arn.region,
                        d.bucket_partition.value()?.dns_suffix
                    ),
                    outposts(&arn.region),
                )
            }
            77 => RuleResult::error(format!(
                "Expected an outpost type `accesspoint`, found {}",
                d.outpost_type.value()?
            )),
            78 => RuleResult::error("Invalid ARN: expected an access point name"),
            79 => RuleResult::error("Invalid ARN: Expected a 4-component resource"),
            80 => RuleResult::error(format!(
                "Invalid ARN: The outpost Id may only contain a-z, A-Z, 0-9 and `-`. Found: `{}`",
                d.outpost_id_ssa_1.value()?
            )),
            81 => RuleResult::error("Invalid ARN: The Outpost Id was not set"),
            82 => RuleResult::error(format!(
                "Invalid ARN: Unrecognized format: {} (type: {})",
                bucket()?,
                d.arn_type.value()?
            )),
            83 => RuleResult::error("Invalid ARN: No ARN type specified"),
            84 => RuleResult::error(format!(
                "Invalid ARN: `{}` was not a valid ARN",
                bucket()?
            )),
            85 => RuleResult::error("Path-style addressing cannot be used with ARN buckets"),

            // Path-style buckets
            86 | 88 | 90 | 94 => RuleResult::endpoint(
                format!(
                    "https://{}{}/{}",
                    path_style_host(index, US_EAST_1),
                    suffix()?,
                    d.uri_encoded_bucket.value()?
                ),
                s3(US_EAST_1),
            ),
            87 | 89 | 91 | 95 | 96 => RuleResult::endpoint(
                format!(
                    "https://{}{}/{}",
                    path_style_host(index, region()?),
                    suffix()?,
                    d.uri_encoded_bucket.value()?
                ),
                s3(region()?),
            ),
            92 | 93 => {
                let url = d.url.value()?;
                RuleResult::endpoint(
                    format!(
                        "{}://{}{}{}",
                        url.scheme,
                        url.authority,
                        url.normalized_path,
                        d.uri_encoded_bucket.value()?
                    ),
                    s3(if index == 92 { US_EAST_1 } else { region()? }),
                )
            }
            97 => RuleResult::error("Path-style addressing cannot be used with S3 Accelerate"),

            // Object Lambda
            98 => {
                let url = d.url.value()?;
                RuleResult::endpoint(
                    format!("{}://{}{}", url.scheme, url.authority, url.path),
                    object_lambda(region()?),
                )
            }
            99 => RuleResult::endpoint(
                format!("https://s3-object-lambda-fips.{}.{}", region()?, suffix()?),
                object_lambda(region()?),
            ),
            100 => RuleResult::endpoint(
                format!("https://s3-object-lambda.{}.{}", region()?, suffix()?),
                object_lambda(region()?),
            ),

            // No bucket: the path-style hosts of 86..=96 without the bucket path
            101 | 103 | 105 | 109 => RuleResult::endpoint(
                format!(
                    "https://{}{}",
                    path_style_host(index - 15, US_EAST_1),
                    suffix()?
                ),
                s3(US_EAST_1),
            ),
            102 | 104 | 106 | 110 | 111 => RuleResult::endpoint(
                format!(
                    "https://{}{}",
                    path_style_host(index - 15, region()?),
                    suffix()?
                ),
                s3(region()?),
            ),
            107 | 108 => {
                let url = d.url.value()?;
                RuleResult::endpoint(
                    format!("{}://{}{}", url.scheme, url.authority, url.path),
                    s3(if index == 107 { US_EAST_1 } else { region()? }),
                )
            }
            112 => RuleResult::error("A region must be set when sending requests to S3."),
            _ => Err(EndpointError::UnknownResult(index)),
        }
    }

    /// `https://<name>-<account>.<service>.<arn region>.<suffix>` for an
    /// access point ARN, signed for the ARN's region.
    fn access_point(
        &self,
        service: &str,
        auth_schemes: fn(&str) -> Vec<AuthScheme>,
    ) -> EndpointResult<RuleResult> {
        let d = &self.derived;
        let arn = d.bucket_arn.value()?;
        RuleResult::endpoint(
            format!(
                "https://{}-{}.{}.{}.{}",
                d.access_point_name_ssa_1.value()?,
                arn.account_id,
                service,
                arn.region,
                d.bucket_partition.value()?.dns_suffix
            ),
            auth_schemes(&arn.region),
        )
    }

    /// Signing scheme picked by the `s3e_auth` binding.
    fn s3_express_auth(&self, region: &str) -> EndpointResult<AuthScheme> {
        Ok(match *self.derived.s3e_auth.value()? {
            "sigv4" => AuthScheme::sigv4("s3express", region),
            _ => AuthScheme::sigv4_s3express("s3express", region),
        })
    }
}

/// Host prefix, up to and including the dot before the DNS suffix, of the
/// path-style templates 86..=96. Paired indices differ only in whether the
/// region is pinned to `us-east-1`, which the caller passes in `region`.
fn path_style_host(index: usize, region: &str) -> String {
    match index {
        86 | 87 => format!("s3-fips.dualstack.{region}."),
        88 | 89 => format!("s3-fips.{region}."),
        90 | 91 => format!("s3.dualstack.{region}."),
        96 => format!("s3.{region}."),
        _ => "s3.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::PartitionResolver;
    use crate::params::Params;

    #[test]
    fn test_should_render_static_error() {
        let params = Params::default();
        let ctx = EvalContext::new(&params, PartitionResolver::bundled());
        assert_eq!(
            ctx.result(112).unwrap(),
            RuleResult::Error("A region must be set when sending requests to S3.".to_owned())
        );
    }

    #[test]
    fn test_should_reject_unknown_result() {
        let params = Params::default();
        let ctx = EvalContext::new(&params, PartitionResolver::bundled());
        assert_eq!(ctx.result(RESULT_COUNT), Err(EndpointError::UnknownResult(113)));
    }

    #[test]
    fn test_should_require_bindings_for_templates() {
        let params = Params::builder().region("us-east-1").bucket("b-1").build();
        let ctx = EvalContext::new(&params, PartitionResolver::bundled());
        assert_eq!(
            ctx.result(39),
            Err(EndpointError::UnsetDerived {
                field: "partitionResult"
            })
        );

        assert!(ctx.condition(24).unwrap());
        let RuleResult::Endpoint(endpoint) = ctx.result(39).unwrap() else {
            panic!("expected an endpoint");
        };
        assert_eq!(endpoint.url, "https://b-1.s3.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_should_build_path_style_hosts() {
        assert_eq!(path_style_host(86, US_EAST_1), "s3-fips.dualstack.us-east-1.");
        assert_eq!(path_style_host(89, "eu-west-1"), "s3-fips.eu-west-1.");
        assert_eq!(path_style_host(91, "eu-west-1"), "s3.dualstack.eu-west-1.");
        assert_eq!(path_style_host(94, US_EAST_1), "s3.");
        assert_eq!(path_style_host(95, "eu-west-1"), "s3.");
        assert_eq!(path_style_host(96, "eu-west-1"), "s3.eu-west-1.");
    }

    #[test]
    fn test_should_pick_s3_express_scheme_from_binding() {
        let params = Params::builder()
            .region("us-west-2")
            .disable_s3_express_session_auth(true)
            .build();
        let ctx = EvalContext::new(&params, PartitionResolver::bundled());
        assert!(ctx.condition(8).unwrap());
        assert_eq!(
            ctx.s3_express_auth("us-west-2").unwrap(),
            AuthScheme::sigv4("s3express", "us-west-2")
        );
    }
}
