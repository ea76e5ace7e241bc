//! Parity tests against the `aws-sdk-s3` default endpoint resolver.

#[cfg(test)]
mod tests {
    use rustack_s3_endpoint::Params;
    use rustack_s3_endpoint::resolver::BUCKET_ARN_HINT;

    use crate::{Outcome, resolve_local, resolve_sdk};

    const ACCESS_POINT_ARN: &str = "arn:aws:s3:us-west-2:123456789012:accesspoint:my-ap";

    fn url(value: &str) -> Outcome {
        Outcome::Url(value.to_owned())
    }

    fn error(value: &str) -> Outcome {
        Outcome::Error(value.to_owned())
    }

    async fn assert_parity(params: Params, expected: Outcome) {
        let local = resolve_local(&params);
        assert_eq!(local, expected, "local resolver for {params:?}");
        let sdk = resolve_sdk(&params).await;
        assert_eq!(local, sdk, "sdk resolver disagrees for {params:?}");
    }

    #[tokio::test]
    async fn test_should_match_sdk_for_bucket_addressing() {
        let cases = [
            (
                Params::builder().region("us-east-1").bucket("my-bucket").build(),
                url("https://my-bucket.s3.us-east-1.amazonaws.com"),
            ),
            (
                Params::builder()
                    .region("us-west-2")
                    .bucket("my-bucket")
                    .force_path_style(true)
                    .build(),
                url("https://s3.us-west-2.amazonaws.com/my-bucket"),
            ),
            (
                Params::builder().region("us-east-1").bucket("MyBucket").build(),
                url("https://s3.us-east-1.amazonaws.com/MyBucket"),
            ),
            (
                Params::builder().region("us-west-2").build(),
                url("https://s3.us-west-2.amazonaws.com"),
            ),
            (
                Params::builder().region("cn-north-1").bucket("my-bucket").build(),
                url("https://my-bucket.s3.cn-north-1.amazonaws.com.cn"),
            ),
        ];
        for (params, expected) in cases {
            assert_parity(params, expected).await;
        }
    }

    #[tokio::test]
    async fn test_should_match_sdk_for_endpoint_variants() {
        let cases = [
            (
                Params::builder()
                    .region("us-west-2")
                    .bucket("my-bucket")
                    .use_fips(true)
                    .use_dual_stack(true)
                    .build(),
                url("https://my-bucket.s3-fips.dualstack.us-west-2.amazonaws.com"),
            ),
            (
                Params::builder()
                    .region("us-west-2")
                    .bucket("my-bucket")
                    .accelerate(true)
                    .build(),
                url("https://my-bucket.s3-accelerate.amazonaws.com"),
            ),
            (
                Params::builder()
                    .region("us-east-1")
                    .bucket("my-bucket")
                    .use_global_endpoint(true)
                    .build(),
                url("https://my-bucket.s3.amazonaws.com"),
            ),
            (
                Params::builder()
                    .region("us-east-1")
                    .bucket("my-bucket")
                    .endpoint("http://127.0.0.1:9000")
                    .build(),
                url("http://127.0.0.1:9000/my-bucket"),
            ),
            (
                Params::builder()
                    .region("us-west-2")
                    .bucket("my-bucket")
                    .endpoint("https://example.com/custom")
                    .build(),
                url("https://my-bucket.example.com/custom"),
            ),
            (
                Params::builder()
                    .region("us-east-1")
                    .bucket("my-bucket")
                    .endpoint("https://example.com#frag")
                    .build(),
                url("https://my-bucket.example.com"),
            ),
        ];
        for (params, expected) in cases {
            assert_parity(params, expected).await;
        }
    }

    #[tokio::test]
    async fn test_should_match_sdk_for_access_points() {
        let cases = [
            (
                Params::builder()
                    .region("us-west-2")
                    .bucket(ACCESS_POINT_ARN)
                    .build(),
                url("https://my-ap-123456789012.s3-accesspoint.us-west-2.amazonaws.com"),
            ),
            (
                Params::builder()
                    .region("us-east-1")
                    .bucket(ACCESS_POINT_ARN)
                    .use_arn_region(true)
                    .build(),
                url("https://my-ap-123456789012.s3-accesspoint.us-west-2.amazonaws.com"),
            ),
            (
                Params::builder()
                    .region("us-east-1")
                    .bucket("mybucket--use1-az4--x-s3")
                    .build(),
                url("https://mybucket--use1-az4--x-s3.s3express-use1-az4.us-east-1.amazonaws.com"),
            ),
        ];
        for (params, expected) in cases {
            assert_parity(params, expected).await;
        }
    }

    #[tokio::test]
    async fn test_should_match_sdk_errors() {
        let cases = [
            (
                Params::builder().bucket("my-bucket").build(),
                error("A region must be set when sending requests to S3."),
            ),
            (
                Params::builder()
                    .region("us-east-1")
                    .bucket("my-bucket")
                    .use_fips(true)
                    .accelerate(true)
                    .build(),
                error("Accelerate cannot be used with FIPS"),
            ),
            (
                Params::builder()
                    .region("us-west-2")
                    .bucket(ACCESS_POINT_ARN)
                    .force_path_style(true)
                    .build(),
                error("Path-style addressing cannot be used with ARN buckets"),
            ),
        ];
        for (params, expected) in cases {
            assert_parity(params, expected).await;
        }
    }

    #[tokio::test]
    async fn test_should_extend_sdk_error_with_bucket_arn_hint() {
        let params = Params::builder()
            .region("us-east-1")
            .bucket("arn:aws:s3:::bucket")
            .build();
        let Outcome::Error(sdk) = resolve_sdk(&params).await else {
            panic!("sdk resolver should reject simple bucket ARNs");
        };
        assert!(sdk.starts_with("Invalid ARN"));
        assert_eq!(resolve_local(&params), Outcome::Error(format!("{sdk}{BUCKET_ARN_HINT}")));
    }
}
