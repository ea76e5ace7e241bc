//! Environment-driven configuration feeding the resolver.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rustack_s3_endpoint::{EndpointConfig, S3EndpointResolver};

    use crate::{Outcome, resolve_local, resolve_sdk};

    fn config(vars: &[(&str, &str)]) -> EndpointConfig {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        EndpointConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()))
    }

    #[tokio::test]
    async fn test_should_resolve_from_environment_config() {
        let config = config(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_USE_DUALSTACK_ENDPOINT", "true"),
        ]);
        let params = config.params_for(Some("reports"));

        let local = resolve_local(&params);
        assert_eq!(
            local,
            Outcome::Url("https://reports.s3.dualstack.eu-west-1.amazonaws.com".to_owned())
        );
        assert_eq!(local, resolve_sdk(&params).await);
    }

    #[tokio::test]
    async fn test_should_honor_custom_endpoint_from_environment() {
        let config = config(&[
            ("AWS_DEFAULT_REGION", "us-east-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
            ("AWS_S3_FORCE_PATH_STYLE", "1"),
        ]);
        let params = config.params_for(Some("my-bucket"));

        let local = resolve_local(&params);
        assert_eq!(
            local,
            Outcome::Url("http://localhost:4566/my-bucket".to_owned())
        );
        assert_eq!(local, resolve_sdk(&params).await);
    }

    #[test]
    fn test_should_serialize_endpoint_for_cli_output() {
        let params = config(&[("AWS_REGION", "us-east-1")])
            .params_for(Some("mybucket--use1-az4--x-s3"));
        let endpoint = S3EndpointResolver::new()
            .resolve(&params)
            .expect("s3 express bucket should resolve");

        let json = serde_json::to_value(&endpoint).expect("serialize endpoint");
        assert_eq!(json["backend"], "S3Express");
        assert_eq!(json["authSchemes"][0]["name"], "sigv4-s3express");
        assert_eq!(json["authSchemes"][0]["signingName"], "s3express");
        assert_eq!(json["authSchemes"][0]["signingRegion"], "us-east-1");
    }
}
