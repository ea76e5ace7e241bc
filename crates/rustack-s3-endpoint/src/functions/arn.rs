//! Amazon Resource Name parsing.

/// A parsed ARN: `arn:partition:service:region:account-id:resource`.
///
/// The resource is split on both `:` and `/` into [`Arn::resource_id`], so
/// `accesspoint:my-ap` and `outpost/op-123/accesspoint/reports` become lists
/// of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    /// Partition, e.g. `aws` or `aws-cn`.
    pub partition: String,
    /// Service namespace, e.g. `s3` or `s3-outposts`.
    pub service: String,
    /// Region, possibly empty (multi-region access points, bucket ARNs).
    pub region: String,
    /// Account id, possibly empty.
    pub account_id: String,
    /// Resource components.
    pub resource_id: Vec<String>,
}

impl Arn {
    /// Parse an ARN, returning `None` when the input is not one.
    ///
    /// Partition, service and resource must be present; region and account
    /// may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rustack_s3_endpoint::functions::Arn;
    ///
    /// let arn = Arn::parse("arn:aws:s3:us-west-2:123456789012:accesspoint:my-ap").unwrap();
    /// assert_eq!(arn.service, "s3");
    /// assert_eq!(arn.resource_id, vec!["accesspoint", "my-ap"]);
    ///
    /// assert!(Arn::parse("my-bucket").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.splitn(6, ':');
        if parts.next()? != "arn" {
            return None;
        }
        let partition = parts.next()?;
        let service = parts.next()?;
        let region = parts.next()?;
        let account_id = parts.next()?;
        let resource = parts.next()?;

        if partition.is_empty() || service.is_empty() || resource.is_empty() {
            return None;
        }

        Some(Self {
            partition: partition.to_owned(),
            service: service.to_owned(),
            region: region.to_owned(),
            account_id: account_id.to_owned(),
            resource_id: resource.split([':', '/']).map(str::to_owned).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_access_point_arn() {
        let arn = Arn::parse("arn:aws:s3:us-west-2:123456789012:accesspoint:my-ap").unwrap();
        assert_eq!(arn.partition, "aws");
        assert_eq!(arn.service, "s3");
        assert_eq!(arn.region, "us-west-2");
        assert_eq!(arn.account_id, "123456789012");
        assert_eq!(arn.resource_id, vec!["accesspoint", "my-ap"]);
    }

    #[test]
    fn test_should_split_resource_on_slashes_and_colons() {
        let arn = Arn::parse(
            "arn:aws:s3-outposts:us-west-2:123456789012:outpost/op-01234567890123456/accesspoint/reports",
        )
        .unwrap();
        assert_eq!(
            arn.resource_id,
            vec!["outpost", "op-01234567890123456", "accesspoint", "reports"]
        );

        let arn = Arn::parse("arn:aws:s3:us-east-1:123456789012:accesspoint:a:b/c").unwrap();
        assert_eq!(arn.resource_id, vec!["accesspoint", "a", "b", "c"]);
    }

    #[test]
    fn test_should_allow_empty_region_and_account() {
        let arn = Arn::parse("arn:aws:s3:::bucket").unwrap();
        assert!(arn.region.is_empty());
        assert!(arn.account_id.is_empty());
        assert_eq!(arn.resource_id, vec!["bucket"]);
    }

    #[test]
    fn test_should_reject_malformed_arns() {
        assert!(Arn::parse("arn:").is_none());
        assert!(Arn::parse("arn:aws:s3:us-east-1:123456789012").is_none());
        assert!(Arn::parse("arn::s3:us-east-1:123456789012:thing").is_none());
        assert!(Arn::parse("arn:aws::us-east-1:123456789012:thing").is_none());
        assert!(Arn::parse("arn:aws:s3:us-east-1:123456789012:").is_none());
        assert!(Arn::parse("urn:aws:s3:us-east-1:123456789012:thing").is_none());
    }
}
