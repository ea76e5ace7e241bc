//! DNS host label and virtual-hostable bucket checks.

use std::net::Ipv4Addr;

/// Minimum bucket name length for virtual-hosted addressing.
const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum bucket name length for virtual-hosted addressing.
const MAX_BUCKET_NAME_LEN: usize = 63;

/// Maximum length of a single DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Whether `value` is a valid DNS host label.
///
/// A label is 1-63 characters of ASCII letters, digits and `-`, starting
/// with a letter or digit. With `allow_dots`, every `.`-separated label must
/// satisfy that rule, so empty labels (`a..b`, `.a`) are rejected.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::functions::is_valid_host_label;
///
/// assert!(is_valid_host_label("us-east-1", false));
/// assert!(!is_valid_host_label("us.east", false));
/// assert!(is_valid_host_label("us.east", true));
/// assert!(!is_valid_host_label("-start", false));
/// ```
#[must_use]
pub fn is_valid_host_label(value: &str, allow_dots: bool) -> bool {
    if allow_dots {
        value.split('.').all(is_single_label)
    } else {
        is_single_label(value)
    }
}

fn is_single_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    bytes.len() <= MAX_LABEL_LEN
        && first.is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

/// Whether `bucket` can be addressed as `<bucket>.<host>`.
///
/// The name must be 3-63 characters of lowercase letters, digits and `-`,
/// starting and ending with a letter or digit. With `allow_dots` the name
/// may also contain `.`, but not `..`, `.-` or `-.`, and must not look like
/// an IPv4 address.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::functions::is_virtual_hostable_s3_bucket;
///
/// assert!(is_virtual_hostable_s3_bucket("my-bucket", false));
/// assert!(!is_virtual_hostable_s3_bucket("My-Bucket", false));
/// assert!(!is_virtual_hostable_s3_bucket("my.bucket", false));
/// assert!(is_virtual_hostable_s3_bucket("my.bucket", true));
/// assert!(!is_virtual_hostable_s3_bucket("192.168.1.1", true));
/// ```
#[must_use]
pub fn is_virtual_hostable_s3_bucket(bucket: &str, allow_dots: bool) -> bool {
    let bytes = bucket.as_bytes();
    if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&bytes.len()) {
        return false;
    }

    let is_lower_alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    if !is_lower_alnum(first) || !is_lower_alnum(last) {
        return false;
    }

    if !bytes
        .iter()
        .all(|&b| is_lower_alnum(b) || b == b'-' || (allow_dots && b == b'.'))
    {
        return false;
    }

    if !allow_dots {
        return true;
    }

    if bucket.contains("..") || bucket.contains(".-") || bucket.contains("-.") {
        return false;
    }

    bucket.parse::<Ipv4Addr>().is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_accept_valid_host_labels() {
        assert!(is_valid_host_label("a", false));
        assert!(is_valid_host_label("us-west-2", false));
        assert!(is_valid_host_label("Op-01234567890123456", false));
        assert!(is_valid_host_label(&"a".repeat(63), false));
    }

    #[test]
    fn test_should_reject_invalid_host_labels() {
        assert!(!is_valid_host_label("", false));
        assert!(!is_valid_host_label("-leading", false));
        assert!(!is_valid_host_label("under_score", false));
        assert!(!is_valid_host_label(&"a".repeat(64), false));
        assert!(!is_valid_host_label("invalid region!", true));
    }

    #[test]
    fn test_should_validate_each_dotted_label() {
        assert!(is_valid_host_label("my.access.point", true));
        assert!(!is_valid_host_label("my..point", true));
        assert!(!is_valid_host_label(".leading", true));
        assert!(!is_valid_host_label("trailing.", true));
        assert!(!is_valid_host_label("my.access.point", false));
    }

    #[test]
    fn test_should_accept_virtual_hostable_buckets() {
        assert!(is_virtual_hostable_s3_bucket("abc", false));
        assert!(is_virtual_hostable_s3_bucket("mybucket--usw2-az1--x-s3", false));
        assert!(is_virtual_hostable_s3_bucket("logs.example.com", true));
    }

    #[test]
    fn test_should_reject_non_virtual_hostable_buckets() {
        assert!(!is_virtual_hostable_s3_bucket("ab", false));
        assert!(!is_virtual_hostable_s3_bucket(&"a".repeat(64), false));
        assert!(!is_virtual_hostable_s3_bucket("bucket-", false));
        assert!(!is_virtual_hostable_s3_bucket("Bucket", true));
        assert!(!is_virtual_hostable_s3_bucket("bucket_name", true));
        assert!(!is_virtual_hostable_s3_bucket("a..b", true));
        assert!(!is_virtual_hostable_s3_bucket("a.-b", true));
        assert!(!is_virtual_hostable_s3_bucket("a-.b", true));
        assert!(!is_virtual_hostable_s3_bucket("10.0.0.1", true));
    }
}
