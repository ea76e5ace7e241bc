//! Rule-set standard library.
//!
//! The predicates and value producers the S3 rule conditions are built
//! from: string slicing, host-label checks, ARN and URL parsing, partition
//! lookup. Every function returns `None`/`false` for inputs it cannot
//! handle instead of failing; the decision graph routes those outcomes to the
//! matching error terminal.

mod arn;
mod host;
mod partition;
mod url;

pub use arn::Arn;
pub use host::{is_valid_host_label, is_virtual_hostable_s3_bucket};
pub use partition::{Partition, PartitionError, PartitionResolver};
pub use url::ParsedUrl;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters is encoded.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Slice `input` between `start` and `stop`.
///
/// With `reverse` the offsets count from the end of the string, so
/// `substring(s, 0, 6, true)` is the last six characters. Returns `None` for
/// a missing input, an empty or inverted range, a range past the end of the
/// input, or any non-ASCII input.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::functions::substring;
///
/// assert_eq!(substring(Some("mybucket--x-s3"), 0, 6, true), Some("--x-s3"));
/// assert_eq!(substring(Some("arn:aws:s3"), 0, 4, false), Some("arn:"));
/// assert_eq!(substring(Some("abc"), 0, 4, false), None);
/// ```
#[must_use]
pub fn substring(input: Option<&str>, start: usize, stop: usize, reverse: bool) -> Option<&str> {
    let input = input?;
    if start >= stop || input.len() < stop || !input.is_ascii() {
        return None;
    }
    if reverse {
        let len = input.len();
        Some(&input[len - stop..len - start])
    } else {
        Some(&input[start..stop])
    }
}

/// Null-coalescing string equality: a missing value compares as `""`.
#[must_use]
pub fn coalesce_eq(value: Option<&str>, expected: &str) -> bool {
    value.unwrap_or_default() == expected
}

/// Percent-encode every byte outside `A-Z a-z 0-9 - _ . ~`.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::functions::uri_encode;
///
/// assert_eq!(uri_encode("my-bucket"), "my-bucket");
/// assert_eq!(uri_encode("a b/c"), "a%20b%2Fc");
/// ```
#[must_use]
pub fn uri_encode(value: &str) -> String {
    utf8_percent_encode(value, URI_ENCODE_SET).to_string()
}

/// Split `value` on `delimiter`, keeping empty pieces.
///
/// A `limit` of `0` splits on every occurrence; otherwise at most `limit`
/// pieces are returned and the last one holds the remainder.
#[must_use]
pub fn split<'a>(value: &'a str, delimiter: &str, limit: usize) -> Vec<&'a str> {
    if limit == 0 {
        value.split(delimiter).collect()
    } else {
        value.splitn(limit, delimiter).collect()
    }
}

/// Bounds-checked list element access.
#[must_use]
pub fn list_access<T: AsRef<str>>(items: &[T], index: usize) -> Option<&str> {
    items.get(index).map(AsRef::as_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_slice_from_start() {
        assert_eq!(substring(Some("arn:aws"), 0, 4, false), Some("arn:"));
        assert_eq!(substring(Some("abcdef"), 2, 4, false), Some("cd"));
    }

    #[test]
    fn test_should_slice_from_end() {
        assert_eq!(substring(Some("bucket--op-s3"), 0, 7, true), Some("--op-s3"));
        assert_eq!(substring(Some("abcdef"), 1, 3, true), Some("de"));
    }

    #[test]
    fn test_should_reject_invalid_substring_ranges() {
        assert_eq!(substring(None, 0, 4, false), None);
        assert_eq!(substring(Some("abc"), 2, 2, false), None);
        assert_eq!(substring(Some("abc"), 3, 1, false), None);
        assert_eq!(substring(Some("abc"), 0, 4, true), None);
        assert_eq!(substring(Some("ab\u{e9}cd"), 0, 2, false), None);
    }

    #[test]
    fn test_should_coalesce_missing_to_empty() {
        assert!(coalesce_eq(None, ""));
        assert!(!coalesce_eq(None, "--x-s3"));
        assert!(coalesce_eq(Some("--x-s3"), "--x-s3"));
    }

    #[test]
    fn test_should_uri_encode_reserved_characters() {
        assert_eq!(uri_encode("bucket_name.v1~x"), "bucket_name.v1~x");
        assert_eq!(uri_encode("arn:aws:s3:::b"), "arn%3Aaws%3As3%3A%3A%3Ab");
        assert_eq!(uri_encode("a+b*c"), "a%2Bb%2Ac");
        assert_eq!(uri_encode("\u{e9}"), "%C3%A9");
    }

    #[test]
    fn test_should_split_with_and_without_limit() {
        assert_eq!(
            split("mybucket--usw2-az1--x-s3", "--", 0),
            vec!["mybucket", "usw2-az1", "x-s3"]
        );
        assert_eq!(split("a--b--c", "--", 2), vec!["a", "b--c"]);
        assert_eq!(split("--a", "--", 0), vec!["", "a"]);
    }

    #[test]
    fn test_should_access_list_within_bounds() {
        let items = vec!["accesspoint".to_owned(), "my-ap".to_owned()];
        assert_eq!(list_access(&items, 1), Some("my-ap"));
        assert_eq!(list_access(&items, 2), None);
    }
}
