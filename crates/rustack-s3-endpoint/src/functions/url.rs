//! Custom endpoint URL parsing.

use std::net::{Ipv4Addr, Ipv6Addr};

/// A custom endpoint URL broken into the parts endpoint templates use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// `http` or `https`.
    pub scheme: String,
    /// Host and optional port, exactly as written.
    pub authority: String,
    /// Path as written, possibly empty.
    pub path: String,
    /// Path with a leading and trailing `/`, ready for a bucket to be appended.
    pub normalized_path: String,
    /// Whether the host is an IPv4 or IPv6 literal.
    pub is_ip: bool,
}

impl ParsedUrl {
    /// Parse a custom endpoint.
    ///
    /// Only absolute `http`/`https` URLs with a host and without a query
    /// string are accepted. A fragment is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rustack_s3_endpoint::functions::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("http://127.0.0.1:9000/base").unwrap();
    /// assert_eq!(url.authority, "127.0.0.1:9000");
    /// assert_eq!(url.path, "/base");
    /// assert_eq!(url.normalized_path, "/base/");
    /// assert!(url.is_ip);
    ///
    /// assert!(ParsedUrl::parse("not a url").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.split_once('#').map_or(input, |(head, _)| head);
        let uri: http::Uri = input.parse().ok()?;
        let scheme = uri.scheme_str()?;
        if scheme != "http" && scheme != "https" {
            return None;
        }
        if uri.query().is_some() {
            return None;
        }
        let authority = uri.authority()?.as_str();
        if authority.is_empty() {
            return None;
        }

        // The raw path is taken from the input; `http::Uri::path` reports an
        // empty path as `/`.
        let after_scheme = &input[input.find("://")? + 3..];
        let path = after_scheme.get(authority.len()..)?;
        if path.contains('?') {
            return None;
        }

        let host = uri.host()?;
        let is_ip = host.starts_with('[')
            || host.parse::<Ipv4Addr>().is_ok()
            || host.parse::<Ipv6Addr>().is_ok();

        Some(Self {
            scheme: scheme.to_owned(),
            authority: authority.to_owned(),
            path: path.to_owned(),
            normalized_path: normalize_path(path),
            is_ip,
        })
    }
}

fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_url_without_path() {
        let url = ParsedUrl::parse("https://example.com").unwrap();
        assert_eq!(url.scheme, "https");
        assert_eq!(url.authority, "example.com");
        assert_eq!(url.path, "");
        assert_eq!(url.normalized_path, "/");
        assert!(!url.is_ip);
    }

    #[test]
    fn test_should_keep_port_and_path() {
        let url = ParsedUrl::parse("http://beta.example.com:1234/custom/").unwrap();
        assert_eq!(url.scheme, "http");
        assert_eq!(url.authority, "beta.example.com:1234");
        assert_eq!(url.path, "/custom/");
        assert_eq!(url.normalized_path, "/custom/");
    }

    #[test]
    fn test_should_detect_ip_hosts() {
        assert!(ParsedUrl::parse("http://127.0.0.1").unwrap().is_ip);
        assert!(ParsedUrl::parse("http://[::1]:9000").unwrap().is_ip);
        assert!(!ParsedUrl::parse("http://localhost:9000").unwrap().is_ip);
    }

    #[test]
    fn test_should_reject_unsupported_urls() {
        assert!(ParsedUrl::parse("not a url").is_none());
        assert!(ParsedUrl::parse("ftp://example.com").is_none());
        assert!(ParsedUrl::parse("https://example.com/path?query=1").is_none());
        assert!(ParsedUrl::parse("/relative/path").is_none());
    }

    #[test]
    fn test_should_drop_fragment() {
        let url = ParsedUrl::parse("https://example.com#frag").unwrap();
        assert_eq!(url.authority, "example.com");
        assert_eq!(url.path, "");
        assert_eq!(url.normalized_path, "/");

        let url = ParsedUrl::parse("http://10.0.0.1:9000/base#section").unwrap();
        assert_eq!(url.authority, "10.0.0.1:9000");
        assert_eq!(url.path, "/base");
        assert!(url.is_ip);

        assert!(ParsedUrl::parse("https://example.com/a?b#c").is_none());
    }

    #[test]
    fn test_should_normalize_paths() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/a"), "/a/");
        assert_eq!(normalize_path("a/b/"), "/a/b/");
    }
}
