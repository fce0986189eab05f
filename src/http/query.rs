// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Query string composition
//!
//! Keys and values are encoded with `application/x-www-form-urlencoded`
//! rules: alphanumerics and `*-._` pass through, space becomes `+`, every
//! other byte is percent-encoded.

use url::form_urlencoded::byte_serialize;

/// Percent-encode a single key or value
pub fn encode_component(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

/// Append query parameters to a URL
///
/// Returns `url` untouched when there are no parameters. Otherwise appends
/// `?` (or `&` when the URL already has a query) followed by `key=value`
/// pairs joined with `&`. A parameter without a value is encoded as `key=`.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use fluent_request::http::compose_url;
///
/// let mut params = BTreeMap::new();
/// params.insert("q".to_string(), Some("a b".to_string()));
/// assert_eq!(compose_url("http://x/y?z=1", &params), "http://x/y?z=1&q=a+b");
/// ```
pub fn compose_url<'a, I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, &'a Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str> + 'a,
{
    let pairs: Vec<String> = params
        .into_iter()
        .map(|(key, value)| {
            let value = value.as_ref().map(|v| encode_component(v.as_ref()));
            format!(
                "{}={}",
                encode_component(key.as_ref()),
                value.unwrap_or_default()
            )
        })
        .collect();

    if pairs.is_empty() {
        return url.to_string();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, pairs.join("&"))
}

/// Encode pairs as a form body
pub fn encode_form<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", encode_component(k.as_ref()), encode_component(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn params(pairs: &[(&str, Option<&str>)]) -> BTreeMap<String, Option<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_no_params_leaves_url() {
        assert_eq!(compose_url("http://x/y", &params(&[])), "http://x/y");
    }

    #[test]
    fn test_single_param() {
        assert_eq!(
            compose_url("http://x/y", &params(&[("a", Some("1"))])),
            "http://x/y?a=1"
        );
    }

    #[test]
    fn test_existing_query_uses_ampersand() {
        assert_eq!(
            compose_url("http://x/y?z=1", &params(&[("a", Some("1"))])),
            "http://x/y?z=1&a=1"
        );
    }

    #[test]
    fn test_multiple_params_have_no_trailing_separator() {
        let url = compose_url("http://x/y", &params(&[("a", Some("1")), ("b", Some("2"))]));
        assert_eq!(url, "http://x/y?a=1&b=2");
        assert!(!url.ends_with('&'));
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = compose_url(
            "http://x/y",
            &params(&[("search term", Some("fish & chips")), ("path", Some("a/b=c"))]),
        );
        assert_eq!(url, "http://x/y?path=a%2Fb%3Dc&search+term=fish+%26+chips");
    }

    #[test]
    fn test_absent_value_encodes_empty() {
        assert_eq!(
            compose_url("http://x/y", &params(&[("debug", None)])),
            "http://x/y?debug="
        );
    }

    #[test]
    fn test_unicode_is_percent_encoded() {
        assert_eq!(encode_component("å"), "%C3%A5");
    }

    #[test]
    fn test_encode_form() {
        let body = encode_form([("user", "bob smith"), ("role", "a&b")]);
        assert_eq!(body, "user=bob+smith&role=a%26b");
    }
}
