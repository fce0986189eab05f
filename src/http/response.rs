// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::transport::RawResponse;
use super::types::{ContentType, HttpVersion};
use crate::error::{Error, Result};

/// `duration_ms` of a response whose dispatch did not complete
pub const NOT_MEASURED: i64 = -1;

/// Coarse category of a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    /// No status (failed dispatch) or outside 100..600
    Unknown,
}

impl StatusClass {
    /// Classify a raw status code
    pub fn from_code(code: u16) -> Self {
        match code {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }
}

/// Outcome of a `send()`
///
/// Created once and never modified. A failed dispatch produces the sentinel
/// state: `duration_ms == -1`, status code `0`, empty body and headers, and
/// the failure reason in [`Response::error`].
#[derive(Debug, Clone)]
pub struct Response {
    status_code: u16,
    body: String,
    headers: HeaderMap,
    decoded: BTreeMap<String, Vec<String>>,
    uri: String,
    version: Option<HttpVersion>,
    duration_ms: i64,
    error: Option<String>,
}

impl Response {
    /// Materialize a response from a completed round trip
    pub fn from_raw(raw: RawResponse, elapsed: Duration) -> Self {
        Self {
            status_code: raw.status.as_u16(),
            body: String::from_utf8_lossy(&raw.body).into_owned(),
            decoded: decode_headers(&raw.headers),
            headers: raw.headers,
            uri: raw.url.to_string(),
            version: raw.version,
            duration_ms: i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            error: None,
        }
    }

    /// Sentinel response for a dispatch that did not complete
    pub fn failed(error: &Error) -> Self {
        Self {
            status_code: 0,
            body: String::new(),
            headers: HeaderMap::new(),
            decoded: BTreeMap::new(),
            uri: String::new(),
            version: None,
            duration_ms: NOT_MEASURED,
            error: Some(error.to_string()),
        }
    }

    /// Check if the dispatch failed
    pub fn is_failure(&self) -> bool {
        self.duration_ms == NOT_MEASURED
    }

    /// Failure reason, when the dispatch failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Get status code as u16 (`0` after a failed dispatch)
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Typed status, if the dispatch produced one
    pub fn status(&self) -> Option<StatusCode> {
        if self.is_failure() {
            return None;
        }
        StatusCode::from_u16(self.status_code).ok()
    }

    /// Canonical reason phrase for the status code
    pub fn status_name(&self) -> &'static str {
        self.status()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown")
    }

    /// Coarse status category
    pub fn status_class(&self) -> StatusClass {
        StatusClass::from_code(self.status_code)
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status_class() == StatusClass::Success
    }

    /// Check if status is redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        self.status_class() == StatusClass::Redirection
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_class() == StatusClass::ClientError
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status_class() == StatusClass::ServerError
    }

    /// Get body as text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Error::from)
    }

    /// Response headers (case-insensitive, multi-valued)
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Lowercase header name to every value received, decoded as text
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
    pub fn header_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.decoded
    }

    /// Get a header value (first one when repeated)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.decoded
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Get all values for a header
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.decoded
            .get(&name.to_ascii_lowercase())
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Content type, `text/plain` when the server sent none
    pub fn content_type(&self) -> &str {
        self.header("content-type")
            .unwrap_or(ContentType::TextPlain.mime_type())
    }

    /// Final URI (after redirects); empty after a failed dispatch
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Negotiated protocol version
    pub fn version(&self) -> Option<HttpVersion> {
        self.version
    }

    /// Wall-clock time of the round trip, `-1` when not measured
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }
}

fn decode_headers(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers.iter() {
        map.entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    map
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref error) = self.error {
            return write!(f, "FAILED ({})", error);
        }
        write!(
            f,
            "{} {} {} [{}] {}ms, {} bytes",
            self.status_code,
            self.status_name(),
            self.uri,
            self.content_type(),
            self.duration_ms,
            self.body.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use reqwest::header::HeaderValue;
    use url::Url;

    use super::*;

    fn raw(status: StatusCode, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
            url: Url::parse("https://example.com/final").unwrap(),
            version: Some(HttpVersion::Http11),
        }
    }

    #[test]
    fn test_response_status() {
        let resp = Response::from_raw(raw(StatusCode::OK, ""), Duration::from_millis(100));
        assert!(resp.is_success());
        assert!(!resp.is_failure());
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.status_name(), "OK");
        assert_eq!(resp.duration_ms(), 100);
        assert_eq!(resp.uri(), "https://example.com/final");
    }

    #[test]
    fn test_response_text() {
        let resp = Response::from_raw(
            raw(StatusCode::OK, "Hello, World!"),
            Duration::from_millis(5),
        );
        assert_eq!(resp.body(), "Hello, World!");
        assert_eq!(resp.content_type(), "text/plain");
    }

    #[test]
    fn test_multi_valued_headers() {
        let mut raw = raw(StatusCode::NOT_FOUND, "");
        raw.headers
            .append("set-cookie", HeaderValue::from_static("a=1"));
        raw.headers
            .append("set-cookie", HeaderValue::from_static("b=2"));
        raw.headers
            .insert("content-type", HeaderValue::from_static("application/json"));

        let resp = Response::from_raw(raw, Duration::ZERO);

        assert!(resp.is_client_error());
        assert_eq!(resp.header_all("Set-Cookie"), vec!["a=1", "b=2"]);
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(
            resp.header_map().get("set-cookie"),
            Some(&vec!["a=1".to_string(), "b=2".to_string()])
        );
    }

    #[test]
    fn test_non_utf8_header_values_are_kept() {
        let mut raw = raw(StatusCode::OK, "");
        raw.headers
            .append("x-label", HeaderValue::from_bytes(b"caf\xe9").unwrap());
        raw.headers
            .append("x-label", HeaderValue::from_static("plain"));

        let resp = Response::from_raw(raw, Duration::ZERO);

        assert_eq!(resp.header("X-Label"), Some("caf\u{FFFD}"));
        assert_eq!(resp.header_all("x-label"), vec!["caf\u{FFFD}", "plain"]);
        assert_eq!(
            resp.header_map().get("x-label"),
            Some(&vec!["caf\u{FFFD}".to_string(), "plain".to_string()])
        );
        assert_eq!(resp.headers().get_all("x-label").iter().count(), 2);
    }

    #[test]
    fn test_failure_sentinel() {
        let resp = Response::failed(&Error::timeout(10, "http://example.com"));

        assert!(resp.is_failure());
        assert_eq!(resp.duration_ms(), NOT_MEASURED);
        assert_eq!(resp.status_code(), 0);
        assert_eq!(resp.status(), None);
        assert_eq!(resp.status_class(), StatusClass::Unknown);
        assert_eq!(resp.status_name(), "Unknown");
        assert!(resp.body().is_empty());
        assert!(resp.headers().is_empty());
        assert!(resp.header_map().is_empty());
        assert!(resp.error().unwrap().contains("timed out"));
    }

    #[test]
    fn test_json_body() {
        let resp = Response::from_raw(
            raw(StatusCode::OK, r#"{"a":1}"#),
            Duration::from_millis(1),
        );
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_status_class_boundaries() {
        assert_eq!(StatusClass::from_code(101), StatusClass::Informational);
        assert_eq!(StatusClass::from_code(302), StatusClass::Redirection);
        assert_eq!(StatusClass::from_code(503), StatusClass::ServerError);
        assert_eq!(StatusClass::from_code(0), StatusClass::Unknown);
    }
}
