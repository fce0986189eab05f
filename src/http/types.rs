// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Method, content type, user agent and version tables

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP verb of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Wire name of the verb
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a request with this verb may carry a body
    pub fn allows_body(&self) -> bool {
        !matches!(self, Method::Get)
    }

    /// Whether the transport sends an empty payload when no body was set
    pub fn requires_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Well-known MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    TextPlain,
    ApplicationJson,
    ApplicationXml,
    TextHtml,
    ApplicationFormUrlencoded,
    MultipartFormData,
    ApplicationJavascript,
    ApplicationPdf,
    ImageJpeg,
    ImagePng,
    ApplicationOctetStream,
}

impl ContentType {
    /// MIME string sent on the wire
    pub fn mime_type(&self) -> &'static str {
        match self {
            ContentType::TextPlain => "text/plain",
            ContentType::ApplicationJson => "application/json",
            ContentType::ApplicationXml => "application/xml",
            ContentType::TextHtml => "text/html",
            ContentType::ApplicationFormUrlencoded => "application/x-www-form-urlencoded",
            ContentType::MultipartFormData => "multipart/form-data",
            ContentType::ApplicationJavascript => "application/javascript",
            ContentType::ApplicationPdf => "application/pdf",
            ContentType::ImageJpeg => "image/jpeg",
            ContentType::ImagePng => "image/png",
            ContentType::ApplicationOctetStream => "application/octet-stream",
        }
    }
}

impl AsRef<str> for ContentType {
    fn as_ref(&self) -> &str {
        self.mime_type()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Browser identities a request can pretend to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulationAgent {
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl SimulationAgent {
    /// User-Agent header value for this identity
    pub fn user_agent(&self) -> &'static str {
        match self {
            SimulationAgent::Chrome => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36"
            }
            SimulationAgent::Firefox => {
                "Mozilla/5.0 (Windows NT 10.0; WOW64; rv:54.0) Gecko/20100101 Firefox/54.0"
            }
            SimulationAgent::Safari => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.4 Safari/605.1.15"
            }
            SimulationAgent::Edge => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36 Edg/136.0.0.0"
            }
        }
    }
}

impl AsRef<str> for SimulationAgent {
    fn as_ref(&self) -> &str {
        self.user_agent()
    }
}

/// HTTP protocol version preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HttpVersion {
    #[default]
    Http11,
    Http2,
}

impl HttpVersion {
    /// Map a negotiated reqwest version back onto the table
    pub fn from_reqwest(version: reqwest::Version) -> Option<Self> {
        if version == reqwest::Version::HTTP_11 {
            Some(HttpVersion::Http11)
        } else if version == reqwest::Version::HTTP_2 {
            Some(HttpVersion::Http2)
        } else {
            None
        }
    }

    /// Version to pin on an outbound request, if any
    ///
    /// HTTP/1.1 is always pinned. HTTP/2 is left to negotiation: ALPN picks
    /// it on `https` targets that offer it, and everything else stays on
    /// HTTP/1.1 instead of failing the call.
    pub fn pinned(&self) -> Option<reqwest::Version> {
        match self {
            HttpVersion::Http11 => Some(reqwest::Version::HTTP_11),
            HttpVersion::Http2 => None,
        }
    }
}

impl From<HttpVersion> for reqwest::Version {
    fn from(version: HttpVersion) -> Self {
        match version {
            HttpVersion::Http11 => reqwest::Version::HTTP_11,
            HttpVersion::Http2 => reqwest::Version::HTTP_2,
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVersion::Http11 => f.write_str("HTTP/1.1"),
            HttpVersion::Http2 => f.write_str("HTTP/2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_get_forbids_body() {
        assert!(!Method::Get.allows_body());
        for method in [Method::Post, Method::Put, Method::Patch, Method::Delete] {
            assert!(method.allows_body(), "{} should carry a body", method);
        }
        assert!(!Method::Delete.requires_body());
        assert!(Method::Patch.requires_body());
    }

    #[test]
    fn test_method_maps_to_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Patch), reqwest::Method::PATCH);
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_content_type_strings() {
        assert_eq!(ContentType::TextPlain.mime_type(), "text/plain");
        assert_eq!(
            ContentType::ApplicationFormUrlencoded.as_ref(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn test_edge_agent_extends_chrome() {
        let chrome = SimulationAgent::Chrome.user_agent();
        let edge = SimulationAgent::Edge.user_agent();
        assert!(edge.starts_with(chrome));
        assert!(edge.ends_with("Edg/136.0.0.0"));
    }

    #[test]
    fn test_version_roundtrip_through_reqwest() {
        let version: reqwest::Version = HttpVersion::Http2.into();
        assert_eq!(HttpVersion::from_reqwest(version), Some(HttpVersion::Http2));
        assert_eq!(HttpVersion::from_reqwest(reqwest::Version::HTTP_10), None);
    }

    #[test]
    fn test_http2_is_never_pinned() {
        assert_eq!(HttpVersion::Http2.pinned(), None);
        assert_eq!(HttpVersion::Http11.pinned(), Some(reqwest::Version::HTTP_11));
    }
}
