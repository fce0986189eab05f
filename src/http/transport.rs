// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport abstraction and the reqwest-backed default
//!
//! A [`Transport`] performs exactly one network round trip. Everything
//! above it (URL composition, timing, failure folding) lives in the
//! dispatcher, so any transport only has to honour this narrow contract.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use lazy_static::lazy_static;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use url::Url;

use super::config::ProxyConfig;
use super::types::{HttpVersion, Method};
use crate::error::{Error, Result};

lazy_static! {
    /// Clients shared by every dispatcher, keyed by route and redirect policy.
    /// Each client owns its connection pool; entries are built on first use.
    static ref CLIENTS: DashMap<ClientKey, Client> = DashMap::new();
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ClientKey {
    proxy: Option<ProxyConfig>,
    max_redirects: usize,
}

/// One outbound call, fully resolved
#[derive(Debug, Clone)]
pub struct TransportCall {
    /// Request method
    pub method: Method,
    /// Target URL with query parameters already applied
    pub url: Url,
    /// Headers copied verbatim from the request
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<String>,
    /// Per-call deadline
    pub timeout: Option<Duration>,
    /// Protocol version preference
    pub version: HttpVersion,
    /// Upstream proxy
    pub proxy: Option<ProxyConfig>,
    /// Redirects the transport may follow (0 = none)
    pub max_redirects: usize,
}

/// What came back from the wire
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
    /// Final URL (after redirects)
    pub url: Url,
    /// Negotiated protocol version
    pub version: Option<HttpVersion>,
}

/// Performs the actual network call
///
/// Implementations must be safe to share across threads; the dispatcher
/// calls them concurrently from independent `send()` invocations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one round trip
    async fn execute(&self, call: TransportCall) -> Result<RawResponse>;

    /// Name used in log output
    fn name(&self) -> &str {
        "transport"
    }
}

/// Default transport backed by a pooled [`reqwest::Client`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    /// Create a new reqwest transport
    pub fn new() -> Self {
        Self
    }

    /// Shared client for a route, built once per proxy/redirect combination
    fn client_for(&self, proxy: Option<&ProxyConfig>, max_redirects: usize) -> Result<Client> {
        let key = ClientKey {
            proxy: proxy.cloned(),
            max_redirects,
        };

        if let Some(client) = CLIENTS.get(&key) {
            return Ok(client.value().clone());
        }

        let entry = CLIENTS
            .entry(key)
            .or_try_insert_with(|| build_client(proxy, max_redirects))?;
        Ok(entry.value().clone())
    }
}

fn build_client(proxy: Option<&ProxyConfig>, max_redirects: usize) -> Result<Client> {
    let redirect = if max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(max_redirects)
    };

    let mut builder = Client::builder().redirect(redirect);

    if let Some(proxy) = proxy {
        builder = builder.proxy(
            reqwest::Proxy::all(proxy.url())
                .map_err(|e| Error::config(format!("Invalid proxy {}: {}", proxy, e)))?,
        );
    }

    tracing::debug!(
        proxy = ?proxy.map(ToString::to_string),
        max_redirects,
        "Building shared HTTP client"
    );

    builder
        .build()
        .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, call: TransportCall) -> Result<RawResponse> {
        let client = self.client_for(call.proxy.as_ref(), call.max_redirects)?;

        let pinned = call.version.pinned();
        let mut builder = client
            .request(call.method.into(), call.url)
            .headers(call.headers);

        if let Some(version) = pinned {
            builder = builder.version(version);
        }

        // Body-carrying verbs always send a payload, even an empty one
        match call.body {
            Some(body) => builder = builder.body(body),
            None if call.method.requires_body() => builder = builder.body(""),
            None => {}
        }

        if let Some(timeout) = call.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let version = HttpVersion::from_reqwest(response.version());

        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
            url,
            version,
        })
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}
