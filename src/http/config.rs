// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Dispatch configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of redirects followed by the transport
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Upstream HTTP proxy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy host name or address
    pub host: String,
    /// Proxy port
    pub port: u16,
}

impl ProxyConfig {
    /// Create a new proxy configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Proxy URL handed to the transport
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Settings applied to every request a dispatcher sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Route every call through this proxy
    pub proxy: Option<ProxyConfig>,
    /// Follow 3xx responses
    pub follow_redirects: bool,
    /// Maximum redirects to follow
    pub max_redirects: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            follow_redirects: true,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl DispatchConfig {
    /// Create a new dispatch config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set proxy
    pub fn proxy(mut self, host: impl Into<String>, port: u16) -> Self {
        self.proxy = Some(ProxyConfig::new(host, port));
        self
    }

    /// Enable/disable redirect following
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Set max redirects
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Redirect budget actually handed to the transport
    pub fn redirect_limit(&self) -> usize {
        if self.follow_redirects {
            self.max_redirects
        } else {
            0
        }
    }
}
