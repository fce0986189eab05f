// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for fluent-request
//!
//! Request construction, URL composition, dispatch through a pluggable
//! transport, and response materialization.

mod config;
mod cors;
mod dispatch;
mod query;
mod request;
mod response;
mod transport;
mod types;

use std::time::Duration;

pub use config::{DispatchConfig, ProxyConfig, DEFAULT_MAX_REDIRECTS};
pub use cors::{Cors, CorsValue};
pub use dispatch::Dispatcher;
pub use query::{compose_url, encode_component, encode_form};
pub use request::{delete, get, patch, post, put, Request, RequestBuilder};
pub use response::{Response, StatusClass, NOT_MEASURED};
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportCall};
pub use types::{ContentType, HttpVersion, Method, SimulationAgent};

/// Dispatch deadline applied when none is set
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100_000);

/// Common HTTP headers
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const USER_AGENT: &str = "User-Agent";
}
