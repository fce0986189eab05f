// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # fluent-request - Fluent HTTP Requests
//!
//! Build a request with chained, validated mutators, call `send()`, and get
//! back a uniform [`Response`]. Connection clients, header maps, query
//! string encoding and response materialization are handled for you.
//!
//! ## Features
//!
//! - Fluent builders for GET, POST, PUT, PATCH and DELETE
//! - Validation errors at the call site, never deferred to `send()`
//! - `send()` never fails: network problems come back as a sentinel
//!   response with `duration_ms() == -1`
//! - Browser identity simulation and CORS header helpers
//! - Optional upstream proxy and redirect policy per dispatcher
//! - Pluggable [`Transport`] (reqwest by default)
//!
//! ## Example
//!
//! ```rust,no_run
//! use fluent_request::{get, Cors, SimulationAgent};
//!
//! let response = get("example.com")?
//!     .simulate(SimulationAgent::Chrome)?
//!     .query_param("q", "fish & chips")?
//!     .cors(Cors::new().allow_origin("*")?)
//!     .timeout_ms(5_000)?
//!     .send();
//!
//! if response.is_failure() {
//!     eprintln!("request failed: {:?}", response.error());
//! } else {
//!     println!("{}", response);
//! }
//! # Ok::<(), fluent_request::Error>(())
//! ```

pub mod error;
pub mod http;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// Builders
pub use http::{delete, get, patch, post, put, Request, RequestBuilder};
pub use http::{Cors, CorsValue};

// Dispatch
pub use http::{DispatchConfig, Dispatcher, ProxyConfig};
pub use http::{RawResponse, ReqwestTransport, Transport, TransportCall};

// Responses
pub use http::{Response, StatusClass};

// Tables
pub use http::{ContentType, HttpVersion, Method, SimulationAgent};

/// fluent-request version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
