// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request types and builder
//!
//! [`RequestBuilder`] accumulates configuration through chained mutators.
//! Every mutator validates its argument at the call site and either hands
//! the builder back or fails with a validation error. [`RequestBuilder::send`]
//! freezes the state into a [`Request`] and dispatches it.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use super::cors::Cors;
use super::dispatch::Dispatcher;
use super::query::{compose_url, encode_form};
use super::response::Response;
use super::types::{ContentType, HttpVersion, Method};
use super::{headers, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};

/// Frozen request, as handed to the dispatcher
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL without query parameters (empty if never set)
    pub url: String,
    /// Request headers, keys as the caller spelled them
    pub headers: BTreeMap<String, String>,
    /// Query parameters, applied to the URL at dispatch time
    pub query_params: BTreeMap<String, Option<String>>,
    /// Request body
    pub body: Option<String>,
    /// Dispatch deadline; zero disables it
    pub timeout: Duration,
    /// Protocol version preference
    pub version: HttpVersion,
    /// CORS configuration last applied to the headers
    pub cors: Option<Cors>,
}

impl Request {
    fn new(method: Method) -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert(
            headers::CONTENT_TYPE.to_string(),
            ContentType::TextPlain.mime_type().to_string(),
        );

        Self {
            method,
            url: String::new(),
            headers: defaults,
            query_params: BTreeMap::new(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
            version: HttpVersion::default(),
            cors: None,
        }
    }

    /// URL with query parameters applied
    pub fn target(&self) -> String {
        compose_url(&self.url, &self.query_params)
    }

    /// Header value, looked up case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Deadline handed to the transport
    pub fn deadline(&self) -> Option<Duration> {
        if self.timeout.is_zero() {
            None
        } else {
            Some(self.timeout)
        }
    }

    /// Headers in wire form
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let (name, value) = parse_header(name, value)?;
            map.insert(name, value);
        }
        Ok(map)
    }

    fn set_header(&mut self, name: String, value: String) {
        // One entry per header name regardless of spelling; last write wins
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value);
    }
}

/// Fluent builder for one HTTP request
///
/// ```rust,no_run
/// use fluent_request::{post, ContentType, SimulationAgent};
///
/// let response = post("httpbin.org/post")?
///     .content_type(ContentType::ApplicationJson)?
///     .simulate(SimulationAgent::Firefox)?
///     .query_param("debug", "1")?
///     .body(r#"{"a":1}"#)?
///     .send();
///
/// if response.is_failure() {
///     eprintln!("request failed: {:?}", response.error());
/// } else {
///     println!("{} in {}ms", response.status_code(), response.duration_ms());
/// }
/// # Ok::<(), fluent_request::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Create a builder without a URL
    pub fn new(method: Method) -> Self {
        Self {
            request: Request::new(method),
        }
    }

    /// Create a builder for a URL
    pub fn with_url(method: Method, url: impl AsRef<str>) -> Result<Self> {
        Self::new(method).url(url)
    }

    /// Request method
    pub fn method(&self) -> Method {
        self.request.method
    }

    /// Set the target URL; `http://` is prefixed when no scheme is given
    pub fn url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();
        if url.is_empty() {
            return Err(Error::invalid_argument("URL cannot be empty"));
        }

        self.request.url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("http://{}", url)
        };
        Ok(self)
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let (name, value) = (name.as_ref(), value.as_ref());
        parse_header(name, value)?;
        self.request.set_header(name.to_string(), value.to_string());
        Ok(self)
    }

    /// Set multiple headers; nothing is applied unless all of them are valid
    pub fn headers<I, K, V>(mut self, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let headers = headers
            .into_iter()
            .map(|(name, value)| -> Result<(String, String)> {
                parse_header(name.as_ref(), value.as_ref())?;
                Ok((name.as_ref().to_string(), value.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (name, value) in headers {
            self.request.set_header(name, value);
        }
        Ok(self)
    }

    /// Set a query parameter
    pub fn query_param(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let key = validate_query_key(key.as_ref())?;
        self.request
            .query_params
            .insert(key, Some(value.as_ref().to_string()));
        Ok(self)
    }

    /// Set multiple query parameters
    pub fn query_params<I, K, V>(mut self, params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params = params
            .into_iter()
            .map(|(key, value)| -> Result<(String, Option<String>)> {
                Ok((
                    validate_query_key(key.as_ref())?,
                    Some(value.as_ref().to_string()),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        self.request.query_params.extend(params);
        Ok(self)
    }

    /// Set a query parameter without a value (sent as `key=`)
    pub fn query_flag(mut self, key: impl AsRef<str>) -> Result<Self> {
        let key = validate_query_key(key.as_ref())?;
        self.request.query_params.insert(key, None);
        Ok(self)
    }

    /// Set the Content-Type from a [`ContentType`] or a raw MIME string
    pub fn content_type(self, content_type: impl AsRef<str>) -> Result<Self> {
        let mime = content_type.as_ref();
        let well_formed = mime
            .split(';')
            .next()
            .and_then(|essence| essence.trim().split_once('/'))
            .map(|(kind, subtype)| !kind.is_empty() && !subtype.is_empty())
            .unwrap_or(false);

        if !well_formed {
            return Err(Error::invalid_argument(format!(
                "Content-Type '{}' is not a type/subtype MIME string",
                mime
            )));
        }
        self.header(headers::CONTENT_TYPE, mime)
    }

    /// Set the dispatch deadline; zero disables it
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = timeout;
        self
    }

    /// Set the dispatch deadline in milliseconds
    pub fn timeout_ms(self, timeout_ms: i64) -> Result<Self> {
        let millis = u64::try_from(timeout_ms)
            .map_err(|_| Error::invalid_argument("Timeout must be >= 0"))?;
        Ok(self.timeout(Duration::from_millis(millis)))
    }

    /// Copy CORS headers into the request; `None` leaves the request untouched
    ///
    /// Headers are copied now, so later changes to the [`Cors`] value do not
    /// reach this request.
    pub fn cors(mut self, cors: impl Into<Option<Cors>>) -> Self {
        let Some(cors) = cors.into() else {
            return self;
        };

        for (name, value) in cors.headers() {
            self.request.set_header(name, value);
        }
        self.request.cors = Some(cors);
        self
    }

    /// Present as a known browser, or pass a literal User-Agent string
    pub fn simulate(self, agent: impl AsRef<str>) -> Result<Self> {
        let agent = agent.as_ref();
        if agent.is_empty() {
            return Err(Error::invalid_argument("Simulation agent cannot be empty"));
        }
        self.header(headers::USER_AGENT, agent)
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<String>) -> Result<Self> {
        self.ensure_body_allowed()?;
        self.request.body = Some(body.into());
        Ok(self)
    }

    /// Set JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self> {
        self.ensure_body_allowed()?;
        self.request.body = Some(serde_json::to_string(data)?);
        self.content_type(ContentType::ApplicationJson)
    }

    /// Set form body
    pub fn form<I, K, V>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.ensure_body_allowed()?;
        self.request.body = Some(encode_form(pairs));
        self.content_type(ContentType::ApplicationFormUrlencoded)
    }

    /// Set the protocol version preference
    pub fn version(mut self, version: HttpVersion) -> Self {
        self.request.version = version;
        self
    }

    /// Snapshot of the current state
    ///
    /// The snapshot always carries a Content-Type; `text/plain` is filled in
    /// if none is set.
    pub fn freeze(&self) -> Request {
        let mut request = self.request.clone();
        if request.header(headers::CONTENT_TYPE).is_none() {
            request.set_header(
                headers::CONTENT_TYPE.to_string(),
                ContentType::TextPlain.mime_type().to_string(),
            );
        }
        request
    }

    /// Send through the process-wide dispatcher and wait for the outcome
    ///
    /// Never fails: transport problems come back as a response with
    /// `duration_ms() == -1`.
    pub fn send(&self) -> Response {
        Dispatcher::shared().dispatch(self.freeze())
    }

    /// Send through a specific dispatcher and wait for the outcome
    pub fn send_with(&self, dispatcher: &Dispatcher) -> Response {
        dispatcher.dispatch(self.freeze())
    }

    /// Send through the process-wide dispatcher without blocking the caller's thread
    pub async fn send_async(&self) -> Response {
        Dispatcher::shared().dispatch_async(self.freeze()).await
    }

    fn ensure_body_allowed(&self) -> Result<()> {
        if self.request.method.allows_body() {
            Ok(())
        } else {
            Err(Error::unsupported(format!(
                "{} requests cannot carry a body",
                self.request.method
            )))
        }
    }
}

/// Create a GET request builder
pub fn get(url: impl AsRef<str>) -> Result<RequestBuilder> {
    RequestBuilder::with_url(Method::Get, url)
}

/// Create a POST request builder
pub fn post(url: impl AsRef<str>) -> Result<RequestBuilder> {
    RequestBuilder::with_url(Method::Post, url)
}

/// Create a PUT request builder
pub fn put(url: impl AsRef<str>) -> Result<RequestBuilder> {
    RequestBuilder::with_url(Method::Put, url)
}

/// Create a PATCH request builder
pub fn patch(url: impl AsRef<str>) -> Result<RequestBuilder> {
    RequestBuilder::with_url(Method::Patch, url)
}

/// Create a DELETE request builder
pub fn delete(url: impl AsRef<str>) -> Result<RequestBuilder> {
    RequestBuilder::with_url(Method::Delete, url)
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    if name.is_empty() {
        return Err(Error::invalid_argument("Header name cannot be empty"));
    }
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::invalid_argument(format!("Invalid header name '{}'", name)))?;
    let header_value = HeaderValue::from_str(value).map_err(|_| {
        Error::invalid_argument(format!("Invalid value for header '{}'", name))
    })?;
    Ok((header_name, header_value))
}

fn validate_query_key(key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(Error::invalid_argument("Query parameter key cannot be empty"));
    }
    Ok(key.to_string())
}
