// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! CORS header builder

use std::collections::BTreeMap;

use reqwest::header::HeaderValue;

use crate::error::{Error, Result};

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";

/// A single CORS entry before it is flattened into a header value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsValue {
    Single(String),
    List(Vec<String>),
    Flag(bool),
}

impl CorsValue {
    /// Render as a header value; lists are joined with `", "`
    pub fn to_header_value(&self) -> String {
        match self {
            CorsValue::Single(value) => value.clone(),
            CorsValue::List(values) => values.join(", "),
            CorsValue::Flag(flag) => flag.to_string(),
        }
    }
}

/// Accumulates `Access-Control-*` values for a request
///
/// ```rust
/// use fluent_request::Cors;
///
/// let cors = Cors::new()
///     .allow_origin("*")?
///     .allow_methods(["GET", "POST"])?;
///
/// let headers = cors.headers();
/// assert!(headers.contains(&(
///     "Access-Control-Allow-Methods".to_string(),
///     "GET, POST".to_string()
/// )));
/// # Ok::<(), fluent_request::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cors {
    entries: BTreeMap<&'static str, CorsValue>,
}

impl Cors {
    /// Create an empty CORS configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed origin (`*` or a concrete origin)
    pub fn allow_origin(mut self, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        if origin.is_empty() {
            return Err(Error::invalid_argument("Origin cannot be empty"));
        }
        check_value(&origin, "Origin")?;
        self.entries.insert(ALLOW_ORIGIN, CorsValue::Single(origin));
        Ok(self)
    }

    /// Set the allowed methods
    pub fn allow_methods<I, S>(mut self, methods: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods = non_empty_list(methods, "Methods")?;
        self.entries.insert(ALLOW_METHODS, CorsValue::List(methods));
        Ok(self)
    }

    /// Set the allowed request headers
    pub fn allow_headers<I, S>(mut self, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers = non_empty_list(headers, "Headers")?;
        self.entries.insert(ALLOW_HEADERS, CorsValue::List(headers));
        Ok(self)
    }

    /// Set whether credentials are allowed
    pub fn allow_credentials(mut self, allow: bool) -> Self {
        self.entries.insert(ALLOW_CREDENTIALS, CorsValue::Flag(allow));
        self
    }

    /// Raw entry for a header name
    pub fn get(&self, name: &str) -> Option<&CorsValue> {
        self.entries.get(name)
    }

    /// Check if nothing has been configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into header name/value pairs
    pub fn headers(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_header_value()))
            .collect()
    }
}

fn non_empty_list<I, S>(items: I, what: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    if items.is_empty() || items.iter().any(|item| item.is_empty()) {
        return Err(Error::invalid_argument(format!(
            "{} cannot be empty",
            what
        )));
    }
    for item in &items {
        check_value(item, what)?;
    }
    check_value(&items.join(", "), what)?;
    Ok(items)
}

fn check_value(value: &str, what: &str) -> Result<()> {
    HeaderValue::from_str(value).map(|_| ()).map_err(|_| {
        Error::invalid_argument(format!(
            "{} value is not a valid header value: {:?}",
            what, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_are_joined() {
        let cors = Cors::new()
            .allow_origin("*")
            .unwrap()
            .allow_methods(["GET", "POST"])
            .unwrap();

        let headers = cors.headers();
        assert!(headers.contains(&(ALLOW_ORIGIN.to_string(), "*".to_string())));
        assert!(headers.contains(&(ALLOW_METHODS.to_string(), "GET, POST".to_string())));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_credentials_flag() {
        let cors = Cors::new().allow_credentials(true);
        assert_eq!(cors.get(ALLOW_CREDENTIALS), Some(&CorsValue::Flag(true)));
        assert_eq!(
            cors.headers(),
            vec![(ALLOW_CREDENTIALS.to_string(), "true".to_string())]
        );
    }

    #[test]
    fn test_rejects_empty_values() {
        assert!(Cors::new().allow_origin("").is_err());
        assert!(Cors::new().allow_methods(Vec::<String>::new()).is_err());
        assert!(Cors::new().allow_headers([""]).is_err());
    }

    #[test]
    fn test_rejects_line_breaks() {
        let err = Cors::new()
            .allow_origin("https://a.example\r\nX-Injected: 1")
            .unwrap_err();
        assert!(err.is_validation());

        assert!(Cors::new().allow_methods(["GET", "POST\r\nX-Injected: 1"]).is_err());
        assert!(Cors::new().allow_headers(["X-Token\n"]).is_err());
        assert!(Cors::new().allow_headers(["X-Token", "\u{7f}"]).is_err());

        let cors = Cors::new().allow_headers(["X-Token", "Content-Type"]).unwrap();
        assert_eq!(
            cors.get(ALLOW_HEADERS),
            Some(&CorsValue::List(vec![
                "X-Token".to_string(),
                "Content-Type".to_string()
            ]))
        );
    }

    #[test]
    fn test_last_write_wins() {
        let cors = Cors::new()
            .allow_origin("https://a.example")
            .unwrap()
            .allow_origin("https://b.example")
            .unwrap();
        assert_eq!(
            cors.get(ALLOW_ORIGIN),
            Some(&CorsValue::Single("https://b.example".to_string()))
        );
    }
}
