// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request dispatch
//!
//! Every call runs on one process-wide tokio runtime, created lazily on the
//! first dispatch and shared by all dispatchers. The connection pools of the
//! default transport live on that runtime too, so pooled connections are
//! never stranded on a runtime that has since shut down.
//!
//! `dispatch` hands the call to the runtime and blocks until the outcome
//! arrives; `dispatch_async` awaits the same task. Either way the caller
//! observes exactly one suspension point, and the call resolves only after
//! the round trip completes or its deadline passes.

use std::fmt;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use lazy_static::lazy_static;
use tokio::runtime::Runtime;
use url::Url;

use super::config::DispatchConfig;
use super::request::Request;
use super::response::Response;
use super::transport::{ReqwestTransport, Transport, TransportCall};
use crate::error::{Error, Result};

lazy_static! {
    static ref RUNTIME: Option<Runtime> = build_runtime();
    static ref SHARED: Dispatcher = Dispatcher::new(DispatchConfig::default());
}

fn build_runtime() -> Option<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .thread_name("fluent-request-dispatch")
        .enable_all()
        .build()
        .map_err(|e| tracing::error!(error = %e, "Failed to start dispatch runtime"))
        .ok()
}

/// Sends frozen requests through a [`Transport`]
#[derive(Clone)]
pub struct Dispatcher {
    config: DispatchConfig,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    /// Create a dispatcher backed by the reqwest transport
    pub fn new(config: DispatchConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a dispatcher backed by a custom transport
    pub fn with_transport(config: DispatchConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Process-wide dispatcher with default configuration
    pub fn shared() -> &'static Dispatcher {
        &SHARED
    }

    /// Get dispatcher configuration
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Send a request and block until it resolves
    pub fn dispatch(&self, request: Request) -> Response {
        let Some(runtime) = RUNTIME.as_ref() else {
            return Response::failed(&Error::Runtime("dispatch runtime unavailable".into()));
        };

        let (tx, rx) = mpsc::channel();
        let dispatcher = self.clone();
        runtime.spawn(async move {
            // Receiver only disappears if the caller thread is gone
            let _ = tx.send(dispatcher.execute(request).await);
        });

        rx.recv().unwrap_or_else(|_| {
            let error = Error::Runtime("dispatch task aborted".into());
            tracing::error!(error = %error, "Request failed");
            Response::failed(&error)
        })
    }

    /// Send a request from async code
    pub async fn dispatch_async(&self, request: Request) -> Response {
        let Some(runtime) = RUNTIME.as_ref() else {
            return Response::failed(&Error::Runtime("dispatch runtime unavailable".into()));
        };

        let dispatcher = self.clone();
        match runtime
            .spawn(async move { dispatcher.execute(request).await })
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let error = Error::Runtime(format!("dispatch task aborted: {}", e));
                tracing::error!(error = %error, "Request failed");
                Response::failed(&error)
            }
        }
    }

    /// Perform one round trip on the current runtime and fold the outcome
    /// into a [`Response`]
    pub async fn execute(&self, request: Request) -> Response {
        let call = match self.prepare(&request) {
            Ok(call) => call,
            Err(error) => {
                tracing::error!(
                    method = %request.method,
                    url = %request.url,
                    error = %error,
                    "Error creating request"
                );
                return Response::failed(&error);
            }
        };

        let method = call.method;
        let url = call.url.to_string();
        let deadline = call.timeout;

        tracing::debug!(
            %method,
            %url,
            transport = self.transport.name(),
            timeout_ms = deadline.map(|d| d.as_millis() as u64),
            "Dispatching request"
        );

        let start = Instant::now();
        let outcome = match deadline {
            Some(timeout) => tokio::time::timeout(timeout, self.transport.execute(call))
                .await
                .unwrap_or_else(|_| Err(Error::timeout(timeout.as_millis() as u64, &url))),
            None => self.transport.execute(call).await,
        };
        let elapsed = start.elapsed();

        match outcome {
            Ok(raw) => {
                let response = Response::from_raw(raw, elapsed);
                tracing::debug!(
                    %method,
                    %url,
                    status = response.status_code(),
                    duration_ms = response.duration_ms(),
                    "Request completed"
                );
                response
            }
            Err(error) => {
                if error.is_timeout() {
                    tracing::warn!(%method, %url, elapsed_ms = elapsed.as_millis() as u64, "Request timed out");
                }
                tracing::error!(%method, %url, error = %error, "Error during request");
                Response::failed(&error)
            }
        }
    }

    /// Resolve a frozen request into a transport call
    fn prepare(&self, request: &Request) -> Result<TransportCall> {
        let url = Url::parse(&request.target())?;
        let body = if request.method.allows_body() {
            request.body.clone()
        } else {
            None
        };

        Ok(TransportCall {
            method: request.method,
            url,
            headers: request.header_map()?,
            body,
            timeout: request.deadline(),
            version: request.version,
            proxy: self.config.proxy.clone(),
            max_redirects: self.config.redirect_limit(),
        })
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("transport", &self.transport.name())
            .finish()
    }
}
