//! HTTP client wrapper around the inventory REST API.
//!
//! Every request goes through [`ApiClient::send`], which builds the URL from
//! the configured base and prefix, races the call against the request timeout
//! and classifies the outcome:
//!
//! - transport failures and timeouts are network errors ([`ApiError::is_network`]);
//! - non-2xx responses carry status and whatever body the server returned;
//! - 2xx responses yield the parsed body, `None` for 204 or an empty body.
//!
//! Nothing is retried automatically. Callers that have alternative endpoints
//! use [`ApiClient::get_first_reachable`].

mod error;
mod gloo_transport;

#[cfg(test)]
pub(crate) mod fake_backend;

pub use error::{form_error_message, load_error_message, ApiError, ResponseBody, SubmitError};
pub use gloo_transport::GlooTransport;

use futures::future::{self, Either};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::shared::api_utils::build_url;
use crate::shared::config::ApiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved request handed to a transport; `body` is JSON text
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and provides the timer used for timeouts.
///
/// The browser implementation is [`GlooTransport`]; tests substitute an
/// in-memory backend.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Perform the request. Only transport-level failures are errors here;
    /// HTTP error statuses come back as a normal response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;

    async fn sleep(&self, millis: u32);
}

#[derive(Clone)]
pub struct ApiClient<T = GlooTransport> {
    transport: T,
    config: Arc<ApiConfig>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        build_url(&self.config.resolved_base(), &self.config.prefix, path)
    }

    /// Issue one request and classify the result
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Option<ResponseBody>, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            body,
        };
        let timeout_ms = self.config.timeout_ms;

        let call = self.transport.execute(request);
        let timer = self.transport.sleep(timeout_ms);
        futures::pin_mut!(call);
        futures::pin_mut!(timer);

        // Dropping the losing `call` future aborts the underlying fetch.
        let response = match future::select(call, timer).await {
            Either::Left((result, _)) => result?,
            Either::Right(((), _)) => {
                log::warn!("[api] {} {} timed out after {} ms", method.as_str(), path, timeout_ms);
                return Err(ApiError::Timeout {
                    after_ms: timeout_ms,
                });
            }
        };

        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text.clone(),
                body: ResponseBody::parse(&response).unwrap_or(None),
            });
        }

        ResponseBody::parse(&response).map_err(ApiError::Decode)
    }

    /// GET and deserialize; `Ok(None)` when the server sent no body
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<Option<R>, ApiError> {
        match self.send(Method::Get, path, None).await? {
            Some(body) => body.into_typed().map(Some),
            None => Ok(None),
        }
    }

    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<ResponseBody>, ApiError> {
        self.send(Method::Post, path, Some(encode_body(body)?)).await
    }

    pub async fn patch<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<ResponseBody>, ApiError> {
        self.send(Method::Patch, path, Some(encode_body(body)?)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Option<ResponseBody>, ApiError> {
        self.send(Method::Delete, path, None).await
    }

    /// GET from an ordered list of candidate endpoints.
    ///
    /// Stops at the first candidate that produced anything other than a
    /// network error, success or HTTP error alike. When every candidate is
    /// unreachable the last network error is returned.
    pub async fn get_first_reachable<R: DeserializeOwned>(
        &self,
        candidates: &[&str],
    ) -> Result<Option<R>, ApiError> {
        let mut last_error = None;
        for path in candidates {
            match self.get::<R>(path).await {
                Err(e) if e.is_network() => {
                    log::warn!("[api] {} unreachable, trying next candidate: {}", path, e);
                    last_error = Some(e);
                }
                other => return other,
            }
        }
        Err(last_error.unwrap_or_else(|| ApiError::Network("no endpoint candidates".into())))
    }
}

/// Browser client provided at the application root
pub fn use_api() -> ApiClient {
    leptos::prelude::use_context::<ApiClient>().expect("ApiClient not provided in context")
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))
}
