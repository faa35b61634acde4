//! Browser transport on top of `gloo-net` and `gloo-timers`

use gloo_net::http::Request;
use web_sys::{AbortController, AbortSignal};

use super::{ApiError, HttpRequest, HttpResponse, HttpTransport, Method};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

/// Aborts the fetch when dropped unless disarmed first.
///
/// `ApiClient` drops the request future when the timeout wins; without this
/// the browser would keep the connection open.
struct AbortOnDrop {
    controller: Option<AbortController>,
}

impl AbortOnDrop {
    fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    fn disarm(mut self) {
        self.controller = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }
}

impl HttpTransport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let guard = AbortOnDrop::new();
        let signal = guard.signal();

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Accept", "application/json")
        .abort_signal(signal.as_ref());

        let prepared = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let content_type = response.headers().get("content-type");
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("[api] could not read body of {} {}: {}", request.method.as_str(), request.url, e);
                String::new()
            }
        };
        guard.disarm();

        Ok(HttpResponse {
            status,
            status_text,
            content_type,
            body,
        })
    }

    async fn sleep(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}
