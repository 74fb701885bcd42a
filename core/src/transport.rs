//! Request execution.
//!
//! A `Transport` turns an `HttpRequest` into an `HttpResponse`. It reports
//! `Transport` errors only when no response was received; status codes are
//! returned as data and interpreted by `rest::Response`.

use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use std::time::Duration;

    use ureq::{Agent, RequestBuilder};

    use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    use super::Transport;

    /// Blocking transport backed by a shared `ureq::Agent`.
    ///
    /// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
    /// come back as data. Cloning shares the underlying connection pool.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: Agent,
    }

    impl UreqTransport {
        pub fn new(timeout: Duration) -> Self {
            let agent = Agent::config_builder()
                .http_status_as_error(false)
                .timeout_global(Some(timeout))
                .build()
                .new_agent();
            Self { agent }
        }

        pub fn from_config(config: &ClientConfig) -> Self {
            Self::new(config.timeout)
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new(DEFAULT_TIMEOUT)
        }
    }

    fn decorate<B>(mut builder: RequestBuilder<B>, req: &HttpRequest) -> RequestBuilder<B> {
        for (key, value) in &req.query {
            builder = builder.query(key, value);
        }
        for (key, value) in &req.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder
    }

    impl Transport for UreqTransport {
        fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
            let path = req.path.as_str();
            let body = req.body.as_deref();

            let result = match (req.method, body) {
                (HttpMethod::Get, _) => decorate(self.agent.get(path), req).call(),
                (HttpMethod::Delete, _) => decorate(self.agent.delete(path), req).call(),
                (HttpMethod::Post, Some(body)) => {
                    decorate(self.agent.post(path), req).send(body.as_bytes())
                }
                (HttpMethod::Post, None) => decorate(self.agent.post(path), req).send_empty(),
                (HttpMethod::Put, Some(body)) => {
                    decorate(self.agent.put(path), req).send(body.as_bytes())
                }
                (HttpMethod::Put, None) => decorate(self.agent.put(path), req).send_empty(),
            };
            let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
                .collect();
            // The response arrived; a body that cannot be read as text is a
            // decoding failure. Unbounded since `list` returns whole collections.
            let body = response
                .body_mut()
                .with_config()
                .limit(u64::MAX)
                .read_to_string()
                .map_err(|e| ApiError::DeserializationError(e.to_string()))?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
