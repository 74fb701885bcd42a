//! Generic REST request builder and response decoder.
//!
//! # Design
//! `RestClient` holds only a `base_url`. Each call starts a `RequestBuilder`
//! for one verb, which collects the resource segment, an optional instance
//! name, query parameters and a JSON body, then either renders an
//! `HttpRequest` (`build`) or hands it to a `Transport` (`send`). The
//! returned `Response` interprets the status code and decodes the body.
//!
//! Paths are `<base_url>/<resource>[/<name>]`. The name is percent-encoded
//! as a single segment, so `?`, `#` or `/` inside it can never reach another
//! resource. An explicitly empty name is refused at build time since it
//! would silently address the collection instead of an instance.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

const JSON: &str = "application/json";

/// Filter object rendered into query parameters.
///
/// Implementations return ordered key/value pairs and omit absent fields
/// entirely rather than sending empty values.
pub trait Query {
    fn values(&self) -> Vec<(String, String)>;
}

/// Stateless entry point for building requests against one API root.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self) -> RequestBuilder<'_> {
        self.verb(HttpMethod::Get)
    }

    pub fn post(&self) -> RequestBuilder<'_> {
        self.verb(HttpMethod::Post)
    }

    pub fn put(&self) -> RequestBuilder<'_> {
        self.verb(HttpMethod::Put)
    }

    pub fn delete(&self) -> RequestBuilder<'_> {
        self.verb(HttpMethod::Delete)
    }

    fn verb(&self, method: HttpMethod) -> RequestBuilder<'_> {
        RequestBuilder {
            client: self,
            method,
            resource: String::new(),
            name: None,
            query: Vec::new(),
            body: None,
        }
    }
}

/// A single request under construction.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    client: &'a RestClient,
    method: HttpMethod,
    resource: String,
    name: Option<String>,
    query: Vec<(String, String)>,
    body: Option<Result<String, ApiError>>,
}

impl RequestBuilder<'_> {
    pub fn resource(mut self, resource: &str) -> Self {
        self.resource = resource.trim_matches('/').to_string();
        self
    }

    /// Address a single instance of the resource.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Serialize `entity` as the JSON body. Serialization failures surface
    /// from `build`.
    pub fn body<T: Serialize + ?Sized>(mut self, entity: &T) -> Self {
        self.body = Some(
            serde_json::to_string(entity).map_err(|e| ApiError::SerializationError(e.to_string())),
        );
        self
    }

    pub fn query<Q: Query + ?Sized>(mut self, query: &Q) -> Self {
        self.query.extend(query.values());
        self
    }

    pub fn build(self) -> Result<HttpRequest, ApiError> {
        if self.resource.is_empty() {
            return Err(ApiError::InvalidRequest("resource must not be empty".to_string()));
        }

        let mut path = format!("{}/{}", self.client.base_url, self.resource);
        if let Some(name) = &self.name {
            if name.is_empty() {
                return Err(ApiError::InvalidRequest(format!(
                    "{} name must not be empty",
                    self.resource
                )));
            }
            path.push('/');
            path.push_str(&urlencoding::encode(name));
        }

        let mut headers = vec![("accept".to_string(), JSON.to_string())];
        let body = self.body.transpose()?;
        if body.is_some() {
            headers.push(("content-type".to_string(), JSON.to_string()));
        }

        Ok(HttpRequest {
            method: self.method,
            path,
            query: self.query,
            headers,
            body,
        })
    }

    /// Build the request and execute it on `transport`.
    pub fn send<T: Transport + ?Sized>(self, transport: &T) -> Result<Response, ApiError> {
        let request = self.build()?;
        debug!(method = %request.method, path = %request.path, query = ?request.query, "sending request");
        let response = transport.execute(&request)?;
        debug!(method = %request.method, path = %request.path, status = response.status, "received response");
        Ok(Response { inner: response })
    }
}

/// Outcome of an executed request, not yet interpreted.
#[derive(Debug, Clone)]
pub struct Response {
    inner: HttpResponse,
}

impl Response {
    pub fn new(inner: HttpResponse) -> Self {
        Self { inner }
    }

    /// Check the status and decode the body into `T`.
    ///
    /// An empty body decodes as JSON `null`, so `Option<T>` destinations
    /// accept bodiless success responses.
    pub fn object<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        check_status(&self.inner)?;
        let body = self.inner.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Check the status and discard the body.
    pub fn error(self) -> Result<(), ApiError> {
        check_status(&self.inner)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
