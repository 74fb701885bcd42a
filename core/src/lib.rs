//! Typed, synchronous client for the `projects` resource of a
//! configuration-management API.
//!
//! # Overview
//! `ProjectClient` translates each typed call into one HTTP request through
//! the generic `RestClient` builder, executes it on a `Transport`, and
//! decodes the response into `Project` values.
//!
//! # Design
//! - Clients are stateless: they hold a base URL and a borrowed transport.
//! - Request building and response decoding are plain data transformations
//!   (`HttpRequest` / `HttpResponse`), so any transport can be plugged in;
//!   `UreqTransport` is provided behind the default `ureq` feature.
//! - Errors from the transport or server are passed through unchanged; there
//!   is no retry, caching or client-side validation beyond what is needed to
//!   build a well-formed path.
//!
//! ```no_run
//! use project_client::{ApiClient, ClientConfig, Project, ProjectInterface};
//!
//! # fn main() -> Result<(), project_client::ApiError> {
//! let client = ApiClient::from_config(&ClientConfig::from_env()?);
//! client.project().create(&Project::new("demo"))?;
//! let matching = client.project().list("de")?;
//! # let _ = matching;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod project;
pub mod rest;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use project::{ProjectClient, ProjectInterface, ProjectQuery};
pub use rest::{Query, RequestBuilder, Response, RestClient};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{Display, Metadata, Project, ProjectSpec, PROJECT_KIND};
