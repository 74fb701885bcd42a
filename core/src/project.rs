//! Typed client for the `projects` resource.
//!
//! Every operation maps to exactly one HTTP call:
//!
//! | Operation | Request                         |
//! |-----------|---------------------------------|
//! | `create`  | `POST projects`                 |
//! | `update`  | `PUT projects/<metadata.name>`  |
//! | `delete`  | `DELETE projects/<name>`        |
//! | `get`     | `GET projects/<name>`           |
//! | `list`    | `GET projects[?name=<prefix>]`  |
//!
//! Failures from the transport or the server are returned unchanged.

use crate::error::ApiError;
use crate::rest::{Query, RestClient};
use crate::transport::Transport;
use crate::types::Project;

const PROJECT_RESOURCE: &str = "projects";

pub trait ProjectInterface {
    fn create(&self, entity: &Project) -> Result<Project, ApiError>;

    /// Replace the project addressed by `entity.metadata.name`.
    fn update(&self, entity: &Project) -> Result<Project, ApiError>;

    fn delete(&self, name: &str) -> Result<(), ApiError>;

    /// Fetch the project whose `metadata.name` is exactly `name`.
    ///
    /// `name` is never treated as a prefix; use `list` for that.
    fn get(&self, name: &str) -> Result<Project, ApiError>;

    /// Projects whose name starts with `prefix`, in server order.
    ///
    /// An empty `prefix` lists every project. No match yields an empty
    /// vector, not an error.
    fn list(&self, prefix: &str) -> Result<Vec<Project>, ApiError>;
}

/// Filter for `list`: `name` is sent only when non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectQuery<'a> {
    pub name: &'a str,
}

impl Query for ProjectQuery<'_> {
    fn values(&self) -> Vec<(String, String)> {
        let mut values = Vec::new();
        if !self.name.is_empty() {
            values.push(("name".to_string(), self.name.to_string()));
        }
        values
    }
}

/// `ProjectInterface` over a `RestClient` and a `Transport`, both borrowed.
#[derive(Debug)]
pub struct ProjectClient<'a, T: ?Sized> {
    rest: &'a RestClient,
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> ProjectClient<'a, T> {
    pub fn new(rest: &'a RestClient, transport: &'a T) -> Self {
        Self { rest, transport }
    }
}

impl<T: Transport + ?Sized> ProjectInterface for ProjectClient<'_, T> {
    fn create(&self, entity: &Project) -> Result<Project, ApiError> {
        self.rest
            .post()
            .resource(PROJECT_RESOURCE)
            .body(entity)
            .send(self.transport)?
            .object()
    }

    fn update(&self, entity: &Project) -> Result<Project, ApiError> {
        self.rest
            .put()
            .resource(PROJECT_RESOURCE)
            .name(entity.name())
            .body(entity)
            .send(self.transport)?
            .object()
    }

    fn delete(&self, name: &str) -> Result<(), ApiError> {
        self.rest
            .delete()
            .resource(PROJECT_RESOURCE)
            .name(name)
            .send(self.transport)?
            .error()
    }

    fn get(&self, name: &str) -> Result<Project, ApiError> {
        self.rest
            .get()
            .resource(PROJECT_RESOURCE)
            .name(name)
            .send(self.transport)?
            .object()
    }

    fn list(&self, prefix: &str) -> Result<Vec<Project>, ApiError> {
        let result: Option<Vec<Project>> = self
            .rest
            .get()
            .resource(PROJECT_RESOURCE)
            .query(&ProjectQuery { name: prefix })
            .send(self.transport)?
            .object()?;
        Ok(result.unwrap_or_default())
    }
}
