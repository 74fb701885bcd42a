//! Domain DTOs for the project API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Only
//! `metadata.name` matters to the client. Everything else the server sends
//! is carried through untouched: known fields are typed, unknown ones land in
//! the flattened `extra` maps so an update never drops attributes this crate
//! does not know about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire value of `Project::kind`.
pub const PROJECT_KIND: &str = "Project";

fn project_kind() -> String {
    PROJECT_KIND.to_string()
}

/// A single project returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default = "project_kind")]
    pub kind: String,
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: ProjectSpec,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: project_kind(),
            metadata: Metadata {
                name: name.into(),
                ..Metadata::default()
            },
            spec: ProjectSpec::default(),
            extra: Map::new(),
        }
    }

    pub fn with_display(mut self, name: impl Into<String>, description: Option<String>) -> Self {
        self.spec.display = Some(Display {
            name: name.into(),
            description,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

/// Identity and server-managed bookkeeping of a project.
///
/// `created_at`, `updated_at` and `version` are assigned by the server and
/// omitted from request bodies when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Human-facing label of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Display {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
