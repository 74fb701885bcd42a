use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub kind: String,
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(status = status.as_u16(), %message, "rejecting request");
        Self { status, message }
    }

    fn not_found(name: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("project {name:?} not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { message: self.message })).into_response()
    }
}

pub type Db = Arc<RwLock<BTreeMap<String, Project>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{name}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_projects(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<Vec<Project>> {
    let prefix = query.name.unwrap_or_default();
    let projects = db.read().await;
    Json(
        projects
            .values()
            .filter(|p| p.metadata.name.starts_with(&prefix))
            .cloned()
            .collect(),
    )
}

async fn create_project(
    State(db): State<Db>,
    Json(mut input): Json<Project>,
) -> Result<Json<Project>, ApiError> {
    let name = input.metadata.name.clone();
    if name.is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "metadata.name must not be empty"));
    }

    let mut projects = db.write().await;
    if projects.contains_key(&name) {
        return Err(ApiError::new(
            StatusCode::CONFLICT,
            format!("project {name:?} already exists"),
        ));
    }

    let now = Utc::now();
    input.kind = "Project".to_string();
    input.metadata.created_at = Some(now);
    input.metadata.updated_at = Some(now);
    input.metadata.version = 0;
    projects.insert(name.clone(), input.clone());
    info!(%name, "project created");
    Ok(Json(input))
}

async fn get_project(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let projects = db.read().await;
    projects
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(&name))
}

async fn update_project(
    State(db): State<Db>,
    Path(name): Path<String>,
    Json(mut input): Json<Project>,
) -> Result<Json<Project>, ApiError> {
    if input.metadata.name != name {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            format!(
                "metadata.name {:?} does not match path name {name:?}",
                input.metadata.name
            ),
        ));
    }

    let mut projects = db.write().await;
    let existing = projects.get(&name).ok_or_else(|| ApiError::not_found(&name))?;

    input.kind = "Project".to_string();
    input.metadata.created_at = existing.metadata.created_at;
    input.metadata.updated_at = Some(Utc::now());
    input.metadata.version = existing.metadata.version + 1;
    projects.insert(name.clone(), input.clone());
    info!(%name, version = input.metadata.version, "project updated");
    Ok(Json(input))
}

async fn delete_project(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut projects = db.write().await;
    projects
        .remove(&name)
        .ok_or_else(|| ApiError::not_found(&name))?;
    info!(%name, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}
