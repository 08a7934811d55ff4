//! HTTP entrypoint.
//!
//! Exposes the agent manager over a small JSON API. Agents are built on
//! first use and cached for the lifetime of the process. No inference is
//! performed; `/invocations` echoes the prompt back once the agent exists.

use crate::cli::ServeArgs;
use af_core::agents::{AgentFactory, AgentManager, FactoryError};
use af_core::config::{load_config, AppConfig};
use af_protocol::{AgentSummary, ErrorResponse, InvocationRequest, InvocationResponse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    manager: Arc<Mutex<AgentManager>>,
}

impl AppState {
    pub fn new(manager: AgentManager) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
        }
    }
}

/// Error body plus status for a failed request.
pub struct ApiError(FactoryError);

impl From<FactoryError> for ApiError {
    fn from(err: FactoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FactoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            FactoryError::UnsupportedType { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            warn!(error = %self.0, "Request failed");
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/agents", get(list_agents))
        .route("/agents/{agent_id}", get(get_agent_info))
        .route("/cache", get(list_cached_agents).delete(clear_cache))
        .route("/cache/{agent_id}", delete(evict_agent))
        .route("/invocations", post(invocations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping() -> Json<Value> {
    Json(json!({ "status": "Healthy" }))
}

async fn list_agents(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let manager = state.manager.lock().await;
    Ok(Json(manager.list_available_agents()?))
}

async fn list_cached_agents(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.manager.lock().await.list_cached_agents())
}

async fn get_agent_info(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
) -> Result<Json<AgentSummary>, ApiError> {
    let manager = state.manager.lock().await;
    Ok(Json(manager.get_agent_info(&agent_id)?))
}

async fn evict_agent(State(state): State<AppState>, Path(agent_id): Path<String>) -> Json<Value> {
    let evicted = state.manager.lock().await.clear_cache(Some(&agent_id));
    Json(json!({ "evicted": evicted }))
}

async fn clear_cache(State(state): State<AppState>) -> Json<Value> {
    let evicted = state.manager.lock().await.clear_cache(None);
    Json(json!({ "evicted": evicted }))
}

async fn invocations(
    State(state): State<AppState>,
    Json(request): Json<InvocationRequest>,
) -> Result<Json<InvocationResponse>, ApiError> {
    let tools = match &request.agent_id {
        Some(agent_id) => {
            let agent = state.manager.lock().await.create_agent(agent_id, Vec::new(), false)?;
            agent.tool_names()
        }
        None => Vec::new(),
    };

    info!(agent_id = request.agent_id.as_deref(), "Processed invocation");

    Ok(Json(InvocationResponse {
        response: format!("Processed message: {}", request.prompt),
        agent_id: request.agent_id,
        tools,
    }))
}

/// Router over the agents visible to an already loaded project.
pub fn app(config: &AppConfig) -> color_eyre::Result<Router> {
    let factory = AgentFactory::new(config.config_source()?);
    Ok(router(AppState::new(AgentManager::with_factory(factory))))
}

/// Load the project at `root` and serve it until the process is stopped.
pub async fn serve(root: &std::path::Path, args: &ServeArgs) -> color_eyre::Result<()> {
    let config = load_config(root)?;
    let host = args.host.clone().unwrap_or_else(|| config.global.server.host.clone());
    let port = args.port.unwrap_or(config.global.server.port);
    let service = app(&config)?;

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, service).await?;
    Ok(())
}
