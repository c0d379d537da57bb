use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::ServiceRequest;
use super::service::{
    AgentDirectory, DispatchService, DispatchServiceError, HistoryStore,
};

/// Router builder exposing HTTP endpoints for ranking and pool inspection.
pub fn dispatch_router<D, H>(service: Arc<DispatchService<D, H>>) -> Router
where
    D: AgentDirectory + 'static,
    H: HistoryStore + 'static,
{
    Router::new()
        .route("/api/v1/dispatch/rank", post(rank_handler::<D, H>))
        .route("/api/v1/dispatch/agents", get(agents_handler::<D, H>))
        .with_state(service)
}

pub(crate) async fn rank_handler<D, H>(
    State(service): State<Arc<DispatchService<D, H>>>,
    axum::Json(request): axum::Json<ServiceRequest>,
) -> Response
where
    D: AgentDirectory + 'static,
    H: HistoryStore + 'static,
{
    match service.rank_request(&request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => unavailable(error),
    }
}

pub(crate) async fn agents_handler<D, H>(
    State(service): State<Arc<DispatchService<D, H>>>,
) -> Response
where
    D: AgentDirectory + 'static,
    H: HistoryStore + 'static,
{
    match service.roster() {
        Ok(agents) => (StatusCode::OK, axum::Json(agents)).into_response(),
        Err(error) => unavailable(error),
    }
}

fn unavailable(error: DispatchServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
}
