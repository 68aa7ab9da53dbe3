use crate::catalog::{self, CityEntry};
use crate::error::GenerationError;
use crate::models::{GenerationRequest, GenerationResponse};
use crate::orchestrator::Orchestrator;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
struct AppState {
    orchestrator: Arc<Orchestrator>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct CitiesResponse {
    cities: Vec<CityEntry>,
}

pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/cities", get(cities_handler))
        .route("/api/generate", post(generate_handler))
        .with_state(AppState { orchestrator })
}

pub async fn serve(
    listener: TcpListener,
    orchestrator: Arc<Orchestrator>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("visions listening on http://{}", addr);
    }
    axum::serve(listener, router(orchestrator))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn cities_handler() -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: catalog::entries(),
    })
}

async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, (StatusCode, Json<ErrorBody>)> {
    let Json(request) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;

    match state.orchestrator.orchestrate(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(GenerationError::InvalidInput(err)) => {
            warn!("rejected request: {}", err);
            Err(bad_request(err.to_string()))
        }
        // already logged by the orchestrator
        Err(GenerationError::Aggregation(_)) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "internal error".to_string(),
            }),
        )),
    }
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}
