pub mod destinations;
pub mod trips;

use axum::{extract::rejection::JsonRejection, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::{
    error::{ApiError, AppError, InputError},
    state::AppState,
    store::RecordStore,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/destinations", destinations::router())
        .nest("/trips", trips::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Unwraps a JSON body, reporting undecodable payloads as malformed input.
fn json_body<T>(
    state: &AppState,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| state.reject(InputError::MalformedBody(rejection.body_text())))
}

/// Runs `op` with the store locked and renders any failure.
fn with_store<T>(
    state: &AppState,
    op: impl FnOnce(&mut RecordStore) -> Result<T, AppError>,
) -> Result<T, ApiError> {
    let mut store = state.store().map_err(|err| state.reject(err))?;
    op(&mut store).map_err(|err| state.reject(err))
}
