use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use super::{json_body, with_store};
use crate::{
    error::{ApiError, InputError},
    models::Destination,
    state::AppState,
    validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(show).put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Destination>>, ApiError> {
    let destinations = with_store(&state, |store| Ok(store.destinations().to_vec()))?;
    Ok(Json(destinations))
}

#[derive(Deserialize)]
struct DestinationForm {
    id: Option<Value>,
    city: Option<String>,
    country: Option<String>,
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<DestinationForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Destination>), ApiError> {
    let form = json_body(&state, payload)?;
    let id = validate::body_id(form.id.as_ref()).map_err(|err| state.reject(err))?;
    let city = validate::name("city", form.city.as_deref()).map_err(|err| state.reject(err))?;
    let country =
        validate::name("country", form.country.as_deref()).map_err(|err| state.reject(err))?;

    let created = with_store(&state, |store| Ok(store.add_destination(id, city, country)?))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Destination>, ApiError> {
    let id = validate::id(&raw_id).map_err(|err| state.reject(err))?;
    let destination = with_store(&state, |store| Ok(store.destination(id)?.clone()))?;
    Ok(Json(destination))
}

#[derive(Deserialize)]
struct DestinationUpdateForm {
    city: Option<String>,
    /// Accepted only so a changed country can be refused.
    country: Option<String>,
}

async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<DestinationUpdateForm>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = validate::id(&raw_id).map_err(|err| state.reject(err))?;
    let form = json_body(&state, payload)?;
    let city = validate::name("city", form.city.as_deref()).map_err(|err| state.reject(err))?;
    let country = validate::optional(form.country.as_deref());

    with_store(&state, |store| {
        let existing = store.destination(id)?;
        if country
            .as_deref()
            .is_some_and(|country| country != existing.country())
        {
            return Err(InputError::CountryImmutable.into());
        }
        store.update_destination(id, city)?;
        Ok(())
    })?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = validate::id(&raw_id).map_err(|err| state.reject(err))?;
    with_store(&state, |store| Ok(store.delete_destination(id)?))?;
    Ok(StatusCode::NO_CONTENT)
}
