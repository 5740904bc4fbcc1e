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
    models::{NewTrip, Trip, TripSummary, TripUpdate},
    state::AppState,
    validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(show).put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<TripSummary>>, ApiError> {
    let summaries = with_store(&state, |store| Ok(store.trip_summaries()))?;
    Ok(Json(summaries))
}

#[derive(Deserialize)]
struct TripForm {
    title: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    description: Option<String>,
    destination_id: Option<Value>,
}

impl TripForm {
    fn validate(self) -> Result<NewTrip, InputError> {
        Ok(NewTrip {
            title: validate::required("title", self.title.as_deref())?,
            start_date: validate::date("start_date", self.start_date.as_deref())?,
            end_date: validate::date("end_date", self.end_date.as_deref())?,
            description: validate::required("description", self.description.as_deref())?,
            destination_id: validate::reference("destination_id", self.destination_id.as_ref())?,
        })
    }
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<TripForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Trip>), ApiError> {
    let fields = json_body(&state, payload)?
        .validate()
        .map_err(|err| state.reject(err))?;
    let created = with_store(&state, |store| Ok(store.add_trip(fields)?))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Trip>, ApiError> {
    let id = validate::id(&raw_id).map_err(|err| state.reject(err))?;
    let trip = with_store(&state, |store| Ok(store.trip(id)?.clone()))?;
    Ok(Json(trip))
}

/// `start_date` and `destination_id` may be echoed back unchanged; any other
/// value is refused.
#[derive(Deserialize)]
struct TripUpdateForm {
    title: Option<String>,
    end_date: Option<String>,
    description: Option<String>,
    start_date: Option<String>,
    destination_id: Option<Value>,
}

async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TripUpdateForm>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = validate::id(&raw_id).map_err(|err| state.reject(err))?;
    let form = json_body(&state, payload)?;
    let destination_id =
        validate::body_id(form.destination_id.as_ref()).map_err(|err| state.reject(err))?;
    let end_date = validate::optional(form.end_date.as_deref())
        .map(|value| validate::date("end_date", Some(value.as_str())))
        .transpose()
        .map_err(|err| state.reject(err))?;
    let start_date = validate::optional(form.start_date.as_deref())
        .map(|value| validate::date("start_date", Some(value.as_str())))
        .transpose()
        .map_err(|err| state.reject(err))?;
    let update = TripUpdate {
        title: validate::optional(form.title.as_deref()),
        end_date,
        description: validate::optional(form.description.as_deref()),
    };

    with_store(&state, |store| {
        let existing = store.trip(id)?;
        if start_date
            .as_deref()
            .is_some_and(|date| date != existing.start_date())
        {
            return Err(InputError::StartDateImmutable.into());
        }
        if destination_id.is_some_and(|given| given != existing.destination_id()) {
            return Err(InputError::DestinationImmutable.into());
        }
        store.update_trip(id, update)?;
        Ok(())
    })?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = validate::id(&raw_id).map_err(|err| state.reject(err))?;
    with_store(&state, |store| Ok(store.delete_trip(id)?))?;
    Ok(StatusCode::NO_CONTENT)
}
