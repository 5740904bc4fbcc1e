use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Rule violations reported by the record store.
///
/// These carry no user-facing text; see [`crate::messages`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("empty fields")]
    EmptyFields,
    #[error("invalid destination")]
    InvalidDestination,
    #[error("destination not found")]
    DestinationNotFound,
    #[error("destination has linked trips")]
    DestinationHasLinkedTrips,
    #[error("trip not found")]
    TripNotFound,
    #[error("trip already started")]
    TripAlreadyStarted,
}

impl StoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::EmptyFields => "EmptyFields",
            StoreError::InvalidDestination => "InvalidDestination",
            StoreError::DestinationNotFound => "DestinationNotFound",
            StoreError::DestinationHasLinkedTrips => "DestinationHasLinkedTrips",
            StoreError::TripNotFound => "TripNotFound",
            StoreError::TripAlreadyStarted => "TripAlreadyStarted",
        }
    }
}

/// Malformed input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` must contain only letters and spaces")]
    InvalidName(&'static str),
    #[error("field `{0}` must be a YYYY-MM-DD date")]
    InvalidDate(&'static str),
    #[error("invalid id `{0}`")]
    InvalidId(String),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("country is immutable")]
    CountryImmutable,
    #[error("start date is immutable")]
    StartDateImmutable,
    #[error("destination id is immutable")]
    DestinationImmutable,
}

impl InputError {
    pub fn kind(&self) -> &'static str {
        match self {
            InputError::MissingField(_) => "MissingField",
            InputError::InvalidName(_) => "InvalidName",
            InputError::InvalidDate(_) => "InvalidDate",
            InputError::InvalidId(_) => "InvalidId",
            InputError::MalformedBody(_) => "MalformedBody",
            InputError::CountryImmutable => "CountryImmutable",
            InputError::StartDateImmutable => "StartDateImmutable",
            InputError::DestinationImmutable => "DestinationImmutable",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Input(#[from] InputError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Io(_) | AppError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Store(err) => match err {
                StoreError::DestinationNotFound | StoreError::TripNotFound => {
                    StatusCode::NOT_FOUND
                }
                StoreError::DestinationHasLinkedTrips | StoreError::TripAlreadyStarted => {
                    StatusCode::CONFLICT
                }
                StoreError::EmptyFields | StoreError::InvalidDestination => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            AppError::Input(err) => match err {
                InputError::CountryImmutable
                | InputError::StartDateImmutable
                | InputError::DestinationImmutable => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_REQUEST,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Store(err) => err.kind(),
            AppError::Input(err) => err.kind(),
            AppError::Config(_) | AppError::Io(_) | AppError::Other(_) => "Internal",
        }
    }
}

/// An error rendered for the HTTP boundary, with its text already looked up.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.kind,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}
