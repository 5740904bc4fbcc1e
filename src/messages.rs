//! User-facing text for error kinds.
//!
//! The store only reports kinds; a [`MessageTable`] on the application state
//! decides what the user reads.

use crate::error::{AppError, InputError, StoreError};

pub trait MessageTable: Send + Sync {
    fn store_error(&self, err: StoreError) -> String;

    fn input_error(&self, err: &InputError) -> String;

    fn render(&self, err: &AppError) -> String {
        match err {
            AppError::Store(err) => self.store_error(*err),
            AppError::Input(err) => self.input_error(err),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl MessageTable for EnglishMessages {
    fn store_error(&self, err: StoreError) -> String {
        let message = match err {
            StoreError::DestinationNotFound => "Destination not found",
            StoreError::TripNotFound => "Trip not found",
            StoreError::TripAlreadyStarted => "Cannot delete this trip. It has already started!",
            StoreError::DestinationHasLinkedTrips => {
                "Cannot delete this destination. There are trips linked to it!"
            }
            StoreError::EmptyFields => "All fields must be filled",
            StoreError::InvalidDestination => {
                "Invalid Destination ID. Please select a valid destination!"
            }
        };
        message.to_string()
    }

    fn input_error(&self, err: &InputError) -> String {
        match err {
            InputError::MissingField(field) => format!("The {field} field must be filled"),
            InputError::InvalidName(field) => {
                format!("The {field} must be non-empty and contain only letters")
            }
            InputError::InvalidDate(field) => {
                format!("The {field} must be a date in YYYY-MM-DD form")
            }
            InputError::InvalidId(_) => "Enter a valid ID".to_string(),
            InputError::MalformedBody(_) => "Ensure all fields are filled correctly".to_string(),
            InputError::CountryImmutable => "The country cannot be changed".to_string(),
            InputError::StartDateImmutable => "Start date cannot be changed".to_string(),
            InputError::DestinationImmutable => "Destination ID cannot be changed".to_string(),
        }
    }
}
