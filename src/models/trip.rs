use std::fmt;

use serde::Serialize;

/// A planned journey. `id`, `destination_id` and `start_date` are fixed at
/// creation; only the store can touch the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    id: i64,
    destination_id: i64,
    title: String,
    start_date: String,
    end_date: String,
    description: String,
}

impl Trip {
    pub(crate) fn new(id: i64, fields: NewTrip) -> Self {
        Self {
            id,
            destination_id: fields.destination_id,
            title: fields.title,
            start_date: fields.start_date,
            end_date: fields.end_date,
            description: fields.description,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn destination_id(&self) -> i64 {
        self.destination_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Applies every present, non-blank field of `update`.
    pub(crate) fn apply(&mut self, update: TripUpdate) {
        if let Some(title) = non_blank(update.title) {
            self.title = title;
        }
        if let Some(end_date) = non_blank(update.end_date) {
            self.end_date = end_date;
        }
        if let Some(description) = non_blank(update.description) {
            self.description = description;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Input for [`crate::store::RecordStore::add_trip`].
#[derive(Debug, Clone, Default)]
pub struct NewTrip {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub destination_id: i64,
}

impl NewTrip {
    /// True when any text field is empty or whitespace only.
    pub(crate) fn has_empty_field(&self) -> bool {
        [
            &self.title,
            &self.start_date,
            &self.end_date,
            &self.description,
        ]
        .iter()
        .any(|value| value.trim().is_empty())
    }
}

/// The mutable subset of a trip.
#[derive(Debug, Clone, Default)]
pub struct TripUpdate {
    pub title: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// A trip joined with its destination's city for listings.
#[derive(Debug, Clone, Serialize)]
pub struct TripSummary {
    #[serde(flatten)]
    pub trip: Trip,
    pub city: Option<String>,
}

impl TripSummary {
    pub fn destination_label(&self) -> &str {
        self.city.as_deref().unwrap_or("Unknown Destination")
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) - {} to {}",
            self.trip.id,
            self.trip.title,
            self.destination_label(),
            self.trip.start_date,
            self.trip.end_date
        )
    }
}
