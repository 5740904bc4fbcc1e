pub mod destination;
pub mod trip;

pub use destination::Destination;
pub use trip::{NewTrip, Trip, TripSummary, TripUpdate};
