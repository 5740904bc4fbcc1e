//! In-memory record store for destinations and trips.
//!
//! The store owns both collections and is the only place records are created,
//! changed or removed. Every operation either applies completely or leaves the
//! store untouched.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    clock::{Clock, SystemClock},
    error::StoreError,
    models::{Destination, NewTrip, Trip, TripSummary, TripUpdate},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug)]
pub struct RecordStore {
    destinations: Vec<Destination>,
    trips: Vec<Trip>,
    clock: Arc<dyn Clock>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl RecordStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            destinations: Vec::new(),
            trips: Vec::new(),
            clock,
        }
    }

    /// Adds a destination, generating the id when none is given.
    ///
    /// Whitespace-only city or country counts as empty. When the largest
    /// stored id leaves no room for a generated one the add fails with
    /// `InvalidDestination`.
    pub fn add_destination(
        &mut self,
        id: Option<i64>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Destination, StoreError> {
        let city = city.into();
        let country = country.into();
        if city.trim().is_empty() || country.trim().is_empty() {
            return Err(StoreError::EmptyFields);
        }

        let id = match id {
            Some(id) if self.destination_index(id).is_some() => {
                return Err(StoreError::InvalidDestination);
            }
            Some(id) => id,
            None => next_id(self.destinations.iter().map(Destination::id))
                .ok_or(StoreError::InvalidDestination)?,
        };

        let destination = Destination::new(id, city, country);
        self.destinations.push(destination.clone());
        info!(destination_id = id, "destination added");
        Ok(destination)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn destination(&self, id: i64) -> Result<&Destination, StoreError> {
        self.destinations
            .iter()
            .find(|d| d.id() == id)
            .ok_or(StoreError::DestinationNotFound)
    }

    /// Renames a destination. The country is fixed at creation.
    pub fn update_destination(
        &mut self,
        id: i64,
        new_city: impl Into<String>,
    ) -> Result<(), StoreError> {
        let new_city = new_city.into();
        if new_city.trim().is_empty() {
            return Err(StoreError::EmptyFields);
        }
        let index = self
            .destination_index(id)
            .ok_or(StoreError::DestinationNotFound)?;
        self.destinations[index].set_city(new_city);
        debug!(destination_id = id, "destination city updated");
        Ok(())
    }

    pub fn delete_destination(&mut self, id: i64) -> Result<(), StoreError> {
        if self.trips.iter().any(|t| t.destination_id() == id) {
            return Err(StoreError::DestinationHasLinkedTrips);
        }
        let index = self
            .destination_index(id)
            .ok_or(StoreError::DestinationNotFound)?;
        self.destinations.remove(index);
        info!(destination_id = id, "destination deleted");
        Ok(())
    }

    /// Dates are stored as given; callers are expected to have checked the
    /// `YYYY-MM-DD` format already. Whitespace-only fields count as empty.
    pub fn add_trip(&mut self, fields: NewTrip) -> Result<Trip, StoreError> {
        if fields.has_empty_field() {
            return Err(StoreError::EmptyFields);
        }
        if self.destination_index(fields.destination_id).is_none() {
            return Err(StoreError::InvalidDestination);
        }

        // trip ids are only ever generated, one per add, so this cannot run out
        let id =
            next_id(self.trips.iter().map(Trip::id)).ok_or(StoreError::InvalidDestination)?;
        let trip = Trip::new(id, fields);
        self.trips.push(trip.clone());
        info!(
            trip_id = id,
            destination_id = trip.destination_id(),
            "trip added"
        );
        Ok(trip)
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip(&self, id: i64) -> Result<&Trip, StoreError> {
        self.trips
            .iter()
            .find(|t| t.id() == id)
            .ok_or(StoreError::TripNotFound)
    }

    /// Every trip in insertion order, paired with its destination's city.
    pub fn trip_summaries(&self) -> Vec<TripSummary> {
        self.trips
            .iter()
            .map(|trip| TripSummary {
                trip: trip.clone(),
                city: self
                    .destination(trip.destination_id())
                    .ok()
                    .map(|d| d.city().to_string()),
            })
            .collect()
    }

    pub fn update_trip(&mut self, id: i64, update: TripUpdate) -> Result<(), StoreError> {
        let index = self.trip_index(id).ok_or(StoreError::TripNotFound)?;
        self.trips[index].apply(update);
        debug!(trip_id = id, "trip updated");
        Ok(())
    }

    /// Removes a trip that has not started yet. A trip starting today counts
    /// as started.
    pub fn delete_trip(&mut self, id: i64) -> Result<(), StoreError> {
        let index = self.trip_index(id).ok_or(StoreError::TripNotFound)?;
        // zero-padded YYYY-MM-DD orders lexicographically
        let today = self.clock.today().format(DATE_FORMAT).to_string();
        if today.as_str() >= self.trips[index].start_date() {
            return Err(StoreError::TripAlreadyStarted);
        }
        self.trips.remove(index);
        info!(trip_id = id, "trip deleted");
        Ok(())
    }

    fn destination_index(&self, id: i64) -> Option<usize> {
        self.destinations.iter().position(|d| d.id() == id)
    }

    fn trip_index(&self, id: i64) -> Option<usize> {
        self.trips.iter().position(|t| t.id() == id)
    }
}

/// One past the largest id, or `None` if that would overflow.
fn next_id(ids: impl Iterator<Item = i64>) -> Option<i64> {
    ids.max().unwrap_or(0).checked_add(1)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;

    fn store() -> RecordStore {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date");
        RecordStore::new(Arc::new(FixedClock(today)))
    }

    fn trip_to(destination_id: i64, start_date: &str) -> NewTrip {
        NewTrip {
            title: "Trip".into(),
            start_date: start_date.into(),
            end_date: "2099-01-10".into(),
            description: "Vacation".into(),
            destination_id,
        }
    }

    #[test]
    fn generated_destination_ids_count_up_from_one() {
        let mut store = store();
        let ids: Vec<i64> = ["Paris", "Lyon", "Nice"]
            .into_iter()
            .map(|city| store.add_destination(None, city, "France").unwrap().id())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn generated_id_follows_the_largest_existing_id() {
        let mut store = store();
        store.add_destination(Some(10), "Oslo", "Norway").unwrap();
        let next = store.add_destination(None, "Bergen", "Norway").unwrap();
        assert_eq!(next.id(), 11);
    }

    #[test]
    fn exhausted_id_space_fails_without_panicking() {
        let mut store = store();
        store.add_destination(Some(i64::MAX), "Oslo", "Norway").unwrap();

        assert_eq!(
            store.add_destination(None, "Bergen", "Norway"),
            Err(StoreError::InvalidDestination)
        );
        assert_eq!(store.destinations().len(), 1);

        let explicit = store.add_destination(Some(7), "Bergen", "Norway").unwrap();
        assert_eq!(explicit.id(), 7);
    }

    #[test]
    fn explicit_id_collision_leaves_destinations_unchanged() {
        let mut store = store();
        store.add_destination(None, "Paris", "France").unwrap();
        let before = store.destinations().to_vec();

        let err = store.add_destination(Some(1), "Lyon", "France").unwrap_err();

        assert_eq!(err, StoreError::InvalidDestination);
        assert_eq!(store.destinations(), before.as_slice());
    }

    #[test]
    fn empty_city_or_country_is_rejected() {
        let mut store = store();
        assert_eq!(
            store.add_destination(None, "", "France"),
            Err(StoreError::EmptyFields)
        );
        assert_eq!(
            store.add_destination(None, "Paris", "  "),
            Err(StoreError::EmptyFields)
        );
        assert!(store.destinations().is_empty());
    }

    #[test]
    fn update_destination_changes_city_only() {
        let mut store = store();
        store.add_destination(None, "Pari", "France").unwrap();
        store.update_destination(1, "Paris").unwrap();

        let updated = store.destination(1).unwrap();
        assert_eq!(updated.city(), "Paris");
        assert_eq!(updated.country(), "France");
    }

    #[test]
    fn update_destination_reports_empty_before_missing() {
        let mut store = store();
        assert_eq!(
            store.update_destination(7, ""),
            Err(StoreError::EmptyFields)
        );
        assert_eq!(
            store.update_destination(7, "Rome"),
            Err(StoreError::DestinationNotFound)
        );
    }

    #[test]
    fn linked_trip_blocks_destination_delete() {
        let mut store = store();
        store.add_destination(None, "Paris", "France").unwrap();
        store.add_trip(trip_to(1, "2099-01-01")).unwrap();

        assert_eq!(
            store.delete_destination(1),
            Err(StoreError::DestinationHasLinkedTrips)
        );
        assert_eq!(store.destinations().len(), 1);
    }

    #[test]
    fn delete_destination_removes_exactly_one_record() {
        let mut store = store();
        store.add_destination(None, "Paris", "France").unwrap();
        store.add_destination(None, "Rome", "Italy").unwrap();

        store.delete_destination(1).unwrap();

        let ids: Vec<i64> = store.destinations().iter().map(Destination::id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(
            store.delete_destination(1),
            Err(StoreError::DestinationNotFound)
        );
    }

    #[test]
    fn add_trip_requires_known_destination() {
        let mut store = store();
        assert_eq!(
            store.add_trip(trip_to(1, "2099-01-01")),
            Err(StoreError::InvalidDestination)
        );
        store.add_destination(None, "Paris", "France").unwrap();
        assert_eq!(
            store.add_trip(trip_to(2, "2099-01-01")),
            Err(StoreError::InvalidDestination)
        );
        assert!(store.trips().is_empty());
    }

    #[test]
    fn add_trip_checks_empty_fields_first() {
        let mut store = store();
        let mut fields = trip_to(1, "2099-01-01");
        fields.description = String::new();
        assert_eq!(store.add_trip(fields), Err(StoreError::EmptyFields));
    }

    #[test]
    fn trip_ids_are_independent_of_destination_ids() {
        let mut store = store();
        store.add_destination(Some(5), "Paris", "France").unwrap();
        let trip = store.add_trip(trip_to(5, "2099-01-01")).unwrap();
        assert_eq!(trip.id(), 1);
        assert_eq!(trip.destination_id(), 5);
    }

    #[test]
    fn update_trip_skips_blank_fields() {
        let mut store = store();
        store.add_destination(None, "Paris", "France").unwrap();
        store.add_trip(trip_to(1, "2099-01-01")).unwrap();

        store
            .update_trip(
                1,
                TripUpdate {
                    title: Some("Spring break".into()),
                    end_date: Some(String::new()),
                    description: None,
                },
            )
            .unwrap();

        let trip = store.trip(1).unwrap();
        assert_eq!(trip.title(), "Spring break");
        assert_eq!(trip.end_date(), "2099-01-10");
        assert_eq!(trip.description(), "Vacation");
        assert_eq!(trip.start_date(), "2099-01-01");
        assert_eq!(trip.destination_id(), 1);
    }

    #[test]
    fn update_missing_trip_fails() {
        let mut store = store();
        assert_eq!(
            store.update_trip(3, TripUpdate::default()),
            Err(StoreError::TripNotFound)
        );
    }

    #[test]
    fn started_trips_cannot_be_deleted() {
        let mut store = store();
        store.add_destination(None, "Paris", "France").unwrap();
        store.add_trip(trip_to(1, "2000-01-01")).unwrap();
        store.add_trip(trip_to(1, "2026-03-15")).unwrap();
        store.add_trip(trip_to(1, "2026-03-16")).unwrap();

        assert_eq!(store.delete_trip(1), Err(StoreError::TripAlreadyStarted));
        assert_eq!(store.delete_trip(2), Err(StoreError::TripAlreadyStarted));
        assert_eq!(store.delete_trip(3), Ok(()));
        assert_eq!(store.trips().len(), 2);
    }

    #[test]
    fn delete_missing_trip_fails() {
        let mut store = store();
        assert_eq!(store.delete_trip(1), Err(StoreError::TripNotFound));
    }

    #[test]
    fn summaries_carry_destination_city() {
        let mut store = store();
        store.add_destination(None, "Paris", "France").unwrap();
        store.add_trip(trip_to(1, "2099-01-01")).unwrap();

        let summaries = store.trip_summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].destination_label(), "Paris");
        assert_eq!(
            summaries[0].to_string(),
            "1: Trip (Paris) - 2099-01-01 to 2099-01-10"
        );
    }
}
