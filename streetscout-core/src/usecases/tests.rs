use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use super::prelude::*;
use crate::gateways::geocode;

enum MockAnswer {
    Position(MapPoint),
    Status(geocode::Status),
}

/// Answers lookups from a fixed table and records every request.
///
/// Unknown addresses are answered with `ZERO_RESULTS`.
#[derive(Default)]
pub struct MockGeoGw {
    answers: HashMap<String, MockAnswer>,
    requested: RefCell<Vec<String>>,
}

impl MockGeoGw {
    pub fn with_position(mut self, addr: &str, lat: f64, lng: f64) -> Self {
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
        self.answers
            .insert(addr.to_owned(), MockAnswer::Position(pos));
        self
    }

    pub fn with_status(mut self, addr: &str, status: geocode::Status) -> Self {
        self.answers
            .insert(addr.to_owned(), MockAnswer::Status(status));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl GeoCodingGateway for MockGeoGw {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Result<MapPoint, geocode::Error> {
        self.requested.borrow_mut().push(addr.to_string());
        match self.answers.get(addr.as_str()) {
            Some(MockAnswer::Position(pos)) => Ok(*pos),
            Some(MockAnswer::Status(status)) => Err(geocode::Error::Status(status.clone())),
            None => Err(geocode::Error::Status(geocode::Status::ZeroResults)),
        }
    }
}

#[derive(Default)]
pub struct CountingThrottle(Cell<usize>);

impl CountingThrottle {
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl RequestThrottle for CountingThrottle {
    fn until_ready(&self) {
        self.0.set(self.0.get() + 1);
    }
}
