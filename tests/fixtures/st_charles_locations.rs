//! St. Charles County lawn-care customers for realistic test fixtures.
//!
//! Coordinates are approximate neighborhood centers around the shop in
//! St. Peters, MO.

use route_planner::geo::{LatLng, Location};
use route_planner::traits::{RoutePoint, RouteStop};

/// The shop every route starts and ends at.
pub const SHOP: LatLng = LatLng::new(38.7839, -90.4974);

/// A named customer with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

// ============================================================================
// St. Peters / O'Fallon
// ============================================================================

pub const ST_PETERS: &[Place] = &[
    Place::new("Spencer Rd", 38.7935, -90.6052),
    Place::new("Mid Rivers Mall Dr", 38.7981, -90.5960),
    Place::new("Jungermann Rd", 38.7727, -90.5894),
    Place::new("Salt River Rd", 38.7930, -90.5410),
    Place::new("Old Town St. Peters", 38.8009, -90.6263),
    Place::new("Cave Springs", 38.7816, -90.5579),
    Place::new("McClay Rd", 38.7750, -90.5416),
    Place::new("Harvester Rd", 38.7645, -90.5622),
];

pub const OFALLON: &[Place] = &[
    Place::new("Winghaven Blvd", 38.7600, -90.7302),
    Place::new("Bryan Rd", 38.7760, -90.6825),
    Place::new("Main St O'Fallon", 38.8106, -90.6998),
    Place::new("Highway K", 38.7496, -90.6989),
    Place::new("Tom Ginnever Ave", 38.7864, -90.7091),
    Place::new("Belleau Creek Rd", 38.8200, -90.7420),
];

// ============================================================================
// St. Charles
// ============================================================================

pub const ST_CHARLES: &[Place] = &[
    Place::new("Main St St. Charles", 38.7812, -90.4833),
    Place::new("Zumbehl Rd", 38.7688, -90.5198),
    Place::new("First Capitol Dr", 38.7870, -90.5050),
    Place::new("Elm St", 38.7779, -90.4980),
    Place::new("Droste Rd", 38.7591, -90.5244),
    Place::new("New Town", 38.8405, -90.5332),
    Place::new("Muegge Rd", 38.8002, -90.5640),
    Place::new("Friedens Rd", 38.8201, -90.5132),
    Place::new("Kingshighway St. Charles", 38.7901, -90.5015),
    Place::new("Boone's Lick Rd", 38.7838, -90.4902),
];

// ============================================================================
// Stop record
// ============================================================================

/// A customer stop as loaded from the customers table.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub stop_id: Option<String>,
}

impl Customer {
    pub fn at(id: &str, place: &Place) -> Self {
        Self {
            id: id.to_string(),
            latitude: Some(place.lat),
            longitude: Some(place.lng),
            stop_id: None,
        }
    }

    pub fn unlocated(id: &str) -> Self {
        Self {
            id: id.to_string(),
            latitude: None,
            longitude: None,
            stop_id: None,
        }
    }

    pub fn with_stop_id(mut self, stop_id: &str) -> Self {
        self.stop_id = Some(stop_id.to_string());
        self
    }
}

impl RoutePoint for Customer {
    fn location(&self) -> Location {
        Location::from_parts(self.latitude, self.longitude)
    }
}

impl RouteStop for Customer {
    type StopId = String;

    fn stop_id(&self) -> Option<&Self::StopId> {
        self.stop_id.as_ref()
    }
}

/// Every fixture place as a located customer, ids `c0`, `c1`, ...
pub fn all_customers() -> Vec<Customer> {
    ST_PETERS
        .iter()
        .chain(OFALLON)
        .chain(ST_CHARLES)
        .enumerate()
        .map(|(i, place)| Customer::at(&format!("c{}", i), place))
        .collect()
}
