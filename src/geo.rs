//! Great-circle distance between stops.
//!
//! Straight-line estimates only; road distances come from a
//! [`DirectionsProvider`](crate::traits::DirectionsProvider) when one is
//! configured.

use serde::{Deserialize, Serialize};

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Kilometers per mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Where a stop is, if it has been geocoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    Located(LatLng),
    Unlocated,
}

impl Location {
    /// Builds a location from nullable coordinate columns.
    ///
    /// Missing either coordinate makes the stop unlocated.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Self {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Location::Located(LatLng::new(lat, lng)),
            _ => Location::Unlocated,
        }
    }

    pub fn coords(&self) -> Option<LatLng> {
        match self {
            Location::Located(coords) => Some(*coords),
            Location::Unlocated => None,
        }
    }

    pub fn is_located(&self) -> bool {
        matches!(self, Location::Located(_))
    }
}

impl From<LatLng> for Location {
    fn from(coords: LatLng) -> Self {
        Location::Located(coords)
    }
}

/// Distance expressed in both units, as stored on customer records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub miles: f64,
    pub km: f64,
}

/// Haversine distance between two points in miles.
///
/// NaN coordinates yield a NaN distance.
pub fn distance_miles(from: LatLng, to: LatLng) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Haversine distance between two points in kilometers.
pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    distance_miles(from, to) * KM_PER_MILE
}

pub fn distance_from(from: LatLng, to: LatLng) -> Distance {
    let miles = distance_miles(from, to);
    Distance {
        miles,
        km: miles * KM_PER_MILE,
    }
}
