//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Concrete apps should implement them for
//! their own stop and customer records.

use std::hash::Hash;

use crate::error::DirectionsError;
use crate::geo::{LatLng, Location};
use crate::planner::RouteMetrics;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Anything that can be placed on a route.
pub trait RoutePoint {
    /// Stop coordinates, or `Location::Unlocated` if not geocoded yet.
    fn location(&self) -> Location;
}

impl RoutePoint for Location {
    fn location(&self) -> Location {
        *self
    }
}

impl RoutePoint for LatLng {
    fn location(&self) -> Location {
        Location::Located(*self)
    }
}

/// An entry in an existing route ordering.
pub trait RouteStop {
    type StopId: Id;

    /// Persisted stop id. `None` for a stop that has not been stored yet.
    fn stop_id(&self) -> Option<&Self::StopId>;
}

/// Waypoint order chosen by a directions service, with its driving metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedWaypoints {
    /// Visit order as indices into the submitted waypoints.
    pub waypoint_order: Vec<usize>,
    pub metrics: RouteMetrics,
}

/// External driving-directions service.
pub trait DirectionsProvider {
    /// Driving metrics for origin -> waypoints (in the given order) -> destination.
    fn route_metrics(
        &self,
        origin: LatLng,
        destination: LatLng,
        waypoints: &[LatLng],
    ) -> Result<RouteMetrics, DirectionsError>;

    /// Round trip from `origin` with the service free to reorder waypoints.
    fn optimize_waypoints(
        &self,
        origin: LatLng,
        waypoints: &[LatLng],
    ) -> Result<OptimizedWaypoints, DirectionsError>;
}
