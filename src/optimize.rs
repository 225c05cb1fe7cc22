//! Route optimization pipeline.
//!
//! Prefers the directions provider's own waypoint ordering and falls back to
//! the nearest-neighbor tour with straight-line estimates whenever the
//! provider is missing, cannot take the route, or fails.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::directions::{is_permutation, GOOGLE_DIRECTIONS_MAX_WAYPOINTS};
use crate::error::DirectionsError;
use crate::geo::{LatLng, KM_PER_MILE};
use crate::planner::{
    chunk_route_stops, estimate_route_metrics, nearest_neighbor_tour, RouteMetrics, Tour,
};
use crate::traits::{DirectionsProvider, RoutePoint};

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedRoute<T> {
    pub ordered: Vec<T>,
    pub order_indices: Vec<usize>,
    pub metrics: RouteMetrics,
    /// Set when the route was planned in a degraded way the user should know about.
    pub warning: Option<String>,
}

/// Route totals as stored on a route record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub total_distance_miles: f64,
    pub total_distance_km: f64,
    pub total_duration_minutes: i32,
    pub estimated_fuel_cost: f64,
    /// Coordinates in visit order; `None` for unlocated stops.
    pub waypoints: Vec<Option<LatLng>>,
    pub order: Vec<usize>,
}

impl<T: RoutePoint> OptimizedRoute<T> {
    pub fn summary(&self, fuel_cost_per_mile: f64) -> RouteSummary {
        let miles = self.metrics.distance_miles;
        RouteSummary {
            total_distance_miles: miles,
            total_distance_km: miles * KM_PER_MILE,
            total_duration_minutes: self.metrics.duration_minutes,
            estimated_fuel_cost: miles * fuel_cost_per_mile,
            waypoints: self.ordered.iter().map(|stop| stop.location().coords()).collect(),
            order: self.order_indices.clone(),
        }
    }
}

fn estimated<T: RoutePoint>(
    tour: Tour<T>,
    origin: LatLng,
    warning: Option<String>,
) -> OptimizedRoute<T> {
    let metrics = estimate_route_metrics(&tour.ordered, origin);
    OptimizedRoute {
        ordered: tour.ordered,
        order_indices: tour.order_indices,
        metrics,
        warning,
    }
}

fn located<T: RoutePoint>(stops: &[T]) -> Result<Vec<LatLng>, DirectionsError> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            stop.location()
                .coords()
                .ok_or(DirectionsError::UnlocatedStop(index))
        })
        .collect()
}

/// Orders `stops` into a round trip from `origin`.
///
/// The provider is only consulted for two or more stops that all have
/// coordinates. Routes longer than `max_waypoints` are ordered locally and
/// measured with chunked directions requests. A limit of zero means
/// [`GOOGLE_DIRECTIONS_MAX_WAYPOINTS`].
pub fn optimize_route<T, P>(
    stops: &[T],
    origin: LatLng,
    provider: Option<&P>,
    max_waypoints: usize,
) -> OptimizedRoute<T>
where
    T: RoutePoint + Clone,
    P: DirectionsProvider + ?Sized,
{
    let max_waypoints = waypoint_limit(max_waypoints);
    let all_located = stops.iter().all(|stop| stop.location().is_located());
    let provider = match provider {
        Some(provider) if stops.len() >= 2 && all_located => provider,
        _ => {
            tracing::debug!(
                stops = stops.len(),
                all_located,
                "planning with nearest-neighbor estimates"
            );
            return estimated(nearest_neighbor_tour(stops, origin), origin, None);
        }
    };

    if stops.len() > max_waypoints {
        let tour = nearest_neighbor_tour(stops, origin);
        let warning = format!(
            "Route has {} stops. Using chunked optimization to stay within the {}-stop Directions API limit.",
            stops.len(),
            max_waypoints
        );

        return match chunked_directions_metrics(&tour.ordered, origin, provider, max_waypoints) {
            Ok(metrics) => OptimizedRoute {
                ordered: tour.ordered,
                order_indices: tour.order_indices,
                metrics,
                warning: Some(warning),
            },
            Err(err) => {
                tracing::warn!(error = %err, "chunked directions lookup failed, using estimates");
                let warning = format!("{} Using estimated distance and time.", warning);
                estimated(tour, origin, Some(warning))
            }
        };
    }

    let optimized =
        located(stops).and_then(|coords| provider.optimize_waypoints(origin, &coords));
    match optimized {
        Ok(optimized) if is_permutation(&optimized.waypoint_order, stops.len()) => {
            tracing::debug!(stops = stops.len(), "route ordered by directions provider");
            OptimizedRoute {
                ordered: optimized
                    .waypoint_order
                    .iter()
                    .map(|&index| stops[index].clone())
                    .collect(),
                order_indices: optimized.waypoint_order,
                metrics: optimized.metrics,
                warning: None,
            }
        }
        Ok(_) => {
            tracing::warn!(
                "directions provider returned an invalid waypoint order, using nearest-neighbor"
            );
            estimated(nearest_neighbor_tour(stops, origin), origin, None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "directions optimize failed, using nearest-neighbor");
            estimated(nearest_neighbor_tour(stops, origin), origin, None)
        }
    }
}

/// Driving metrics for already-ordered stops, split into requests of at most
/// `max_waypoints` stops.
///
/// Each request ends at the last stop of its chunk and the next one starts
/// there. The final request returns to `origin`. A limit of zero means
/// [`GOOGLE_DIRECTIONS_MAX_WAYPOINTS`].
pub fn chunked_directions_metrics<T, P>(
    ordered: &[T],
    origin: LatLng,
    provider: &P,
    max_waypoints: usize,
) -> Result<RouteMetrics, DirectionsError>
where
    T: RoutePoint,
    P: DirectionsProvider + ?Sized,
{
    let coords = located(ordered)?;
    let chunks = chunk_route_stops(&coords, waypoint_limit(max_waypoints));
    let last = chunks.len().saturating_sub(1);

    let mut total = RouteMetrics::default();
    let mut leg_origin = origin;

    for (i, chunk) in chunks.iter().enumerate() {
        let Some((&chunk_end, chunk_rest)) = chunk.split_last() else {
            continue;
        };

        let (destination, waypoints) = if i == last {
            (origin, chunk.as_slice())
        } else {
            (chunk_end, chunk_rest)
        };

        let metrics = provider.route_metrics(leg_origin, destination, waypoints)?;
        total.distance_miles += metrics.distance_miles;
        total.duration_minutes += metrics.duration_minutes;
        leg_origin = destination;
    }

    tracing::debug!(chunks = chunks.len(), "chunked directions metrics");
    Ok(total)
}

fn waypoint_limit(max_waypoints: usize) -> usize {
    if max_waypoints == 0 {
        GOOGLE_DIRECTIONS_MAX_WAYPOINTS
    } else {
        max_waypoints
    }
}

/// Optimizes independent groups of stops (one per service day) in parallel.
///
/// Results keep the input order.
pub fn optimize_routes_by_day<K, T, P>(
    days: Vec<(K, Vec<T>)>,
    origin: LatLng,
    provider: Option<&P>,
    max_waypoints: usize,
) -> Vec<(K, OptimizedRoute<T>)>
where
    K: Send,
    T: RoutePoint + Clone + Send,
    P: DirectionsProvider + Sync + ?Sized,
{
    days.into_par_iter()
        .map(|(day, stops)| {
            let route = optimize_route(&stops, origin, provider, max_waypoints);
            (day, route)
        })
        .collect()
}
