//! Route planner (greedy nearest-neighbor baseline).

use serde::{Deserialize, Serialize};

use crate::geo::{distance_miles, LatLng};
use crate::traits::{RoutePoint, RouteStop};

/// Minutes of driving assumed per straight-line mile.
const MINUTES_PER_MILE: f64 = 3.0;

/// Stops in visit order, with each stop's index in the caller's input.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour<T> {
    pub ordered: Vec<T>,
    pub order_indices: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance_miles: f64,
    pub duration_minutes: i32,
}

impl RouteMetrics {
    /// Metrics estimated from straight-line distance.
    pub fn from_distance(distance_miles: f64) -> Self {
        Self {
            distance_miles,
            duration_minutes: (distance_miles * MINUTES_PER_MILE).round() as i32,
        }
    }
}

/// Orders `points` by repeatedly driving to the closest unvisited stop.
///
/// Starts at `origin`. Unlocated stops are visited only after every located
/// stop, in their input order, and do not move the current position. Ties go
/// to the stop that appears first.
pub fn nearest_neighbor_tour<T>(points: &[T], origin: LatLng) -> Tour<T>
where
    T: RoutePoint + Clone,
{
    if points.len() <= 1 {
        return Tour {
            ordered: points.to_vec(),
            order_indices: (0..points.len()).collect(),
        };
    }

    let mut remaining: Vec<(usize, &T)> = points.iter().enumerate().collect();
    let mut ordered = Vec::with_capacity(points.len());
    let mut order_indices = Vec::with_capacity(points.len());
    let mut current = origin;

    while !remaining.is_empty() {
        let mut nearest = 0;
        let mut nearest_distance = f64::INFINITY;

        for (position, (_, point)) in remaining.iter().enumerate() {
            let Some(coords) = point.location().coords() else {
                continue;
            };
            let distance = distance_miles(current, coords);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = position;
            }
        }

        // With no located stop left, `nearest` stays 0: the first remaining stop.
        let (index, point) = remaining.remove(nearest);
        if let Some(coords) = point.location().coords() {
            current = coords;
        }
        ordered.push(point.clone());
        order_indices.push(index);
    }

    Tour {
        ordered,
        order_indices,
    }
}

/// Estimates distance and drive time for `points` in the order given.
///
/// The route leaves `origin`, passes every located stop, and returns to
/// `origin`. Unlocated stops are skipped. With nothing located the route is
/// empty and both metrics are zero.
pub fn estimate_route_metrics<T: RoutePoint>(points: &[T], origin: LatLng) -> RouteMetrics {
    let mut distance = 0.0;
    let mut prev = origin;
    let mut visited = false;

    for coords in points.iter().filter_map(|point| point.location().coords()) {
        distance += distance_miles(prev, coords);
        prev = coords;
        visited = true;
    }

    if visited {
        distance += distance_miles(prev, origin);
    }

    RouteMetrics::from_distance(distance)
}

/// Splits ordered stops into consecutive batches of at most `max_chunk_size`.
///
/// A size of zero disables chunking and returns everything as one batch.
pub fn chunk_route_stops<T: Clone>(stops: &[T], max_chunk_size: usize) -> Vec<Vec<T>> {
    if max_chunk_size == 0 {
        return vec![stops.to_vec()];
    }

    stops
        .chunks(max_chunk_size)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Persisted ids for an ordering that contains one newly inserted stop.
///
/// Entries without a recorded id get `new_stop_id`.
pub fn build_stop_order_ids<S: RouteStop>(
    ordered_entries: &[S],
    new_stop_id: Option<&S::StopId>,
) -> Vec<Option<S::StopId>> {
    ordered_entries
        .iter()
        .map(|entry| entry.stop_id().or(new_stop_id).cloned())
        .collect()
}
