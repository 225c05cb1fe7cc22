//! Google Directions HTTP adapter for driving metrics and waypoint ordering.

use serde::Deserialize;

use crate::error::DirectionsError;
use crate::geo::LatLng;
use crate::planner::RouteMetrics;
use crate::traits::{DirectionsProvider, OptimizedWaypoints};

/// Waypoint limit of the Directions API (25 points minus origin and destination).
pub const GOOGLE_DIRECTIONS_MAX_WAYPOINTS: usize = 23;

const METERS_PER_MILE: f64 = 1609.34;

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn fetch(
        &self,
        origin: LatLng,
        destination: LatLng,
        waypoints: Option<String>,
    ) -> Result<DirectionsRoute, DirectionsError> {
        let url = format!("{}/maps/api/directions/json", self.config.base_url);
        let mut query = vec![
            ("origin", format_coords(origin)),
            ("destination", format_coords(destination)),
            ("mode", "driving".to_string()),
            ("key", self.config.api_key.clone()),
        ];
        if let Some(waypoints) = waypoints {
            query.push(("waypoints", waypoints));
        }

        let body = self
            .client
            .get(url)
            .query(&query)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>())?;

        body.into_route()
    }
}

impl DirectionsProvider for DirectionsClient {
    fn route_metrics(
        &self,
        origin: LatLng,
        destination: LatLng,
        waypoints: &[LatLng],
    ) -> Result<RouteMetrics, DirectionsError> {
        let waypoints = (!waypoints.is_empty()).then(|| join_waypoints(waypoints));
        let route = self.fetch(origin, destination, waypoints)?;
        Ok(route.metrics())
    }

    fn optimize_waypoints(
        &self,
        origin: LatLng,
        waypoints: &[LatLng],
    ) -> Result<OptimizedWaypoints, DirectionsError> {
        let param = format!("optimize:true|{}", join_waypoints(waypoints));
        let route = self.fetch(origin, origin, Some(param))?;
        route.optimized(waypoints.len())
    }
}

fn format_coords(coords: LatLng) -> String {
    format!("{},{}", coords.lat, coords.lng)
}

fn join_waypoints(waypoints: &[LatLng]) -> String {
    waypoints
        .iter()
        .map(|coords| format_coords(*coords))
        .collect::<Vec<_>>()
        .join("|")
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    fn into_route(self) -> Result<DirectionsRoute, DirectionsError> {
        if self.status != "OK" {
            return Err(DirectionsError::Status(self.status));
        }
        self.routes.into_iter().next().ok_or(DirectionsError::NoRoute)
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
    #[serde(default)]
    waypoint_order: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: f64,
}

impl DirectionsRoute {
    fn metrics(&self) -> RouteMetrics {
        let meters: f64 = self
            .legs
            .iter()
            .filter_map(|leg| leg.distance.as_ref())
            .map(|distance| distance.value)
            .sum();
        let seconds: f64 = self
            .legs
            .iter()
            .filter_map(|leg| leg.duration.as_ref())
            .map(|duration| duration.value)
            .sum();

        RouteMetrics {
            distance_miles: meters / METERS_PER_MILE,
            duration_minutes: (seconds / 60.0).round() as i32,
        }
    }

    fn optimized(self, waypoint_count: usize) -> Result<OptimizedWaypoints, DirectionsError> {
        if !is_permutation(&self.waypoint_order, waypoint_count) {
            return Err(DirectionsError::InvalidWaypointOrder);
        }
        let metrics = self.metrics();
        Ok(OptimizedWaypoints {
            waypoint_order: self.waypoint_order,
            metrics,
        })
    }
}

/// True if `order` holds each of `0..len` exactly once.
pub(crate) fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
