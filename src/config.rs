//! Planner configuration.
//!
//! Resolved once at startup and passed to the planner explicitly.

use crate::directions::{DirectionsConfig, GOOGLE_DIRECTIONS_MAX_WAYPOINTS};
use crate::error::ConfigError;
use crate::geo::LatLng;

const DEFAULT_SHOP_LAT: f64 = 38.7839;
const DEFAULT_SHOP_LNG: f64 = -90.4974;
const DEFAULT_SHOP_ADDRESS: &str = "16 Cherokee Dr, St Peters, MO";
const DEFAULT_FUEL_COST_PER_MILE: f64 = 0.15;

/// Where routes start and end.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopLocation {
    pub coords: LatLng,
    pub address: String,
}

impl Default for ShopLocation {
    fn default() -> Self {
        Self {
            coords: LatLng::new(DEFAULT_SHOP_LAT, DEFAULT_SHOP_LNG),
            address: DEFAULT_SHOP_ADDRESS.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub shop: ShopLocation,
    /// Directions API settings; `None` plans with straight-line estimates only.
    pub directions: Option<DirectionsConfig>,
    pub max_waypoints: usize,
    pub fuel_cost_per_mile: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            shop: ShopLocation::default(),
            directions: None,
            max_waypoints: GOOGLE_DIRECTIONS_MAX_WAYPOINTS,
            fuel_cost_per_mile: DEFAULT_FUEL_COST_PER_MILE,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let lat = parse_number("SHOP_LAT", var("SHOP_LAT"))?.unwrap_or(DEFAULT_SHOP_LAT);
        let lng = parse_number("SHOP_LNG", var("SHOP_LNG"))?.unwrap_or(DEFAULT_SHOP_LNG);
        let address = var("SHOP_ADDRESS").unwrap_or_else(|| DEFAULT_SHOP_ADDRESS.to_string());

        let directions = var("GOOGLE_MAPS_SERVER_API_KEY").map(DirectionsConfig::new);
        if directions.is_none() {
            tracing::debug!("GOOGLE_MAPS_SERVER_API_KEY not set, directions lookups disabled");
        }

        let max_waypoints = var("DIRECTIONS_MAX_WAYPOINTS");
        let max_waypoints = match parse_number("DIRECTIONS_MAX_WAYPOINTS", max_waypoints)? {
            Some(value) if value >= 1.0 && value.fract() == 0.0 => value as usize,
            Some(_) => {
                return Err(ConfigError::NotPositive {
                    name: "DIRECTIONS_MAX_WAYPOINTS",
                });
            }
            None => defaults.max_waypoints,
        };

        let fuel_cost_per_mile = parse_number("FUEL_COST_PER_MILE", var("FUEL_COST_PER_MILE"))?
            .unwrap_or(defaults.fuel_cost_per_mile);

        Ok(Self {
            shop: ShopLocation {
                coords: LatLng::new(lat, lng),
                address,
            },
            directions,
            max_waypoints,
            fuel_cost_per_mile,
        })
    }
}

fn parse_number(name: &'static str, value: Option<String>) -> Result<Option<f64>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(ConfigError::InvalidNumber { name, value }),
    }
}
