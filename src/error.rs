//! Error types for configuration and directions lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("directions request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directions API returned status {0}")]
    Status(String),

    #[error("directions API returned no route")]
    NoRoute,

    #[error("directions API returned an invalid waypoint order")]
    InvalidWaypointOrder,

    #[error("stop {0} has no coordinates")]
    UnlocatedStop(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be greater than zero")]
    NotPositive { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route status {0:?}")]
pub struct UnknownRouteStatus(pub String);
