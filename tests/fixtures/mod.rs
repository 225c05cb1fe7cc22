//! Test fixtures for route-planner.
//!
//! Provides realistic test data including:
//! - St. Charles County, MO customer addresses (approximate coordinates)
//! - A `Customer` stop record with optional coordinates

pub mod st_charles_locations;

pub use st_charles_locations::*;
