//! route-planner core
//!
//! Stop ordering, route metrics, and run bookkeeping for service routes
//! that start and end at a shop.

pub mod traits;
pub mod error;
pub mod config;
pub mod geo;
pub mod planner;
pub mod completion;
pub mod directions;
pub mod optimize;
