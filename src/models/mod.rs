//! Data models for the Wanderly service
//!
//! This module contains the domain models organized by concern:
//! - Route: route requests, stops and itineraries
//! - Location: geocoding results and coordinates
//! - Weather: weather queries and current-conditions snapshots
//! - Budget: trip cost estimates

pub mod budget;
pub mod location;
pub mod route;
pub mod weather;

// Re-export all public types for convenient access
pub use budget::{BudgetEstimate, BudgetRequest, DailyRates, estimate_budget};
pub use location::{Coordinates, GeoResolution};
pub use route::{
    BudgetLevel, Pace, RouteItinerary, RoutePreferences, RouteRequest, RouteStop, StopType,
};
pub use weather::{WeatherCondition, WeatherQuery, WeatherSnapshot};
