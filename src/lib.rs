//! `Wanderly` - AI-assisted travel route planning
//!
//! This library provides the route generation and destination weather
//! services behind the Wanderly HTTP API, plus trip budget estimation.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod route_generation;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::WanderlyConfig;
pub use error::WanderlyError;
pub use models::{RouteItinerary, RouteRequest, RouteStop, WeatherQuery, WeatherSnapshot};
pub use route_generation::RouteGenerationService;
pub use weather::WeatherLookupService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WanderlyError>;
