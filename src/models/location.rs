//! Geocoding result for a free-text place name

use serde::{Deserialize, Serialize};

/// Coordinates of a resolved place
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// First geocoding match for a query. Only used to build a `WeatherSnapshot`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResolution {
    pub latitude: f64,
    pub longitude: f64,
    /// Canonical place name
    pub resolved_name: String,
    /// Country name, when the geocoder reports one
    pub country: Option<String>,
}

impl GeoResolution {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// "name, country", or just the name when no country is known
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => format!("{}, {}", self.resolved_name, country),
            None => self.resolved_name.clone(),
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
