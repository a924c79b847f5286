//! Weather lookup request and snapshot models

use serde::{Deserialize, Serialize};

use super::location::{Coordinates, GeoResolution};
use crate::WanderlyError;

/// Incoming weather lookup request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub location: Option<String>,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
        }
    }

    /// The trimmed location, or a validation error when it is missing or blank
    pub fn location(&self) -> Result<&str, WanderlyError> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| WanderlyError::validation("Location parameter is required"))
    }
}

/// Description and icon for a provider weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Current conditions at a resolved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// "name, country"
    pub location: String,
    /// Temperature in Celsius, rounded
    pub temperature: i64,
    pub weather_description: String,
    pub weather_icon: String,
    /// Wind speed in km/h
    pub wind_speed: f64,
    pub coordinates: Coordinates,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn new(
        geo: &GeoResolution,
        temperature_celsius: f64,
        wind_speed_kmh: f64,
        condition: WeatherCondition,
    ) -> Self {
        Self {
            location: geo.display_name(),
            temperature: round_half_up(temperature_celsius),
            weather_description: condition.description.to_string(),
            weather_icon: condition.icon.to_string(),
            wind_speed: wind_speed_kmh,
            coordinates: geo.coordinates(),
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} km/h", self.wind_speed)
    }
}

/// Halves round towards positive infinity, so -2.5 becomes -2
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn round_half_up(value: f64) -> i64 {
    let nearest = value.round();
    let rounded = if (nearest - value).abs() == 0.5 {
        value.ceil()
    } else {
        nearest
    };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(18.6, 19)]
    #[case(18.4, 18)]
    #[case(18.5, 19)]
    #[case(-2.5, -2)]
    #[case(-2.6, -3)]
    #[case(0.0, 0)]
    #[case(-0.5, 0)]
    #[case(0.499_999_999_999_999_94, 0)]
    #[case(-0.499_999_999_999_999_94, 0)]
    fn test_round_half_up(#[case] input: f64, #[case] expected: i64) {
        assert_eq!(round_half_up(input), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn test_query_rejects_blank_location(#[case] location: Option<&str>) {
        let query = WeatherQuery {
            location: location.map(str::to_string),
        };
        assert!(matches!(
            query.location(),
            Err(WanderlyError::Validation { .. })
        ));
    }

    #[test]
    fn test_query_trims_location() {
        let query = WeatherQuery::new("  Jaipur ");
        assert_eq!(query.location().unwrap(), "Jaipur");
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let geo = GeoResolution {
            latitude: 26.91,
            longitude: 75.79,
            resolved_name: "Jaipur".to_string(),
            country: Some("India".to_string()),
        };
        let snapshot = WeatherSnapshot::new(
            &geo,
            31.2,
            7.5,
            WeatherCondition {
                description: "Clear sky",
                icon: "☀️",
            },
        );

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["location"], "Jaipur, India");
        assert_eq!(value["temperature"], 31);
        assert_eq!(value["weatherDescription"], "Clear sky");
        assert_eq!(value["windSpeed"], 7.5);
        assert_eq!(value["coordinates"]["latitude"], 26.91);
        assert_eq!(snapshot.format_temperature(), "31°C");
        assert_eq!(snapshot.format_wind(), "7.5 km/h");
    }
}
