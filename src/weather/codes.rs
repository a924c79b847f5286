//! WMO weather interpretation codes as reported by Open-Meteo

use crate::models::WeatherCondition;

/// Returned for any code missing from the table
pub const UNKNOWN_CONDITION: WeatherCondition = WeatherCondition {
    description: "Unknown",
    icon: "🌡️",
};

const fn condition(description: &'static str, icon: &'static str) -> WeatherCondition {
    WeatherCondition { description, icon }
}

/// Map a provider weather code to a description and icon. Total over `i64`.
#[must_use]
pub fn describe_weather_code(code: i64) -> WeatherCondition {
    match code {
        0 => condition("Clear sky", "☀️"),
        1 => condition("Mainly clear", "🌤️"),
        2 => condition("Partly cloudy", "⛅"),
        3 => condition("Overcast", "☁️"),
        45 | 48 => condition("Foggy", "🌫️"),
        51 => condition("Light drizzle", "🌦️"),
        53 => condition("Moderate drizzle", "🌧️"),
        55 => condition("Dense drizzle", "🌧️"),
        61 => condition("Slight rain", "🌧️"),
        63 => condition("Moderate rain", "🌧️"),
        65 => condition("Heavy rain", "⛈️"),
        71 => condition("Light snow", "🌨️"),
        73 => condition("Moderate snow", "❄️"),
        75 => condition("Heavy snow", "❄️"),
        80 => condition("Rain showers", "🌦️"),
        95 => condition("Thunderstorm", "⛈️"),
        _ => UNKNOWN_CONDITION,
    }
}
