//! Weather lookup: geocode a place name, then fetch its current conditions

use tracing::{info, instrument};

use crate::WanderlyError;
use crate::config::WeatherConfig;
use crate::models::{WeatherQuery, WeatherSnapshot};

pub mod codes;
pub mod open_meteo;

pub use codes::{UNKNOWN_CONDITION, describe_weather_code};
pub use open_meteo::OpenMeteoClient;

/// Stateless per-request weather lookup
pub struct WeatherLookupService {
    client: OpenMeteoClient,
}

impl WeatherLookupService {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: OpenMeteoClient::new(config)?,
        })
    }

    /// Resolve `query.location` and return its current weather.
    ///
    /// The forecast call is only made once geocoding produced a match; a blank
    /// location fails before any network call.
    #[instrument(skip(self, query), fields(location = ?query.location))]
    pub async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherSnapshot, WanderlyError> {
        let location = query.location()?;
        info!("Fetching weather for location: {}", location);

        let geo = self
            .client
            .geocode(location)
            .await?
            .ok_or_else(|| WanderlyError::location_not_found(location))?;

        let current = self.client.current_conditions(geo.coordinates()).await?;
        let condition = current
            .weather_code
            .map_or(UNKNOWN_CONDITION, describe_weather_code);

        Ok(WeatherSnapshot::new(
            &geo,
            current.temperature,
            current.wind_speed,
            condition,
        ))
    }
}
