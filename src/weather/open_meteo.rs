//! Open-Meteo geocoding and forecast client
//!
//! Both APIs are free and keyless. Requests are issued once; retries are left
//! to the caller.

use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::WanderlyError;
use crate::config::WeatherConfig;
use crate::models::{Coordinates, GeoResolution};

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl From<GeocodingResult> for GeoResolution {
    fn from(result: GeocodingResult) -> Self {
        Self {
            latitude: result.latitude,
            longitude: result.longitude,
            resolved_name: result.name,
            country: result.country,
        }
    }
}

/// Forecast response trimmed to the `current` block
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentData,
}

/// Current conditions from `OpenMeteo`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CurrentData {
    /// Celsius
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    /// WMO code; occasionally null for freshly updated grid cells
    #[serde(default)]
    pub weather_code: Option<i64>,
    /// km/h
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
}

pub struct OpenMeteoClient {
    client: Client,
    geocoding_base_url: String,
    forecast_base_url: String,
    language: String,
}

impl OpenMeteoClient {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Wanderly/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            geocoding_base_url: config.geocoding_base_url.trim_end_matches('/').to_string(),
            forecast_base_url: config.forecast_base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    /// Best match for a place name, or `None` when the geocoder knows nothing
    #[instrument(skip(self), fields(location = location_name))]
    pub async fn geocode(
        &self,
        location_name: &str,
    ) -> Result<Option<GeoResolution>, WanderlyError> {
        info!("Geocoding location: '{}'", location_name);

        let url = format!(
            "{}/search?name={}&count=1&language={}&format=json",
            self.geocoding_base_url,
            urlencoding::encode(location_name),
            urlencoding::encode(&self.language)
        );

        let response: GeocodingResponse = self
            .get_json(&url, "Failed to geocode location")
            .await?;

        let resolution = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(GeoResolution::from);

        match &resolution {
            Some(geo) => debug!(
                "Resolved '{}' to {} ({})",
                location_name,
                geo.display_name(),
                geo.format_coordinates()
            ),
            None => warn!("No results found for location '{}'", location_name),
        }

        Ok(resolution)
    }

    /// Current temperature, weather code and wind speed at a point
    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    pub async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentData, WanderlyError> {
        info!(
            "Getting current weather for coordinates: {:.4}, {:.4}",
            coordinates.latitude, coordinates.longitude
        );

        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,weather_code,wind_speed_10m&timezone=auto",
            self.forecast_base_url, coordinates.latitude, coordinates.longitude
        );

        let response: ForecastResponse = self
            .get_json(&url, "Failed to fetch weather data")
            .await?;

        Ok(response.current)
    }

    /// GET a JSON document, mapping non-2xx answers to `failure_message`
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        failure_message: &str,
    ) -> Result<T, WanderlyError> {
        debug!("OpenMeteo API request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Network error calling OpenMeteo: {}", e);
            WanderlyError::upstream(failure_message)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "OpenMeteo request failed");
            return Err(WanderlyError::upstream_status(failure_message, status.as_u16()));
        }

        let parsed = response.json::<T>().await.map_err(|e| {
            error!("Failed to parse OpenMeteo response: {}", e);
            WanderlyError::malformed("Invalid data received from weather service")
        })?;

        let elapsed = start_time.elapsed();
        info!("OpenMeteo request succeeded in {:.3}s", elapsed.as_secs_f64());
        if elapsed.as_secs() > 5 {
            warn!("Slow API response detected: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(parsed)
    }
}
