//! Configuration management for the `Wanderly` service
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and provides validation for all configuration settings.

use crate::WanderlyError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "WANDERLY_CONFIG";

/// Plain environment variable holding the AI gateway credential
pub const AI_API_KEY_ENV: &str = "AI_GATEWAY_API_KEY";

/// Root configuration structure for the `Wanderly` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WanderlyConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// AI chat-completion gateway settings
    #[serde(default)]
    pub ai: AiConfig,
    /// Geocoding and forecast API settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Deadline for a whole inbound request, upstream calls included
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

/// AI gateway configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Bearer credential for the gateway. Absent means route generation is disabled.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_ai_model")]
    pub model: String,
    /// Region the itineraries are framed for
    #[serde(default = "default_ai_region")]
    pub region: String,
    /// Currency name used in cost estimates
    #[serde(default = "default_ai_currency")]
    pub currency: String,
    /// Currency symbol used in cost examples
    #[serde(default = "default_ai_currency_symbol")]
    pub currency_symbol: String,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL for the forecast API
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Language of resolved place names
    #[serde(default = "default_weather_language")]
    pub language: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_ai_base_url() -> String {
    "https://ai.gateway.lovable.dev/v1".to_string()
}

fn default_ai_model() -> String {
    "google/gemini-2.5-flash".to_string()
}

fn default_request_timeout() -> u64 {
    120
}

fn default_ai_region() -> String {
    "India".to_string()
}

fn default_ai_currency() -> String {
    "Indian Rupees (₹)".to_string()
}

fn default_ai_currency_symbol() -> String {
    "₹".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_ai_base_url(),
            model: default_ai_model(),
            region: default_ai_region(),
            currency: default_ai_currency(),
            currency_symbol: default_ai_currency_symbol(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            language: default_weather_language(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl WanderlyConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("wanderly.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // WANDERLY_SERVER__PORT -> server.port
        builder = builder.add_source(
            Environment::with_prefix("WANDERLY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: WanderlyConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config
            .ai
            .api_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty())
        {
            config.ai.api_key = env::var(AI_API_KEY_ENV).ok();
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self
            .ai
            .api_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.ai.api_key = None;
        }
        if self.ai.base_url.is_empty() {
            self.ai.base_url = default_ai_base_url();
        }
        if self.ai.model.is_empty() {
            self.ai.model = default_ai_model();
        }
        if self.ai.region.is_empty() {
            self.ai.region = default_ai_region();
        }
        if self.ai.currency.is_empty() {
            self.ai.currency = default_ai_currency();
        }
        if self.ai.currency_symbol.is_empty() {
            self.ai.currency_symbol = default_ai_currency_symbol();
        }
        if self.weather.geocoding_base_url.is_empty() {
            self.weather.geocoding_base_url = default_geocoding_base_url();
        }
        if self.weather.forecast_base_url.is_empty() {
            self.weather.forecast_base_url = default_forecast_base_url();
        }
        if self.weather.language.is_empty() {
            self.weather.language = default_weather_language();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_seconds)
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.request_timeout_seconds > 600 {
            return Err(
                WanderlyError::config("Request timeout cannot exceed 600 seconds").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WanderlyError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WanderlyError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("AI gateway", &self.ai.base_url),
            ("Geocoding API", &self.weather.geocoding_base_url),
            ("Forecast API", &self.weather.forecast_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WanderlyError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
