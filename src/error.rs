//! Error types and handling for the `Wanderly` service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the `Wanderly` service
#[derive(Error, Debug)]
pub enum WanderlyError {
    /// Missing or invalid configuration, such as an absent AI gateway key
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Caller supplied an unusable request
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Upstream answered HTTP 429
    #[error("Upstream rate limit exceeded: {message}")]
    UpstreamRateLimited { message: String },

    /// Upstream answered HTTP 402
    #[error("Upstream quota exhausted: {message}")]
    UpstreamQuotaExhausted { message: String },

    /// Any other upstream or transport failure
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        status: Option<u16>,
    },

    /// Upstream reply did not contain a usable structured payload
    #[error("Malformed upstream response: {message}")]
    MalformedResponse { message: String },

    /// Geocoding returned no match
    #[error("Location not found: {location}")]
    LocationNotFound { location: String },
}

impl WanderlyError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new rate limit error
    pub fn rate_limited<S: Into<String>>(message: S) -> Self {
        Self::UpstreamRateLimited {
            message: message.into(),
        }
    }

    /// Create a new quota exhausted error
    pub fn quota_exhausted<S: Into<String>>(message: S) -> Self {
        Self::UpstreamQuotaExhausted {
            message: message.into(),
        }
    }

    /// Create a new upstream error without a status code (transport failures)
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
            status: None,
        }
    }

    /// Create a new upstream error carrying the HTTP status it answered with
    pub fn upstream_status<S: Into<String>>(message: S, status: u16) -> Self {
        Self::Upstream {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Create a new malformed response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new location not found error
    pub fn location_not_found<S: Into<String>>(location: S) -> Self {
        Self::LocationNotFound {
            location: location.into(),
        }
    }

    /// HTTP status surfaced to the caller
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            WanderlyError::Validation { .. } => StatusCode::BAD_REQUEST,
            WanderlyError::UpstreamRateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            WanderlyError::UpstreamQuotaExhausted { .. } => StatusCode::PAYMENT_REQUIRED,
            WanderlyError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            WanderlyError::Configuration { .. }
            | WanderlyError::Upstream { .. }
            | WanderlyError::MalformedResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a short caller-facing message. Never includes upstream bodies.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WanderlyError::Configuration { message } => message.clone(),
            WanderlyError::Validation { message } => message.clone(),
            WanderlyError::UpstreamRateLimited { .. } => {
                "Rate limit exceeded. Please try again in a moment.".to_string()
            }
            WanderlyError::UpstreamQuotaExhausted { .. } => {
                "AI credits exhausted. Please add credits to continue.".to_string()
            }
            WanderlyError::Upstream { message, .. } => message.clone(),
            WanderlyError::MalformedResponse { message } => message.clone(),
            WanderlyError::LocationNotFound { .. } => "Location not found".to_string(),
        }
    }
}

impl IntoResponse for WanderlyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
