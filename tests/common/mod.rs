//! Shared fixtures for the integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use wanderly::config::{AiConfig, WeatherConfig};
use wiremock::MockServer;

pub const API_KEY: &str = "test-gateway-key";

pub fn ai_config(server: &MockServer) -> AiConfig {
    AiConfig {
        api_key: Some(API_KEY.to_string()),
        base_url: format!("{}/v1", server.uri()),
        ..AiConfig::default()
    }
}

pub fn weather_config(server: &MockServer) -> WeatherConfig {
    WeatherConfig {
        geocoding_base_url: format!("{}/v1", server.uri()),
        forecast_base_url: format!("{}/v1", server.uri()),
        ..WeatherConfig::default()
    }
}

pub fn itinerary_json() -> Value {
    json!({
        "stops": [
            {
                "type": "transport",
                "title": "Shatabdi Express to Agra",
                "time": "2h",
                "cost": "₹750",
                "description": "Fast morning train from New Delhi station",
                "popularity": 4,
                "bestTimeToVisit": "Year-round"
            },
            {
                "type": "attraction",
                "title": "Taj Mahal",
                "time": "3h",
                "cost": "₹1100",
                "description": "Visit at sunrise to avoid the crowds",
                "popularity": 5,
                "bestTimeToVisit": "October-March"
            },
            {
                "type": "restaurant",
                "title": "Pinch of Spice",
                "time": "1h 30min",
                "cost": "₹1200-1500",
                "description": "North Indian classics",
                "popularity": 4.5,
                "bestTimeToVisit": "Evening"
            },
            {
                "type": "attraction",
                "title": "Agra Fort",
                "time": "2h",
                "cost": "₹650",
                "description": "Red sandstone Mughal fort",
                "popularity": 4,
                "bestTimeToVisit": "Winter"
            },
            {
                "type": "accommodation",
                "title": "Hotel near Taj East Gate",
                "time": "Overnight",
                "cost": "₹3000-4500",
                "description": "Walking distance to the monument",
                "popularity": 3,
                "bestTimeToVisit": "Year-round"
            }
        ],
        "totalDuration": "2 days",
        "totalCost": "₹7000-9000",
        "overallBestTime": "October to March"
    })
}

/// Chat-completion reply whose first tool call carries `arguments`
pub fn tool_call_completion(arguments: Value) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "finish_reason": "tool_calls",
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {
                        "name": "generate_route",
                        "arguments": arguments
                    }
                }]
            }
        }]
    })
}

pub fn paris_geocoding() -> Value {
    json!({
        "results": [{
            "id": 2988507,
            "name": "Paris",
            "latitude": 48.85,
            "longitude": 2.35,
            "country": "France",
            "country_code": "FR"
        }],
        "generationtime_ms": 0.9
    })
}

pub fn paris_forecast() -> Value {
    json!({
        "latitude": 48.86,
        "longitude": 2.34,
        "timezone": "Europe/Paris",
        "current": {
            "time": "2026-10-17T14:00",
            "interval": 900,
            "temperature_2m": 18.6,
            "weather_code": 3,
            "wind_speed_10m": 12.4
        }
    })
}
