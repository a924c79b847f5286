//! Route generation through a forced tool call on an AI chat-completion gateway
//!
//! The model is constrained to emit exactly one `generate_route` call whose
//! arguments are parsed straight into `RouteItinerary`. Nothing is retried.

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::WanderlyError;
use crate::config::AiConfig;
use crate::models::{RouteItinerary, RouteRequest};

pub mod gateway;
pub mod prompt;
pub mod schema;

pub use gateway::{AiGatewayClient, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use prompt::PromptFraming;
pub use schema::{ROUTE_TOOL_NAME, route_tool};

use gateway::ToolChoice;

/// Stateless per-request itinerary generator
pub struct RouteGenerationService {
    gateway: AiGatewayClient,
    model: String,
    framing: PromptFraming,
}

impl RouteGenerationService {
    pub fn new(config: &AiConfig) -> anyhow::Result<Self> {
        Ok(Self {
            gateway: AiGatewayClient::new(config)?,
            model: config.model.clone(),
            framing: PromptFraming::from(config),
        })
    }

    /// Generate an itinerary from `request.start_location` to `request.destination`
    #[instrument(
        skip(self, request),
        fields(start = %request.start_location, destination = %request.destination)
    )]
    pub async fn generate(&self, request: &RouteRequest) -> Result<RouteItinerary, WanderlyError> {
        request.validate()?;
        info!(
            "Generating route from {} to {}",
            request.start_location, request.destination
        );

        let completion = self.gateway.complete(&self.build_request(request)).await?;
        let itinerary = extract_itinerary(&completion)?;

        if !itinerary.has_target_stop_count() {
            warn!(
                "Generated route has {} stops, outside the requested range",
                itinerary.stops.len()
            );
        }
        info!(
            "Generated route with {} stops ({}, {})",
            itinerary.stops.len(),
            itinerary.total_duration,
            itinerary.total_cost
        );

        Ok(itinerary)
    }

    /// Chat-completion request with the route tool forced
    #[must_use]
    pub fn build_request(&self, request: &RouteRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.framing.system_prompt()),
                ChatMessage::user(self.framing.user_prompt(request)),
            ],
            tools: vec![route_tool(&self.framing.currency_symbol)],
            tool_choice: ToolChoice::function(ROUTE_TOOL_NAME),
        }
    }
}

/// Parse and validate the first tool call's arguments
pub fn extract_itinerary(
    completion: &ChatCompletionResponse,
) -> Result<RouteItinerary, WanderlyError> {
    let call = completion.first_tool_call().ok_or_else(|| {
        match completion.first_text() {
            Some(text) => {
                error!("AI gateway answered with text instead of a tool call: {}", text);
            }
            None => error!("AI gateway reply contained no tool call"),
        }
        WanderlyError::malformed("No route data generated")
    })?;

    if let Some(name) = call.function.name.as_deref() {
        if name != ROUTE_TOOL_NAME {
            error!("AI gateway called unexpected tool '{}'", name);
            return Err(WanderlyError::malformed("No route data generated"));
        }
    }

    let parsed = match &call.function.arguments {
        Value::String(raw) => serde_json::from_str::<RouteItinerary>(raw),
        other => serde_json::from_value::<RouteItinerary>(other.clone()),
    };

    let itinerary = parsed.map_err(|e| {
        error!("Tool call arguments do not match the route schema: {}", e);
        debug!("Rejected arguments: {}", call.function.arguments);
        WanderlyError::malformed("Generated route data was invalid")
    })?;

    itinerary.validate().inspect_err(|e| {
        error!("Generated route failed validation: {}", e);
    })?;

    Ok(itinerary)
}
