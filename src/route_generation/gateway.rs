//! OpenAI-compatible chat-completion gateway client
//!
//! Only the subset of the wire format needed for forced tool calls is modelled.

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::WanderlyError;
use crate::config::AiConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionDefinition,
}

impl ToolDefinition {
    #[must_use]
    pub fn function(function: FunctionDefinition) -> Self {
        Self {
            kind: "function",
            function,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolChoiceFunction {
    pub name: String,
}

/// Forces the model to call one named function
#[derive(Debug, Clone, Serialize)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: ToolChoiceFunction,
}

impl ToolChoice {
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            kind: "function",
            function: ToolChoiceFunction { name: name.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
    pub tool_choice: ToolChoice,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: Option<String>,
    /// Usually a JSON-encoded string; some gateways inline the object
    pub arguments: Value,
}

impl ChatCompletionResponse {
    /// First tool call of the first choice
    #[must_use]
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.choices
            .first()?
            .message
            .tool_calls
            .as_ref()?
            .first()
    }

    /// Non-blank text content of the first choice
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .content
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

pub struct AiGatewayClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AiGatewayClient {
    pub fn new(config: &AiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Wanderly/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
        })
    }

    /// Send one chat-completion request. Never retries.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, WanderlyError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| WanderlyError::config("AI gateway API key is not configured"))?;

        let url = format!("{}/chat/completions", self.base_url);
        debug!("AI gateway request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Network error calling AI gateway: {}", e);
                WanderlyError::upstream("Failed to generate route")
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "AI gateway error");

            return Err(match status.as_u16() {
                429 => WanderlyError::rate_limited(format!("AI gateway answered {status}")),
                402 => WanderlyError::quota_exhausted(format!("AI gateway answered {status}")),
                code => WanderlyError::upstream_status("Failed to generate route", code),
            });
        }

        let parsed = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            error!("Failed to parse AI gateway response: {}", e);
            WanderlyError::malformed("Invalid response received from AI gateway")
        })?;

        let elapsed = start_time.elapsed();
        info!("AI gateway answered in {:.3}s", elapsed.as_secs_f64());
        if elapsed.as_secs() > 30 {
            warn!("Slow AI gateway response: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(parsed)
    }
}
