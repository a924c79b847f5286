//! Prompt construction for itinerary generation

use std::fmt::Write;

use crate::config::AiConfig;
use crate::models::route::{MAX_STOPS, MIN_STOPS};
use crate::models::{RoutePreferences, RouteRequest};

/// Regional framing applied to every prompt
#[derive(Debug, Clone, PartialEq)]
pub struct PromptFraming {
    pub region: String,
    pub currency: String,
    pub currency_symbol: String,
}

impl From<&AiConfig> for PromptFraming {
    fn from(config: &AiConfig) -> Self {
        Self {
            region: config.region.clone(),
            currency: config.currency.clone(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

impl PromptFraming {
    #[must_use]
    pub fn system_prompt(&self) -> String {
        format!(
            "You are an expert travel planner specializing in {region} destinations. \
Generate detailed travel routes with realistic information about transportation, attractions, \
restaurants, and accommodations across {region}. Include accurate cost estimates in {currency}, \
timing, and recommendations for the best time to visit considering local seasons and weather.",
            region = self.region,
            currency = self.currency,
        )
    }

    #[must_use]
    pub fn user_prompt(&self, request: &RouteRequest) -> String {
        let mut prompt = format!(
            "Create a detailed travel route from {start} to {destination}. \
Include {MIN_STOPS}-{MAX_STOPS} stops with transportation, attractions, and dining options. \
For each stop, provide:\n\
- Mode of transport (train, flight, bus, car, etc.) - use common {region} transport options\n\
- Estimated time\n\
- Estimated cost in {currency}\n\
- Popularity rating (1-5)\n\
- Best time to visit (month/season) - consider local weather patterns\n\
- Brief description with local context",
            start = request.start_location.trim(),
            destination = request.destination.trim(),
            region = self.region,
            currency = self.currency,
        );

        if let Some(preferences) = request.preferences.as_ref().filter(|p| !p.is_empty()) {
            prompt.push_str("\n\nTraveller preferences:");
            append_preferences(&mut prompt, preferences);
        }

        prompt
    }
}

fn append_preferences(prompt: &mut String, preferences: &RoutePreferences) {
    // Writing to a String cannot fail
    if let Some(budget) = preferences.budget {
        let _ = write!(prompt, "\n- Budget: {budget}");
    }

    let interests: Vec<&str> = preferences
        .interests
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect();
    if !interests.is_empty() {
        let _ = write!(prompt, "\n- Interests: {}", interests.join(", "));
    }

    if let Some(pace) = preferences.pace {
        let _ = write!(prompt, "\n- Pace: {pace}");
    }
}
