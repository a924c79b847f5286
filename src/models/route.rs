//! Route request and itinerary models
//!
//! The itinerary types are the strict deserialization boundary for the AI
//! gateway's tool-call payload: anything that does not match them is rejected
//! before it reaches a caller.

use serde::de::IntoDeserializer;
use serde::de::value::StrDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::WanderlyError;

/// Lower bound of the stop count requested from the model
pub const MIN_STOPS: usize = 4;
/// Upper bound of the stop count requested from the model
pub const MAX_STOPS: usize = 6;
/// Popularity ratings are on a 1-5 scale
pub const POPULARITY_RANGE: std::ops::RangeInclusive<f64> = 1.0..=5.0;
/// Waypoint limit of the map renderer
pub const MAX_MAP_WAYPOINTS: usize = 8;

/// Kind of stop along a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Transport,
    Attraction,
    Restaurant,
    Accommodation,
}

impl StopType {
    pub const ALL: [StopType; 4] = [
        StopType::Transport,
        StopType::Attraction,
        StopType::Restaurant,
        StopType::Accommodation,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StopType::Transport => "transport",
            StopType::Attraction => "attraction",
            StopType::Restaurant => "restaurant",
            StopType::Accommodation => "accommodation",
        }
    }

    /// Stops a traveller visits in person and that can be routed through on a map
    #[must_use]
    pub fn is_waypoint(self) -> bool {
        matches!(self, StopType::Attraction | StopType::Restaurant)
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of a journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    #[serde(rename = "type")]
    pub kind: StopType,
    pub title: String,
    /// Free-form duration, e.g. "2h 30min"
    pub time: String,
    /// Free-form currency amount, e.g. "₹1000-1500"
    pub cost: String,
    pub description: String,
    /// Rating in `POPULARITY_RANGE`
    pub popularity: f64,
    pub best_time_to_visit: String,
}

impl RouteStop {
    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), WanderlyError> {
        if self.title.trim().is_empty() {
            return Err(WanderlyError::malformed("Stop title cannot be empty"));
        }

        if !self.popularity.is_finite() || !POPULARITY_RANGE.contains(&self.popularity) {
            return Err(WanderlyError::malformed(format!(
                "Popularity of '{}' must be between 1 and 5, got {}",
                self.title, self.popularity
            )));
        }

        Ok(())
    }
}

/// Ordered stops plus aggregate trip metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteItinerary {
    /// Stops in travel order
    pub stops: Vec<RouteStop>,
    pub total_duration: String,
    pub total_cost: String,
    pub overall_best_time: String,
}

impl RouteItinerary {
    /// Check every stop, in order, reporting the first violation
    pub fn validate(&self) -> Result<(), WanderlyError> {
        if self.stops.is_empty() {
            return Err(WanderlyError::malformed("Itinerary contains no stops"));
        }

        for (index, stop) in self.stops.iter().enumerate() {
            stop.validate().map_err(|e| match e {
                WanderlyError::MalformedResponse { message } => {
                    WanderlyError::malformed(format!("Stop {}: {message}", index + 1))
                }
                other => other,
            })?;
        }

        Ok(())
    }

    /// Whether the stop count is within the range the model is asked for
    #[must_use]
    pub fn has_target_stop_count(&self) -> bool {
        (MIN_STOPS..=MAX_STOPS).contains(&self.stops.len())
    }

    /// Stops of one kind, in travel order
    pub fn stops_of_type(&self, kind: StopType) -> impl Iterator<Item = &RouteStop> {
        self.stops.iter().filter(move |stop| stop.kind == kind)
    }

    /// Titles of attraction and restaurant stops to route through, capped at
    /// `MAX_MAP_WAYPOINTS`
    #[must_use]
    pub fn map_waypoints(&self) -> Vec<&str> {
        self.stops
            .iter()
            .filter(|stop| stop.kind.is_waypoint())
            .take(MAX_MAP_WAYPOINTS)
            .map(|stop| stop.title.as_str())
            .collect()
    }

    /// Append a user-chosen stop at the end of the route
    pub fn add_stop(&mut self, stop: RouteStop) -> Result<(), WanderlyError> {
        stop.validate()
            .map_err(|e| WanderlyError::validation(e.user_message()))?;
        self.stops.push(stop);
        Ok(())
    }
}

/// Trip budget level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetLevel {
    Budget,
    Moderate,
    Luxury,
}

/// Trip pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pace {
    Relaxed,
    Moderate,
    #[serde(rename = "Fast-paced")]
    FastPaced,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetLevel::Budget => "Budget",
            BudgetLevel::Moderate => "Moderate",
            BudgetLevel::Luxury => "Luxury",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Pace::Relaxed => "Relaxed",
            Pace::Moderate => "Moderate",
            Pace::FastPaced => "Fast-paced",
        };
        f.write_str(label)
    }
}

/// Optional traveller preferences. Empty strings mean "no preference".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePreferences {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub budget: Option<BudgetLevel>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pace: Option<Pace>,
}

impl RoutePreferences {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.pace.is_none()
            && self.interests.iter().all(|i| i.trim().is_empty())
    }
}

/// Incoming route generation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(default)]
    pub start_location: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub preferences: Option<RoutePreferences>,
}

impl RouteRequest {
    pub fn new(start_location: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            start_location: start_location.into(),
            destination: destination.into(),
            preferences: None,
        }
    }

    #[must_use]
    pub fn with_preferences(mut self, preferences: RoutePreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Both endpoints must be non-blank
    pub fn validate(&self) -> Result<(), WanderlyError> {
        if self.start_location.trim().is_empty() {
            return Err(WanderlyError::validation("Start location is required"));
        }
        if self.destination.trim().is_empty() {
            return Err(WanderlyError::validation("Destination is required"));
        }
        Ok(())
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let de: StrDeserializer<'_, D::Error> = value.into_deserializer();
            T::deserialize(de).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn stop(kind: StopType, title: &str) -> RouteStop {
        RouteStop {
            kind,
            title: title.to_string(),
            time: "1h".to_string(),
            cost: "₹500".to_string(),
            description: "A stop".to_string(),
            popularity: 4.0,
            best_time_to_visit: "Year-round".to_string(),
        }
    }

    fn itinerary(stops: Vec<RouteStop>) -> RouteItinerary {
        RouteItinerary {
            stops,
            total_duration: "2 days".to_string(),
            total_cost: "₹5000-7000".to_string(),
            overall_best_time: "October-March".to_string(),
        }
    }

    #[test]
    fn test_stop_deserializes_wire_names() {
        let stop: RouteStop = serde_json::from_value(json!({
            "type": "attraction",
            "title": "Amber Fort",
            "time": "3h",
            "cost": "₹200",
            "description": "Hilltop fort",
            "popularity": 5,
            "bestTimeToVisit": "November-February"
        }))
        .unwrap();

        assert_eq!(stop.kind, StopType::Attraction);
        assert_eq!(stop.popularity, 5.0);
        assert_eq!(stop.best_time_to_visit, "November-February");
    }

    #[rstest]
    #[case::unknown_type(json!({
        "type": "museum", "title": "x", "time": "1h", "cost": "₹1",
        "description": "", "popularity": 3, "bestTimeToVisit": "any"
    }))]
    #[case::missing_field(json!({
        "type": "restaurant", "title": "x", "time": "1h", "cost": "₹1",
        "description": "", "popularity": 3
    }))]
    #[case::null_field(json!({
        "type": "restaurant", "title": null, "time": "1h", "cost": "₹1",
        "description": "", "popularity": 3, "bestTimeToVisit": "any"
    }))]
    #[case::string_popularity(json!({
        "type": "restaurant", "title": "x", "time": "1h", "cost": "₹1",
        "description": "", "popularity": "high", "bestTimeToVisit": "any"
    }))]
    fn test_stop_rejects_malformed_payloads(#[case] payload: serde_json::Value) {
        assert!(serde_json::from_value::<RouteStop>(payload).is_err());
    }

    #[rstest]
    #[case(0.5, false)]
    #[case(1.0, true)]
    #[case(4.5, true)]
    #[case(5.0, true)]
    #[case(5.1, false)]
    #[case(f64::NAN, false)]
    fn test_popularity_bounds(#[case] popularity: f64, #[case] valid: bool) {
        let mut s = stop(StopType::Attraction, "Hawa Mahal");
        s.popularity = popularity;
        assert_eq!(s.validate().is_ok(), valid);
    }

    #[test]
    fn test_itinerary_validation_reports_stop_index() {
        let mut bad = stop(StopType::Restaurant, " ");
        bad.popularity = 3.0;
        let route = itinerary(vec![stop(StopType::Transport, "Train"), bad]);

        let err = route.validate().unwrap_err();
        assert!(matches!(err, WanderlyError::MalformedResponse { .. }));
        assert!(err.to_string().contains("Stop 2"));
    }

    #[test]
    fn test_empty_itinerary_is_invalid() {
        assert!(itinerary(Vec::new()).validate().is_err());
    }

    #[test]
    fn test_stops_of_type_keeps_order() {
        let route = itinerary(vec![
            stop(StopType::Restaurant, "Lunch"),
            stop(StopType::Transport, "Train"),
            stop(StopType::Restaurant, "Dinner"),
        ]);

        let titles: Vec<_> = route
            .stops_of_type(StopType::Restaurant)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Lunch", "Dinner"]);
    }

    #[test]
    fn test_map_waypoints_filters_and_caps() {
        let mut stops = vec![stop(StopType::Transport, "Flight")];
        for i in 0..10 {
            stops.push(stop(StopType::Attraction, &format!("Sight {i}")));
        }
        stops.push(stop(StopType::Accommodation, "Hotel"));
        let route = itinerary(stops);

        let waypoints = route.map_waypoints();
        assert_eq!(waypoints.len(), MAX_MAP_WAYPOINTS);
        assert_eq!(waypoints[0], "Sight 0");
        assert!(!waypoints.contains(&"Flight"));
    }

    #[test]
    fn test_add_stop_appends_and_validates() {
        let mut route = itinerary(vec![stop(StopType::Transport, "Train")]);
        route.add_stop(stop(StopType::Attraction, "Lake Pichola")).unwrap();
        assert_eq!(route.stops.last().unwrap().title, "Lake Pichola");

        let mut bad = stop(StopType::Attraction, "Bad");
        bad.popularity = 9.0;
        let err = route.add_stop(bad).unwrap_err();
        assert!(matches!(err, WanderlyError::Validation { .. }));
        assert_eq!(route.stops.len(), 2);
    }

    #[test]
    fn test_target_stop_count() {
        let four = itinerary((0..4).map(|i| stop(StopType::Attraction, &i.to_string())).collect());
        let seven = itinerary((0..7).map(|i| stop(StopType::Attraction, &i.to_string())).collect());
        assert!(four.has_target_stop_count());
        assert!(!seven.has_target_stop_count());
    }

    #[test]
    fn test_preferences_treat_empty_strings_as_absent() {
        let prefs: RoutePreferences = serde_json::from_value(json!({
            "budget": "",
            "interests": ["food", "history"],
            "pace": "Fast-paced"
        }))
        .unwrap();

        assert_eq!(prefs.budget, None);
        assert_eq!(prefs.pace, Some(Pace::FastPaced));
        assert_eq!(prefs.interests.len(), 2);
    }

    #[test]
    fn test_preferences_reject_unknown_budget() {
        let result = serde_json::from_value::<RoutePreferences>(json!({ "budget": "Cheap" }));
        assert!(result.is_err());
    }

    #[rstest]
    #[case("", "Goa", false)]
    #[case("Delhi", "  ", false)]
    #[case("Delhi", "Goa", true)]
    fn test_route_request_validation(
        #[case] start: &str,
        #[case] destination: &str,
        #[case] valid: bool,
    ) {
        assert_eq!(RouteRequest::new(start, destination).validate().is_ok(), valid);
    }
}
