//! JSON schema of the forced `generate_route` tool call

use serde_json::{Value, json};

use crate::models::StopType;
use crate::models::route::POPULARITY_RANGE;

use super::gateway::{FunctionDefinition, ToolDefinition};

/// Name of the function the model is forced to call
pub const ROUTE_TOOL_NAME: &str = "generate_route";

/// Tool definition whose parameters mirror `RouteItinerary`
#[must_use]
pub fn route_tool(currency_symbol: &str) -> ToolDefinition {
    ToolDefinition::function(FunctionDefinition {
        name: ROUTE_TOOL_NAME.to_string(),
        description: "Generate a complete travel route with stops".to_string(),
        parameters: itinerary_schema(currency_symbol),
    })
}

fn itinerary_schema(currency_symbol: &str) -> Value {
    let stop_types: Vec<&str> = StopType::ALL.iter().map(|t| t.as_str()).collect();

    json!({
        "type": "object",
        "properties": {
            "stops": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "type": {
                            "type": "string",
                            "enum": stop_types,
                            "description": "Type of stop"
                        },
                        "title": {
                            "type": "string",
                            "description": "Name of the place or activity"
                        },
                        "time": {
                            "type": "string",
                            "description": "Estimated duration (e.g., '2h 30min', '1h')"
                        },
                        "cost": {
                            "type": "string",
                            "description": format!(
                                "Estimated cost (e.g., '{currency_symbol}500', '{currency_symbol}1000-1500')"
                            )
                        },
                        "description": {
                            "type": "string",
                            "description": "Brief description of the stop"
                        },
                        "popularity": {
                            "type": "number",
                            "description": "Popularity rating from 1-5",
                            "minimum": POPULARITY_RANGE.start(),
                            "maximum": POPULARITY_RANGE.end()
                        },
                        "bestTimeToVisit": {
                            "type": "string",
                            "description": "Best time to visit (e.g., 'Spring', 'June-August', 'Year-round')"
                        }
                    },
                    "required": ["type", "title", "time", "cost", "description", "popularity", "bestTimeToVisit"]
                }
            },
            "totalDuration": {
                "type": "string",
                "description": "Total trip duration (e.g., '3 days', '1 week')"
            },
            "totalCost": {
                "type": "string",
                "description": format!(
                    "Estimated total cost range (e.g., '{currency_symbol}5000-7000')"
                )
            },
            "overallBestTime": {
                "type": "string",
                "description": "Best overall time to take this trip"
            }
        },
        "required": ["stops", "totalDuration", "totalCost", "overallBestTime"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_stop_field() {
        let tool = route_tool("₹");
        let required = &tool.function.parameters["properties"]["stops"]["items"]["required"];
        let required: Vec<&str> = required
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            vec!["type", "title", "time", "cost", "description", "popularity", "bestTimeToVisit"]
        );
    }

    #[test]
    fn test_schema_enumerates_stop_types_and_bounds() {
        let tool = route_tool("€");
        let stop = &tool.function.parameters["properties"]["stops"]["items"]["properties"];

        assert_eq!(
            stop["type"]["enum"],
            json!(["transport", "attraction", "restaurant", "accommodation"])
        );
        assert_eq!(stop["popularity"]["minimum"], 1.0);
        assert_eq!(stop["popularity"]["maximum"], 5.0);
        assert!(stop["cost"]["description"].as_str().unwrap().contains("€500"));
    }

    #[test]
    fn test_tool_serializes_as_function() {
        let value = serde_json::to_value(route_tool("₹")).unwrap();
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], ROUTE_TOOL_NAME);
    }
}
