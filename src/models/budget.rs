//! Trip budget estimation from flat daily rates

use serde::{Deserialize, Serialize};

use crate::WanderlyError;

/// Largest group size accepted by the estimator
pub const MAX_TRAVELERS: u32 = 10_000;
/// Longest trip accepted by the estimator
pub const MAX_DAYS: u32 = 3_650;

/// Flat daily rates in the configured currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRates {
    /// Per day, shared by the group
    pub accommodation: u64,
    /// Per person per day
    pub food: u64,
    /// Per day, shared by the group
    pub transport: u64,
    /// Per person per day
    pub activities: u64,
}

impl Default for DailyRates {
    fn default() -> Self {
        Self {
            accommodation: 2000,
            food: 1500,
            transport: 800,
            activities: 1200,
        }
    }
}

/// Raw form input. Zero, negative and missing values count as 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRequest {
    #[serde(default)]
    pub travelers: i64,
    #[serde(default)]
    pub days: i64,
}

impl BudgetRequest {
    /// Travelers and days clamped to at least 1 and checked against the upper bounds
    pub fn normalized(&self) -> Result<(u32, u32), WanderlyError> {
        let travelers = bounded(self.travelers, MAX_TRAVELERS, "Travelers")?;
        let days = bounded(self.days, MAX_DAYS, "Days")?;
        Ok((travelers, days))
    }
}

fn bounded(value: i64, max: u32, field: &str) -> Result<u32, WanderlyError> {
    u32::try_from(value.max(1))
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| WanderlyError::validation(format!("{field} cannot exceed {max}")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEstimate {
    pub travelers: u32,
    pub days: u32,
    pub accommodation: u64,
    pub food: u64,
    pub transport: u64,
    pub activities: u64,
    pub total: u64,
    pub per_person: f64,
}

impl BudgetEstimate {
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate(request: BudgetRequest, rates: DailyRates) -> Result<Self, WanderlyError> {
        let (travelers, days) = request.normalized()?;
        let (t, d) = (u64::from(travelers), u64::from(days));
        let overflow = || WanderlyError::validation("Budget estimate is too large");

        let accommodation = rates.accommodation.checked_mul(d).ok_or_else(overflow)?;
        let food = rates
            .food
            .checked_mul(d)
            .and_then(|v| v.checked_mul(t))
            .ok_or_else(overflow)?;
        let transport = rates.transport.checked_mul(d).ok_or_else(overflow)?;
        let activities = rates
            .activities
            .checked_mul(d)
            .and_then(|v| v.checked_mul(t))
            .ok_or_else(overflow)?;
        let total = [food, transport, activities]
            .into_iter()
            .try_fold(accommodation, u64::checked_add)
            .ok_or_else(overflow)?;

        Ok(Self {
            travelers,
            days,
            accommodation,
            food,
            transport,
            activities,
            total,
            per_person: total as f64 / t as f64,
        })
    }
}

/// Estimate a trip budget with the default daily rates
pub fn estimate_budget(request: BudgetRequest) -> Result<BudgetEstimate, WanderlyError> {
    BudgetEstimate::calculate(request, DailyRates::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_trip() {
        let estimate = estimate_budget(BudgetRequest {
            travelers: 2,
            days: 3,
        })
        .unwrap();

        assert_eq!(estimate.accommodation, 6000);
        assert_eq!(estimate.food, 9000);
        assert_eq!(estimate.transport, 2400);
        assert_eq!(estimate.activities, 7200);
        assert_eq!(estimate.total, 24600);
        assert_eq!(estimate.per_person, 12300.0);
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::negative(-3, -1)]
    #[case::most_negative(i64::MIN, i64::MIN)]
    fn test_small_inputs_clamp_to_one(#[case] travelers: i64, #[case] days: i64) {
        let estimate = estimate_budget(BudgetRequest { travelers, days }).unwrap();
        assert_eq!(estimate.travelers, 1);
        assert_eq!(estimate.days, 1);
        assert_eq!(estimate.total, 2000 + 1500 + 800 + 1200);
        assert_eq!(estimate.per_person, 5500.0);
    }

    #[test]
    fn test_negative_travelers_with_valid_days() {
        let estimate = estimate_budget(BudgetRequest {
            travelers: -3,
            days: 2,
        })
        .unwrap();
        assert_eq!(estimate.travelers, 1);
        assert_eq!(estimate.total, 11000);
    }

    #[test]
    fn test_uneven_per_person_split() {
        let estimate = estimate_budget(BudgetRequest {
            travelers: 3,
            days: 1,
        })
        .unwrap();
        // 2000 + 4500 + 800 + 3600 = 10900
        assert_eq!(estimate.total, 10900);
        assert!((estimate.per_person - 3633.333).abs() < 0.001);
    }

    #[test]
    fn test_upper_bounds_are_accepted() {
        let estimate = estimate_budget(BudgetRequest {
            travelers: i64::from(MAX_TRAVELERS),
            days: i64::from(MAX_DAYS),
        })
        .unwrap();
        let (t, d) = (u64::from(MAX_TRAVELERS), u64::from(MAX_DAYS));
        assert_eq!(estimate.total, 2800 * d + 2700 * d * t);
    }

    #[rstest]
    #[case::u32_max(i64::from(u32::MAX), i64::from(u32::MAX))]
    #[case::i64_max(i64::MAX, 1)]
    #[case::too_many_travelers(i64::from(MAX_TRAVELERS) + 1, 1)]
    #[case::too_many_days(1, i64::from(MAX_DAYS) + 1)]
    fn test_oversized_inputs_are_rejected(#[case] travelers: i64, #[case] days: i64) {
        let result = estimate_budget(BudgetRequest { travelers, days });
        assert!(matches!(result, Err(WanderlyError::Validation { .. })));
    }

    #[test]
    fn test_rate_overflow_is_rejected() {
        let rates = DailyRates {
            food: u64::MAX,
            ..DailyRates::default()
        };
        let result = BudgetEstimate::calculate(BudgetRequest { travelers: 2, days: 2 }, rates);
        assert!(matches!(result, Err(WanderlyError::Validation { .. })));
    }
}
