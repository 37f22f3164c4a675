//! Report-level row filters.
//!
//! A filter is supplied per report render by the presentation layer and
//! derives a new record vector; the clean set itself is never mutated, so
//! filter ordering and reuse stay safe under a reactive caller.

use chrono::NaiveDate;
use delivery_core::models::OrderRecord;

/// Predicates narrowing the clean set for one report render.
///
/// `None` for a criterion means "no restriction". The traffic and weather
/// sets match against the normalized (trimmed / last-token) values.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Keep records strictly before this order date.
    pub order_date_before: Option<NaiveDate>,
    /// Accepted road-traffic-density values.
    pub traffic_densities: Option<Vec<String>>,
    /// Accepted weather-condition values.
    pub weather_conditions: Option<Vec<String>>,
}

impl ReportFilter {
    /// Whether a single record passes every configured predicate.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        if let Some(cutoff) = self.order_date_before {
            if record.order_date >= cutoff {
                return false;
            }
        }
        if let Some(accepted) = &self.traffic_densities {
            if !accepted.iter().any(|t| t == &record.road_traffic_density) {
                return false;
            }
        }
        if let Some(accepted) = &self.weather_conditions {
            if !accepted.iter().any(|w| w == &record.weather_condition) {
                return false;
            }
        }
        true
    }

    /// Derive the filtered view of `records`, preserving order.
    pub fn apply(&self, records: &[OrderRecord]) -> Vec<OrderRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
