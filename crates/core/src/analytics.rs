//! Admin analytics.
//!
//! The figures are a fixed snapshot. The requested time range is resolved and logged but does
//! not change the data, and saved preferences are acknowledged without being stored.

use crate::constants::PREFERENCES_UPDATED;
use api_shared::{AnalyticsRes, MessageRes, TimeRange};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AnalyticsBoard {
    snapshot: Arc<AnalyticsRes>,
}

impl AnalyticsBoard {
    pub fn new(snapshot: AnalyticsRes) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    pub fn snapshot(&self, range: TimeRange) -> AnalyticsRes {
        tracing::debug!(time_range = %range, "serving analytics snapshot");
        self.snapshot.as_ref().clone()
    }

    pub fn update_preferences(&self, preferences: &serde_json::Value) -> MessageRes {
        let keys: Vec<&str> = preferences
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        tracing::info!(?keys, "analytics preferences received");

        MessageRes {
            message: PREFERENCES_UPDATED.into(),
        }
    }
}

/// Resolve the `timeRange` query parameter. Missing or unknown values fall back to `6m`.
pub fn resolve_time_range(raw: Option<&str>) -> TimeRange {
    match raw {
        None => TimeRange::default(),
        Some(value) => value.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}; using {}", TimeRange::default());
            TimeRange::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_snapshot_ignores_time_range() {
        let board = AnalyticsBoard::new(seed::analytics());
        let month = board.snapshot(TimeRange::OneMonth);
        let year = board.snapshot(TimeRange::OneYear);

        assert_eq!(month, year);
        assert_eq!(month.summary.total_patients, 1250);
        assert_eq!(month.summary.growth.chats, -3);
        assert_eq!(month.appointments.len(), 6);
    }

    #[test]
    fn test_resolve_time_range_defaults_to_six_months() {
        assert_eq!(resolve_time_range(None), TimeRange::SixMonths);
        assert_eq!(resolve_time_range(Some("fortnight")), TimeRange::SixMonths);
        assert_eq!(resolve_time_range(Some("3m")), TimeRange::ThreeMonths);
    }

    #[test]
    fn test_update_preferences_acknowledges_any_json() {
        let board = AnalyticsBoard::new(seed::analytics());
        let ack = board.update_preferences(&serde_json::json!({"layout": "compact"}));
        assert_eq!(ack.message, "Preferences updated successfully");

        let ack = board.update_preferences(&serde_json::json!([1, 2, 3]));
        assert_eq!(ack.message, "Preferences updated successfully");
    }
}
