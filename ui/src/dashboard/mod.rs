mod upload;
pub use upload::UploadPanel;

mod bars;
pub use bars::ResponseBarChart;

mod scatter;
pub use scatter::SessionScatterChart;

mod summary;
pub use summary::SelectionSummary;

use crate::core::{
    aggregate::{aggregate, UserAggregate},
    chart::{bar_chart, BarChart},
    events::{Event, EventStore},
    rank::{rank, RankedOrder},
};

/// Shared state for the dashboard: the loaded log, everything derived from
/// it, and the last load diagnostic. Derived values are recomputed from
/// scratch on every load; there is no incremental update path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub events: Vec<Event>,
    pub aggregates: Vec<UserAggregate>,
    pub ranked: RankedOrder,
    pub chart: Option<BarChart>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn loaded(store: EventStore) -> Self {
        let events = store.into_events();
        let aggregates = aggregate(&events);
        let ranked = rank(&aggregates);
        let chart = (!ranked.is_empty()).then(|| bar_chart(&ranked, &aggregates));
        Self {
            events,
            aggregates,
            ranked,
            chart,
            error: None,
        }
    }

    /// Parses a freshly read file. On failure the previous log, aggregates,
    /// and chart stay committed; only the diagnostic changes.
    pub fn apply_json(&self, raw: &str) -> Self {
        match EventStore::from_json(raw) {
            Ok(store) => Self::loaded(store),
            Err(err) => {
                let mut next = self.clone();
                next.error = Some(format!("Couldn't parse event log: {err}"));
                next
            }
        }
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = r#"[
        {"event": "exercise", "properties": {"userId": "a", "time": 100, "avgResponseTime": "[2.0, 4.0]"}},
        {"event": "exercise", "properties": {"userId": "b", "time": 200, "avgResponseTime": "[1.0]"}}
    ]"#;

    #[test]
    fn loading_derives_aggregates_ranking_and_chart() {
        let state = DashboardState::default().apply_json(LOG);
        assert!(state.error.is_none());
        assert_eq!(state.events.len(), 2);
        assert_eq!(state.ranked.descending, vec!["a", "b"]);
        assert!(state.has_chart());
    }

    #[test]
    fn a_bad_file_keeps_the_previous_chart() {
        let loaded = DashboardState::default().apply_json(LOG);
        let after = loaded.apply_json("{definitely not json");

        assert!(after.error.as_deref().unwrap().starts_with("Couldn't parse"));
        assert_eq!(after.events, loaded.events);
        assert_eq!(after.chart, loaded.chart);
    }

    #[test]
    fn a_log_with_no_decodable_samples_renders_no_chart() {
        let state = DashboardState::default()
            .apply_json(r#"[{"event": "login", "properties": {"userId": "a", "time": 1}}]"#);
        assert!(state.error.is_none());
        assert!(!state.has_chart());
        assert!(state.ranked.is_empty());
    }
}
