//! Per-user response-time aggregation over the raw event log.

use std::collections::HashMap;

use super::events::Event;

#[derive(Debug, Clone, PartialEq)]
pub struct UserAggregate {
    pub user_id: String,
    pub total_response_time: f64,
    pub sample_count: usize,
    pub average: f64,
}

/// Single pass over the log. Each event with a decodable sample payload adds
/// its sample sum and sample count to that user's running totals; everything
/// else is skipped silently. Users appear in first-seen order so downstream
/// ranking stays stable on ties.
pub fn aggregate(events: &[Event]) -> Vec<UserAggregate> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (f64, usize)> = HashMap::new();

    for event in events {
        let Some(samples) = event.decode_samples() else {
            continue;
        };
        if samples.is_empty() {
            // An empty array contributes nothing and must not create a
            // zero-count aggregate.
            continue;
        }

        let user_id = &event.properties.user_id;
        if !totals.contains_key(user_id) {
            order.push(user_id.clone());
        }

        let entry = totals.entry(user_id.clone()).or_insert((0.0, 0));
        entry.0 += samples.iter().sum::<f64>();
        entry.1 += samples.len();
    }

    order
        .into_iter()
        .map(|user_id| {
            let (total, count) = totals[&user_id];
            UserAggregate {
                average: total / count as f64,
                user_id,
                total_response_time: total,
                sample_count: count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::EventStore;

    fn store(raw: &str) -> Vec<Event> {
        EventStore::from_json(raw).unwrap().into_events()
    }

    #[test]
    fn sums_sessions_into_running_totals() {
        let events = store(
            r#"[
                {"event": "exercise", "properties": {"userId": "a", "time": 1, "avgResponseTime": "[1, 2, 3]"}},
                {"event": "exercise", "properties": {"userId": "a", "time": 2, "avgResponseTime": "[3, 4, 5]"}}
            ]"#,
        );

        let aggregates = aggregate(&events);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].user_id, "a");
        assert_eq!(aggregates[0].total_response_time, 18.0);
        assert_eq!(aggregates[0].sample_count, 6);
        assert_eq!(aggregates[0].average, 3.0);
    }

    #[test]
    fn sample_counts_cover_exactly_the_decodable_events() {
        let events = store(
            r#"[
                {"event": "exercise", "properties": {"userId": "a", "time": 1, "avgResponseTime": "[1, 2]"}},
                {"event": "exercise", "properties": {"userId": "b", "time": 2, "avgResponseTime": "broken"}},
                {"event": "login", "properties": {"userId": "b", "time": 3}},
                {"event": "exercise", "properties": {"userId": "b", "time": 4, "avgResponseTime": "[7]"}}
            ]"#,
        );

        let decodable_samples: usize = events
            .iter()
            .filter_map(|event| event.decode_samples())
            .map(|samples| samples.len())
            .sum();

        let counted: usize = aggregate(&events)
            .iter()
            .map(|aggregate| aggregate.sample_count)
            .sum();

        assert_eq!(counted, decodable_samples);
        assert_eq!(counted, 3);
    }

    #[test]
    fn users_without_decodable_samples_are_excluded() {
        let events = store(
            r#"[
                {"event": "exercise", "properties": {"userId": "ghost", "time": 1, "avgResponseTime": "nope"}},
                {"event": "exercise", "properties": {"userId": "empty", "time": 2, "avgResponseTime": "[]"}},
                {"event": "exercise", "properties": {"userId": "real", "time": 3, "avgResponseTime": "[2]"}}
            ]"#,
        );

        let aggregates = aggregate(&events);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].user_id, "real");
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let events = store(
            r#"[
                {"event": "exercise", "properties": {"userId": "z", "time": 1, "avgResponseTime": "[5]"}},
                {"event": "exercise", "properties": {"userId": "a", "time": 2, "avgResponseTime": "[5]"}},
                {"event": "exercise", "properties": {"userId": "z", "time": 3, "avgResponseTime": "[5]"}}
            ]"#,
        );

        let aggregates = aggregate(&events);
        let users: Vec<&str> = aggregates
            .iter()
            .map(|aggregate| aggregate.user_id.as_str())
            .collect();
        assert_eq!(users, vec!["z", "a"]);
    }
}
