//! Display ordering of users by average response time.

use super::aggregate::UserAggregate;

/// The two views of one ranking: `descending` is worst-first by average,
/// `ascending` is its exact reverse and matches the bottom-to-top bar layout.
/// Keeping one the reverse of the other (rather than sorting twice) is what
/// guarantees click indices and bar positions agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedOrder {
    pub descending: Vec<String>,
    pub ascending: Vec<String>,
}

impl RankedOrder {
    /// Maps a chart point index (bottom-to-top) back to its user.
    pub fn user_at(&self, point_index: usize) -> Option<&str> {
        self.ascending.get(point_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.descending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descending.is_empty()
    }
}

/// Sorts by average descending with a stable sort, so ties keep the
/// aggregates' first-seen order. Non-finite averages never enter the ranking.
pub fn rank(aggregates: &[UserAggregate]) -> RankedOrder {
    let mut ranked: Vec<&UserAggregate> = aggregates
        .iter()
        .filter(|aggregate| aggregate.average.is_finite())
        .collect();
    ranked.sort_by(|a, b| b.average.total_cmp(&a.average));

    let descending: Vec<String> = ranked
        .iter()
        .map(|aggregate| aggregate.user_id.clone())
        .collect();
    let mut ascending = descending.clone();
    ascending.reverse();

    RankedOrder {
        descending,
        ascending,
    }
}
