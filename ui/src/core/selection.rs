//! Single-selection state over the rendered bars, with toggle semantics.

use rand::Rng;

use super::aggregate::UserAggregate;
use super::drilldown::{build_drilldown, DrilldownDataset};
use super::events::Event;
use super::format;
use super::rank::RankedOrder;

/// Resting blue used on the initial render and after a deselect.
pub const DEFAULT_BAR_COLOR: &str = "rgba(31, 119, 180, 0.8)";
/// The selected bar keeps the resting blue while everything else dims.
pub const ACTIVE_BAR_COLOR: &str = DEFAULT_BAR_COLOR;
pub const INACTIVE_BAR_COLOR: &str = "gray";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

impl Selection {
    /// The transition function: re-clicking the selected user toggles off,
    /// clicking anyone else selects them directly.
    pub fn click(&self, user_id: &str) -> Selection {
        match self {
            Selection::Selected(current) if current == user_id => Selection::Unselected,
            _ => Selection::Selected(user_id.to_string()),
        }
    }

    pub fn selected_user(&self) -> Option<&str> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(user_id) => Some(user_id),
        }
    }

    pub fn is_selected(&self, user_id: &str) -> bool {
        self.selected_user() == Some(user_id)
    }
}

/// Per-bar colors in rendered (bottom-to-top) order. Unselected means the
/// uniform default, not the dimmed inactive gray.
pub fn bar_colors(selection: &Selection, ranked: &RankedOrder) -> Vec<&'static str> {
    match selection.selected_user() {
        None => vec![DEFAULT_BAR_COLOR; ranked.len()],
        Some(selected) => ranked
            .ascending
            .iter()
            .map(|user_id| {
                if user_id == selected {
                    ACTIVE_BAR_COLOR
                } else {
                    INACTIVE_BAR_COLOR
                }
            })
            .collect(),
    }
}

/// Everything one click produces. The rendering boundary applies this as a
/// side effect; computing it stays pure.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub selection: Selection,
    pub colors: Vec<&'static str>,
    pub drilldown: Option<DrilldownDataset>,
    pub summary: Option<String>,
}

/// Handles a chart click by point index. The index maps through the same
/// ascending order that produced the rendered bars; anything else would
/// silently select the wrong user. An out-of-range index leaves the current
/// state in place.
pub fn handle_click<R: Rng>(
    selection: &Selection,
    point_index: usize,
    events: &[Event],
    ranked: &RankedOrder,
    aggregates: &[UserAggregate],
    rng: &mut R,
) -> ClickOutcome {
    let Some(user_id) = ranked.user_at(point_index) else {
        return outcome_for(selection.clone(), events, ranked, aggregates, rng);
    };

    let next = selection.click(user_id);
    outcome_for(next, events, ranked, aggregates, rng)
}

fn outcome_for<R: Rng>(
    selection: Selection,
    events: &[Event],
    ranked: &RankedOrder,
    aggregates: &[UserAggregate],
    rng: &mut R,
) -> ClickOutcome {
    let colors = bar_colors(&selection, ranked);

    let (drilldown, summary) = match selection.selected_user() {
        Some(user_id) => {
            let dataset = build_drilldown(events, user_id, rng);
            let summary = aggregates
                .iter()
                .find(|aggregate| aggregate.user_id == user_id)
                .map(|aggregate| {
                    format!(
                        "Selected User: {user_id} — Average Response Time: {}",
                        format::format_average(aggregate.average)
                    )
                });
            (Some(dataset), summary)
        }
        None => (None, None),
    };

    ClickOutcome {
        selection,
        colors,
        drilldown,
        summary,
    }
}
