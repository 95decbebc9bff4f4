//! Formatting helpers for presenting metrics.

pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}
