//! Pure, platform-agnostic core: ingestion, aggregation, ranking, selection,
//! and drill-down derivation. Nothing in here touches the UI runtime.

pub mod aggregate;
pub mod chart;
pub mod drilldown;
pub mod events;
pub mod format;
pub mod rank;
pub mod selection;
