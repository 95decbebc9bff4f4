//! Drill-down dataset for one selected user: eligible session extraction,
//! display dates, and jittered per-session x axes.

use rand::Rng;
use time::{macros::format_description, OffsetDateTime};

use super::events::Event;

/// Spread width of the jitter band, in axis units per session offset.
pub const JITTER_FACTOR: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionDate {
    pub epoch_seconds: i64,
    pub label: String,
}

/// One eligible session's scatter trace. `x` is the shared per-session date
/// axis perturbed with this session's spread factor; `samples` are the raw
/// response times recorded under its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSeries {
    pub index: usize,
    pub x: Vec<f64>,
    pub samples: Vec<f64>,
}

impl SessionSeries {
    pub fn name(&self) -> String {
        format!("Session: {}", self.index + 1)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrilldownDataset {
    pub user_id: String,
    /// One entry per eligible session, in lockstep with `sessions`.
    pub dates: Vec<SessionDate>,
    pub sessions: Vec<SessionSeries>,
}

/// Builds the drill-down for `user_id`. An event is eligible when it is an
/// `"exercise"` event whose sample payload decodes; ineligible events drop
/// out of both `dates` and `sessions` so the two stay positionally aligned.
///
/// The random source is injected so renders can use `thread_rng()` while
/// tests seed a `StdRng`.
pub fn build_drilldown<R: Rng>(
    events: &[Event],
    user_id: &str,
    rng: &mut R,
) -> DrilldownDataset {
    let mut dates: Vec<SessionDate> = Vec::new();
    let mut sample_sets: Vec<Vec<f64>> = Vec::new();

    for event in events {
        if event.properties.user_id != user_id {
            continue;
        }
        if event.event != "exercise" {
            continue;
        }
        let Some(samples) = event.decode_samples() else {
            continue;
        };

        dates.push(SessionDate {
            epoch_seconds: event.properties.time,
            label: format_session_date(event.properties.time),
        });
        sample_sets.push(samples);
    }

    let session_count = sample_sets.len();
    let sessions = sample_sets
        .into_iter()
        .enumerate()
        .map(|(index, samples)| {
            let spread = (index + 1) as f64 - session_count as f64 / 2.0;
            let x = dates
                .iter()
                .map(|date| {
                    let jitter = (rng.gen::<f64>() - 0.5) * JITTER_FACTOR;
                    date.epoch_seconds as f64 + jitter * spread
                })
                .collect();
            SessionSeries { index, x, samples }
        })
        .collect();

    DrilldownDataset {
        user_id: user_id.to_string(),
        dates,
        sessions,
    }
}

/// Formats an epoch stamp as `MM DD, YYYY, at HH:MM:SS` (24-hour, UTC).
pub fn format_session_date(epoch_seconds: i64) -> String {
    OffsetDateTime::from_unix_timestamp(epoch_seconds)
        .ok()
        .and_then(|stamp| {
            stamp
                .format(&format_description!(
                    "[month] [day], [year], at [hour]:[minute]:[second]"
                ))
                .ok()
        })
        .unwrap_or_else(|| "—".to_string())
}
