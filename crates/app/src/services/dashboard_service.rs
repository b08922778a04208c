//! Dashboard service — event-count summary over a rolling window.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::Serialize;

use devman_domain::error::DevManError;
use devman_domain::time::{self, Timestamp};

use crate::ports::EventRepository;

/// Length of the dashboard window, in days.
const WINDOW_DAYS: u32 = 7;

/// Aggregated event counts for the dashboard.
///
/// `events_by_type` maps the event-type string encoding to its count; a
/// sorted map keeps the serialized output deterministic. An empty window
/// yields zero counts, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub period_start: Timestamp,
    pub period_end: Timestamp,
    pub total_events: usize,
    pub events_by_type: BTreeMap<String, usize>,
}

/// Application service for the dashboard use-case.
pub struct DashboardService<ER> {
    events: ER,
}

impl<ER: EventRepository> DashboardService<ER> {
    /// Create a new service backed by the given repository.
    pub fn new(events: ER) -> Self {
        Self { events }
    }

    /// Summarize events from the last seven days, grouped by type.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_dashboard(&self) -> Result<DashboardSummary, DevManError> {
        let period_end = time::now();
        let period_start = period_end - Duration::days(i64::from(WINDOW_DAYS));

        let events = self.events.get_from_last_days(WINDOW_DAYS).await?;

        let mut events_by_type: BTreeMap<String, usize> = BTreeMap::new();
        for event in &events {
            *events_by_type
                .entry(event.event_type.as_str().to_string())
                .or_default() += 1;
        }

        Ok(DashboardSummary {
            period_start,
            period_end,
            total_events: events.len(),
            events_by_type,
        })
    }
}
