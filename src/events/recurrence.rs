//! Recurring-meeting backfill
//!
//! Guarantees every occurrence of the weekly meeting exists on the
//! calendar for the configured horizon. Runs at most once per
//! initializer instance; only administrators trigger it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Datelike, Duration, NaiveDate};
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::models::{BackfillOutcome, Event, NewEvent, RecurrenceSettings, User, SYSTEM_USER_ID};
use crate::store::EventWriter;

/// Creation requests in flight at once during a backfill batch.
const MAX_IN_FLIGHT_CREATES: usize = 8;

pub struct RecurrenceInitializer {
    settings: RecurrenceSettings,
    initialized: AtomicBool,
}

impl RecurrenceInitializer {
    pub fn new(settings: RecurrenceSettings) -> Self {
        Self {
            settings,
            initialized: AtomicBool::new(false),
        }
    }

    /// Whether a backfill pass has already run on this instance.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn settings(&self) -> &RecurrenceSettings {
        &self.settings
    }

    /// Create every missing occurrence of the weekly meeting between
    /// `today` and the configured horizon, inclusive.
    ///
    /// Returns `None` without doing anything when the caller is not an
    /// administrator, when a pass already ran, or when the event
    /// collection is empty (an empty collection is taken to mean the
    /// data has not loaded yet). Otherwise returns the aggregate batch
    /// outcome; per-item creation failures are counted there, never
    /// raised. The instance is marked initialized after enumeration even
    /// if some creations failed — the next session retries.
    pub async fn ensure_occurrences<W>(
        &self,
        is_admin: bool,
        events: &[Event],
        writer: &W,
        current_user: Option<&User>,
        today: NaiveDate,
    ) -> Option<BackfillOutcome>
    where
        W: EventWriter + ?Sized,
    {
        if !is_admin {
            debug!("Skipping recurrence backfill: caller is not an administrator");
            return None;
        }
        if self.is_initialized() {
            debug!("Skipping recurrence backfill: already ran this session");
            return None;
        }
        if events.is_empty() {
            debug!("Skipping recurrence backfill: event collection is empty, assuming data is still loading");
            return None;
        }

        // Case-sensitive on purpose; the classifier's recurring-pattern
        // match is the case-insensitive one.
        let occupied: HashSet<NaiveDate> = events
            .iter()
            .filter(|e| e.name.contains(&self.settings.meeting_name))
            .map(|e| e.date)
            .collect();

        let missing: Vec<NaiveDate> = self
            .target_dates(today)
            .into_iter()
            .filter(|date| !occupied.contains(date))
            .collect();

        let created_by = current_user.map(|u| u.id).unwrap_or(SYSTEM_USER_ID);
        let mut outcome = BackfillOutcome::new(missing.len());

        if missing.is_empty() {
            info!(
                "All '{}' occurrences through {} already exist",
                self.settings.meeting_name,
                today + Duration::days(self.settings.horizon_days)
            );
        } else {
            info!(
                "Backfilling {} missing '{}' occurrences",
                missing.len(),
                self.settings.meeting_name
            );

            let results: Vec<(NaiveDate, crate::error::AppResult<Event>)> = stream::iter(missing)
                .map(|date| {
                    let draft = self.draft_for(date, created_by);
                    async move { (date, writer.create_event(draft).await) }
                })
                .buffer_unordered(MAX_IN_FLIGHT_CREATES)
                .collect()
                .await;

            for (date, result) in results {
                match result {
                    Ok(event) => {
                        debug!("Created '{}' occurrence on {}", event.name, date);
                        outcome.record_created();
                    }
                    Err(e) => {
                        warn!("Failed to create occurrence on {}: {}", date, e);
                        outcome.record_failure(format!("{}: {}", date, e));
                    }
                }
            }
        }

        self.initialized.store(true, Ordering::SeqCst);
        Some(outcome)
    }

    /// Every date on the configured weekday in `[today, today + horizon]`.
    fn target_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let end = today + Duration::days(self.settings.horizon_days);
        let days_ahead = (7 + self.settings.weekday.num_days_from_monday() as i64
            - today.weekday().num_days_from_monday() as i64)
            % 7;

        let mut date = today + Duration::days(days_ahead);
        let mut dates = Vec::new();
        while date <= end {
            dates.push(date);
            date += Duration::days(7);
        }
        dates
    }

    fn draft_for(&self, date: NaiveDate, created_by: Uuid) -> NewEvent {
        NewEvent {
            name: self.settings.meeting_name.clone(),
            date,
            start_time: self.settings.start_time.clone(),
            end_time: self.settings.end_time.clone(),
            location: self.settings.location.clone(),
            description: self.settings.description.clone(),
            created_by,
            presenter: None,
            is_approved: true,
            is_featured: false,
            is_presentation_meeting: false,
        }
    }
}
