//! Event classification
//!
//! Pure, synchronous partitioning of the event collection into the five
//! tab views, plus the presenter-history query. Safe to call on every
//! refresh; no shared state.

pub mod recurrence;
pub mod time;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{CategorizedEvents, Event, User};

/// At most this many recurring-meeting occurrences surface in the
/// upcoming view, however many exist on the calendar.
const UPCOMING_RECURRING_LIMIT: usize = 2;

/// Partition the event collection into the five tab views.
///
/// `today` is the caller's reference date so the split is reproducible;
/// `current_user` is optional and only affects the "mine" view.
pub fn categorize_events(
    events: &[Event],
    current_user: Option<&User>,
    today: NaiveDate,
) -> CategorizedEvents {
    let mut views = CategorizedEvents::default();

    // Upcoming: plain events pass straight through the filters; the
    // recurring weekly meeting is deduplicated per day and capped.
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|e| !e.matches_recurring_pattern())
        .filter(|e| e.is_on_or_after(today) && e.is_visible_to_members() && !e.is_cancelled)
        .cloned()
        .collect();
    upcoming.extend(upcoming_recurring(events, today));
    upcoming.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    views.upcoming = upcoming;

    // Past: recurring-pattern events are skipped unconditionally,
    // whatever their date or approval state. Cancelled events never
    // appear here either.
    views.past = events
        .iter()
        .filter(|e| !e.matches_recurring_pattern())
        .filter(|e| e.date < today && e.is_visible_to_members() && !e.is_cancelled)
        .cloned()
        .collect();
    views.past.sort_by(|a, b| b.date.cmp(&a.date));

    // Mine: ownership or presentership only. Deliberately no approval or
    // cancellation filter, unlike every other view.
    if let Some(user) = current_user {
        views.mine = events
            .iter()
            .filter(|e| e.involves(user.id) && e.is_on_or_after(today))
            .cloned()
            .collect();
        views.mine.sort_by(|a, b| a.date.cmp(&b.date));
    }

    views.pending = events
        .iter()
        .filter(|e| !e.is_approved && !e.is_cancelled)
        .cloned()
        .collect();

    views.cancelled = events.iter().filter(|e| e.is_cancelled).cloned().collect();

    views
}

/// Candidate recurring occurrences for the upcoming view: approved,
/// not cancelled, today or later, one per calendar day (a
/// presentation-flagged duplicate wins the day), earliest first, capped.
fn upcoming_recurring(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut by_day: BTreeMap<NaiveDate, Event> = BTreeMap::new();

    for event in events.iter().filter(|e| e.matches_recurring_pattern()) {
        if !(event.is_on_or_after(today) && event.is_visible_to_members() && !event.is_cancelled) {
            continue;
        }
        match by_day.get(&event.date) {
            // Keep the existing entry unless the newcomer is the
            // presentation meeting and the incumbent is not.
            Some(existing) if existing.is_presentation_meeting || !event.is_presentation_meeting => {}
            _ => {
                by_day.insert(event.date, event.clone());
            }
        }
    }

    by_day.into_values().take(UPCOMING_RECURRING_LIMIT).collect()
}

#[derive(Debug, Clone)]
pub struct PresenterRecord {
    pub event: Event,
    /// `None` when the presenter id did not resolve; the caller decides
    /// how to render an unknown presenter.
    pub presenter: Option<User>,
}

/// Recurring presentation meetings that already took place, newest first,
/// each paired with its resolved presenter.
pub fn presenter_history<F>(events: &[Event], today: NaiveDate, resolve: F) -> Vec<PresenterRecord>
where
    F: Fn(Uuid) -> Option<User>,
{
    let mut past_presentations: Vec<&Event> = events
        .iter()
        .filter(|e| e.matches_recurring_pattern())
        .filter(|e| e.is_presentation_meeting && e.presenter.is_some() && e.date < today)
        .collect();
    past_presentations.sort_by(|a, b| b.date.cmp(&a.date));

    past_presentations
        .into_iter()
        .map(|event| PresenterRecord {
            presenter: event.presenter.and_then(&resolve),
            event: event.clone(),
        })
        .collect()
}
