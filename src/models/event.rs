// file: src/models/event.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Name of the organization's standing weekly meeting. The classifier
/// matches this case-insensitively; the recurrence backfill checks for
/// existing occurrences with a case-sensitive substring match.
pub const RECURRING_MEETING_NAME: &str = "Tuesday Meeting";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub description: String,
    pub created_by: Uuid,
    pub presenter: Option<Uuid>,
    pub is_approved: bool,
    #[serde(default)]
    pub is_cancelled: bool,
    pub is_featured: bool,
    pub is_presentation_meeting: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Case-insensitive check for the weekly recurring meeting.
    pub fn matches_recurring_pattern(&self) -> bool {
        self.name
            .to_lowercase()
            .contains(&RECURRING_MEETING_NAME.to_lowercase())
    }

    /// Ordinary members only see approved events.
    pub fn is_visible_to_members(&self) -> bool {
        self.is_approved
    }

    pub fn is_on_or_after(&self, date: NaiveDate) -> bool {
        self.date >= date
    }

    /// True when the user created the event or is its presenter.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.created_by == user_id || self.presenter == Some(user_id)
    }
}

/// Draft record accepted by the event-creation collaborator. Storage
/// assigns the id and `created_at`, and new events start uncancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub description: String,
    pub created_by: Uuid,
    pub presenter: Option<Uuid>,
    pub is_approved: bool,
    pub is_featured: bool,
    pub is_presentation_meeting: bool,
}

impl NewEvent {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("event name must not be empty"));
        }
        if crate::events::time::parse_hhmm(&self.start_time).is_none() {
            return Err(AppError::invalid_input(format!(
                "start time '{}' is not in HH:MM format",
                self.start_time
            )));
        }
        if crate::events::time::parse_hhmm(&self.end_time).is_none() {
            return Err(AppError::invalid_input(format!(
                "end time '{}' is not in HH:MM format",
                self.end_time
            )));
        }
        Ok(())
    }

    /// Materialize the draft the way storage does: fresh id, fresh
    /// creation timestamp, not cancelled.
    pub fn materialize(self) -> Event {
        Event {
            id: Uuid::new_v4(),
            name: self.name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            description: self.description,
            created_by: self.created_by,
            presenter: self.presenter,
            is_approved: self.is_approved,
            is_cancelled: false,
            is_featured: self.is_featured,
            is_presentation_meeting: self.is_presentation_meeting,
            created_at: Utc::now(),
        }
    }
}
