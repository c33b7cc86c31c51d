//! Configuration validation module
//!
//! The recurrence settings are the only tunable surface; everything else
//! is derived from the event data itself.

use log::info;

use crate::error::{AppError, AppResult};
use crate::events::time::parse_hhmm;
use crate::models::RecurrenceSettings;

/// Validates the recurrence configuration before the backfill service is
/// constructed from it.
pub fn validate_config(settings: &RecurrenceSettings) -> AppResult<()> {
    info!("Validating recurrence configuration");

    if settings.meeting_name.trim().is_empty() {
        return Err(AppError::config("recurring meeting name must not be empty"));
    }

    let start = parse_hhmm(&settings.start_time).ok_or_else(|| {
        AppError::config(format!(
            "start time '{}' is not in HH:MM format",
            settings.start_time
        ))
    })?;
    let end = parse_hhmm(&settings.end_time).ok_or_else(|| {
        AppError::config(format!(
            "end time '{}' is not in HH:MM format",
            settings.end_time
        ))
    })?;

    if start >= end {
        return Err(AppError::config("meeting start must be before meeting end"));
    }

    if settings.horizon_days <= 0 {
        return Err(AppError::config("backfill horizon must cover at least one day"));
    }

    Ok(())
}
