// file: src/models/settings.rs
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::RECURRING_MEETING_NAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceSettings {
    pub meeting_name: String,
    pub weekday: Weekday,
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    pub location: String,
    pub description: String,
    pub horizon_days: i64,
}

impl Default for RecurrenceSettings {
    fn default() -> Self {
        Self {
            meeting_name: RECURRING_MEETING_NAME.to_string(),
            weekday: Weekday::Tue,
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            location: "Community Hall".to_string(),
            description: "Weekly chapter meeting. All members are expected to attend.".to_string(),
            horizon_days: 365, // one year of occurrences
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_settings_default() {
        let settings = RecurrenceSettings::default();
        assert_eq!(settings.meeting_name, "Tuesday Meeting");
        assert_eq!(settings.weekday, Weekday::Tue);
        assert_eq!(settings.start_time, "08:00");
        assert_eq!(settings.end_time, "09:00");
        assert_eq!(settings.horizon_days, 365);
        assert!(!settings.location.is_empty());
        assert!(!settings.description.is_empty());
    }
}
