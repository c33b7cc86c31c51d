// file: src/models/categories.rs
use serde::{Deserialize, Serialize};

use crate::models::Event;

/// The five named views the event collection is partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTab {
    Upcoming,
    Past,
    Mine,
    Pending,
    Cancelled,
}

impl EventTab {
    pub const ALL: [EventTab; 5] = [
        EventTab::Upcoming,
        EventTab::Past,
        EventTab::Mine,
        EventTab::Pending,
        EventTab::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventTab::Upcoming => "upcoming",
            EventTab::Past => "past",
            EventTab::Mine => "mine",
            EventTab::Pending => "pending",
            EventTab::Cancelled => "cancelled",
        }
    }

    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier {
            "upcoming" => Some(EventTab::Upcoming),
            "past" => Some(EventTab::Past),
            "mine" => Some(EventTab::Mine),
            "pending" => Some(EventTab::Pending),
            "cancelled" => Some(EventTab::Cancelled),
            _ => None,
        }
    }
}

/// Result of classifying the event collection. The views are not mutually
/// exclusive: a pending event can also be someone's "mine" entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorizedEvents {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
    pub mine: Vec<Event>,
    pub pending: Vec<Event>,
    pub cancelled: Vec<Event>,
}

impl CategorizedEvents {
    pub fn view(&self, tab: EventTab) -> &[Event] {
        match tab {
            EventTab::Upcoming => &self.upcoming,
            EventTab::Past => &self.past,
            EventTab::Mine => &self.mine,
            EventTab::Pending => &self.pending,
            EventTab::Cancelled => &self.cancelled,
        }
    }

    /// Permissive selection by tab identifier. Unrecognized identifiers
    /// resolve to an empty list rather than an error.
    pub fn for_tab(&self, identifier: &str) -> &[Event] {
        match EventTab::parse(identifier) {
            Some(tab) => self.view(tab),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tab_as_str() {
        assert_eq!(EventTab::Upcoming.as_str(), "upcoming");
        assert_eq!(EventTab::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_event_tab_parse_roundtrip() {
        for tab in EventTab::ALL {
            assert_eq!(EventTab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(EventTab::parse("archived"), None);
        assert_eq!(EventTab::parse("Upcoming"), None);
    }

    #[test]
    fn test_for_tab_unknown_identifier_is_empty() {
        let views = CategorizedEvents::default();
        assert!(views.for_tab("totally-unknown").is_empty());
        assert!(views.for_tab("").is_empty());
    }
}
