// Chapterbase Library
// Event classification and recurring-meeting scheduling for a
// membership-organization backend.

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use events::recurrence::RecurrenceInitializer;
pub use events::time::format_time;
pub use events::{categorize_events, presenter_history, PresenterRecord};
pub use models::*;
pub use store::{Database, EventWriter, MemoryStore, UserDirectory};
