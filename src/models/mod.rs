// file: src/models/mod.rs

// Declare modules
pub mod backfill;
pub mod categories;
pub mod event;
pub mod settings;
pub mod user;

// Re-export all public types so imports like `use crate::models::Event`
// work without reaching into submodules.
pub use backfill::BackfillOutcome;
pub use categories::{CategorizedEvents, EventTab};
pub use event::{Event, NewEvent, RECURRING_MEETING_NAME};
pub use settings::RecurrenceSettings;
pub use user::{User, SYSTEM_USER_ID};
