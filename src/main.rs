// Chapterbase demo binary
//
// Opens (or creates) the local database, seeds a minimal roster on first
// run, backfills the weekly meeting for the coming year, and prints how
// the calendar splits across the five tab views.

use anyhow::Result;
use chrono::Utc;
use log::info;

use chapterbase::{
    categorize_events, config, utils, Database, EventTab, EventWriter, NewEvent,
    RecurrenceInitializer, RecurrenceSettings, User,
};

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init_logging()?;

    let settings = RecurrenceSettings::default();
    config::validate_config(&settings)?;

    let db = Database::new().await?;
    let chair = ensure_demo_roster(&db, &settings).await?;

    let today = Utc::now().date_naive();
    let events = db.get_events().await?;

    let initializer = RecurrenceInitializer::new(settings);
    if let Some(outcome) = initializer
        .ensure_occurrences(chair.is_admin, &events, &db, Some(&chair), today)
        .await
    {
        utils::logging::log_backfill(
            &initializer.settings().meeting_name,
            outcome.created,
            outcome.failed,
        );
        info!("Backfill detail: {}", serde_json::to_string(&outcome)?);
    }

    let events = db.get_events().await?;
    let views = categorize_events(&events, Some(&chair), today);
    for tab in EventTab::ALL {
        info!("{:>9}: {} events", tab.as_str(), views.view(tab).len());
    }

    Ok(())
}

/// First run only: add a chapter chair and the next occurrence of the
/// weekly meeting, so the backfill has a loaded collection to extend.
async fn ensure_demo_roster(db: &Database, settings: &RecurrenceSettings) -> Result<User> {
    if let Some(chair) = db.get_users().await?.into_iter().find(|u| u.is_admin) {
        return Ok(chair);
    }

    info!("Empty database, seeding demo roster");
    let chair = User::new_admin("Jordan Chair".to_string(), "chair@example.org".to_string());
    db.add_user(&chair).await?;

    if db.get_events().await?.is_empty() {
        let today = Utc::now().date_naive();
        let first = NewEvent {
            name: settings.meeting_name.clone(),
            date: today,
            start_time: settings.start_time.clone(),
            end_time: settings.end_time.clone(),
            location: settings.location.clone(),
            description: settings.description.clone(),
            created_by: chair.id,
            presenter: None,
            is_approved: true,
            is_featured: false,
            is_presentation_meeting: false,
        };
        db.create_event(first).await?;
    }

    Ok(chair)
}
