use async_trait::async_trait;
use chapterbase::{
    AppError, AppResult, Event, EventWriter, MemoryStore, NewEvent, RecurrenceInitializer,
    RecurrenceSettings, User, SYSTEM_USER_ID,
};
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use mockall::mock;
use uuid::Uuid;

mock! {
    Writer {}

    #[async_trait]
    impl EventWriter for Writer {
        async fn create_event(&self, draft: NewEvent) -> AppResult<Event>;
    }
}

// 2025-06-02 is a Monday, so the Tuesdays of the following four weeks are
// June 3, 10, 17 and 24.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn tuesday_of_week(week: i64) -> NaiveDate {
    monday() + Duration::days(1 + 7 * (week - 1))
}

/// Settings covering exactly the four Tuesdays after `monday()`.
fn four_week_settings() -> RecurrenceSettings {
    RecurrenceSettings {
        horizon_days: 27,
        ..RecurrenceSettings::default()
    }
}

fn meeting_on(name: &str, date: NaiveDate) -> Event {
    Event {
        id: Uuid::new_v4(),
        name: name.to_string(),
        date,
        start_time: "08:00".to_string(),
        end_time: "09:00".to_string(),
        location: "Community Hall".to_string(),
        description: "Weekly chapter meeting".to_string(),
        created_by: Uuid::new_v4(),
        presenter: None,
        is_approved: true,
        is_cancelled: false,
        is_featured: false,
        is_presentation_meeting: false,
        created_at: Utc::now(),
    }
}

fn admin() -> User {
    User::new_admin("Jordan Chair".to_string(), "chair@example.org".to_string())
}

#[tokio::test]
async fn test_gap_filling_creates_only_missing_weeks() {
    let store = MemoryStore::new();
    store.seed_events(vec![
        meeting_on("Tuesday Meeting", tuesday_of_week(1)),
        meeting_on("Tuesday Meeting", tuesday_of_week(3)),
    ]);

    let initializer = RecurrenceInitializer::new(four_week_settings());
    let chair = admin();
    let events = store.events();

    let outcome = initializer
        .ensure_occurrences(true, &events, &store, Some(&chair), monday())
        .await
        .expect("backfill should run");

    assert_eq!(outcome.requested, 2);
    assert_eq!(outcome.created, 2);
    assert_eq!(outcome.failed, 0);
    assert!(outcome.is_complete());

    let mut created_dates: Vec<_> = store
        .events()
        .iter()
        .filter(|e| !events.iter().any(|seeded| seeded.id == e.id))
        .map(|e| e.date)
        .collect();
    created_dates.sort();
    assert_eq!(created_dates, vec![tuesday_of_week(2), tuesday_of_week(4)]);

    // Every created occurrence carries the fixed defaults.
    for event in store.events() {
        assert_eq!(event.name, "Tuesday Meeting");
        assert!(event.is_approved);
        assert!(!event.is_cancelled);
        assert_eq!(event.date.weekday(), Weekday::Tue);
    }
}

#[tokio::test]
async fn test_second_invocation_is_a_no_op() {
    let store = MemoryStore::new();
    store.seed_events(vec![meeting_on("Tuesday Meeting", tuesday_of_week(1))]);

    let initializer = RecurrenceInitializer::new(four_week_settings());
    let chair = admin();
    let events = store.events();

    let first = initializer
        .ensure_occurrences(true, &events, &store, Some(&chair), monday())
        .await;
    assert!(first.is_some());
    assert!(initializer.is_initialized());
    let count_after_first = store.event_count();

    // Same collection again: the one-shot gate holds even though the
    // caller passed the stale (pre-backfill) event list.
    let second = initializer
        .ensure_occurrences(true, &events, &store, Some(&chair), monday())
        .await;
    assert!(second.is_none());
    assert_eq!(store.event_count(), count_after_first);
}

#[tokio::test]
async fn test_non_admin_callers_are_ignored() {
    let store = MemoryStore::new();
    store.seed_events(vec![meeting_on("Tuesday Meeting", tuesday_of_week(1))]);

    let initializer = RecurrenceInitializer::new(four_week_settings());
    let ordinary = User::new("Avery Member".to_string(), "avery@example.org".to_string());
    let events = store.events();

    let outcome = initializer
        .ensure_occurrences(false, &events, &store, Some(&ordinary), monday())
        .await;

    assert!(outcome.is_none());
    assert!(!initializer.is_initialized());
    assert_eq!(store.event_count(), 1);
}

#[tokio::test]
async fn test_empty_collection_defers_without_burning_the_flag() {
    let store = MemoryStore::new();
    let initializer = RecurrenceInitializer::new(four_week_settings());
    let chair = admin();

    // Empty collection is treated as "not loaded yet": nothing happens
    // and the gate stays open.
    let deferred = initializer
        .ensure_occurrences(true, &[], &store, Some(&chair), monday())
        .await;
    assert!(deferred.is_none());
    assert!(!initializer.is_initialized());

    // Once data is present the same initializer runs normally.
    store.seed_events(vec![meeting_on("Tuesday Meeting", tuesday_of_week(1))]);
    let events = store.events();
    let outcome = initializer
        .ensure_occurrences(true, &events, &store, Some(&chair), monday())
        .await;
    assert!(outcome.is_some());
    assert!(initializer.is_initialized());
}

#[tokio::test]
async fn test_existing_check_is_case_sensitive() {
    let store = MemoryStore::new();
    // Lowercase name: the classifier would treat this as the recurring
    // meeting, but the backfill's occupancy check must not.
    store.seed_events(vec![meeting_on("tuesday meeting", tuesday_of_week(2))]);

    let initializer = RecurrenceInitializer::new(four_week_settings());
    let chair = admin();
    let events = store.events();

    let outcome = initializer
        .ensure_occurrences(true, &events, &store, Some(&chair), monday())
        .await
        .expect("backfill should run");

    // All four Tuesdays count as missing, week 2 included.
    assert_eq!(outcome.requested, 4);
    assert_eq!(outcome.created, 4);
}

#[tokio::test]
async fn test_system_sentinel_used_when_no_user_is_acting() {
    let store = MemoryStore::new();
    store.seed_events(vec![meeting_on("Tuesday Meeting", tuesday_of_week(1))]);

    let initializer = RecurrenceInitializer::new(four_week_settings());
    let seeded = store.events();

    initializer
        .ensure_occurrences(true, &seeded, &store, None, monday())
        .await
        .expect("backfill should run");

    let created: Vec<_> = store
        .events()
        .into_iter()
        .filter(|e| !seeded.iter().any(|s| s.id == e.id))
        .collect();
    assert!(!created.is_empty());
    assert!(created.iter().all(|e| e.created_by == SYSTEM_USER_ID));
}

#[tokio::test]
async fn test_failed_creations_are_counted_and_flag_still_set() {
    let mut writer = MockWriter::new();
    writer
        .expect_create_event()
        .times(3)
        .returning(|_| Err(AppError::operation_failed("storage offline")));

    let initializer = RecurrenceInitializer::new(four_week_settings());
    let chair = admin();
    let events = vec![meeting_on("Tuesday Meeting", tuesday_of_week(1))];

    let outcome = initializer
        .ensure_occurrences(true, &events, &writer, Some(&chair), monday())
        .await
        .expect("backfill should run");

    assert_eq!(outcome.requested, 3);
    assert_eq!(outcome.created, 0);
    assert_eq!(outcome.failed, 3);
    assert_eq!(outcome.errors.len(), 3);
    assert!(!outcome.is_complete());

    // Partial failure does not reopen the gate; the next session retries.
    assert!(initializer.is_initialized());
    let again = initializer
        .ensure_occurrences(true, &events, &writer, Some(&chair), monday())
        .await;
    assert!(again.is_none());
}
