// file: src/store/events.rs
use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Event, NewEvent};

pub async fn create(pool: &SqlitePool, draft: NewEvent) -> Result<Event> {
    let event = draft.materialize();

    sqlx::query(
        r#"
        INSERT INTO events (
            id, name, date, start_time, end_time, location, description,
            created_by, presenter, is_approved, is_cancelled, is_featured,
            is_presentation_meeting, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(event.id)
    .bind(&event.name)
    .bind(event.date)
    .bind(&event.start_time)
    .bind(&event.end_time)
    .bind(&event.location)
    .bind(&event.description)
    .bind(event.created_by)
    .bind(event.presenter)
    .bind(event.is_approved)
    .bind(event.is_cancelled)
    .bind(event.is_featured)
    .bind(event.is_presentation_meeting)
    .bind(event.created_at)
    .execute(pool)
    .await?;

    Ok(event)
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Event>> {
    let events = sqlx::query_as::<_, Event>(
        r#"
        SELECT
            id, name, date, start_time, end_time, location, description,
            created_by, presenter, is_approved, is_cancelled, is_featured,
            is_presentation_meeting, created_at
        FROM events
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(events)
}

pub async fn approve(pool: &SqlitePool, event_id: Uuid) -> Result<()> {
    sqlx::query("UPDATE events SET is_approved = 1 WHERE id = ?")
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn reject(pool: &SqlitePool, event_id: Uuid) -> Result<()> {
    sqlx::query("UPDATE events SET is_approved = 0 WHERE id = ?")
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn cancel(pool: &SqlitePool, event_id: Uuid) -> Result<()> {
    sqlx::query("UPDATE events SET is_cancelled = 1 WHERE id = ?")
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn assign_presenter(
    pool: &SqlitePool,
    event_id: Uuid,
    presenter: Option<Uuid>,
) -> Result<()> {
    sqlx::query("UPDATE events SET presenter = ? WHERE id = ?")
        .bind(presenter)
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn delete(pool: &SqlitePool, event_id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(())
}
