// file: src/store/mod.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePool, Sqlite};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Event, NewEvent, User};

// Declare submodules
pub mod events;
pub mod memory;
pub mod users;

pub use memory::MemoryStore;

const DEFAULT_DB_URL: &str = "sqlite:chapterbase.db?mode=rwc";

/// Event-creation collaborator. Accepts a draft record and resolves with
/// the fully materialized event, storage defaults applied.
#[async_trait]
pub trait EventWriter: Send + Sync {
    async fn create_event(&self, draft: NewEvent) -> AppResult<Event>;
}

/// User-resolution collaborator. Unknown ids are `Ok(None)`; a missing
/// identifier is never an error.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn resolve_user(&self, user_id: Uuid) -> AppResult<Option<User>>;
}

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new() -> Result<Self> {
        Self::connect(DEFAULT_DB_URL).await
    }

    pub async fn connect(db_url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        let db_exists = Sqlite::database_exists(db_url)
            .await
            .context("Failed to check if database exists")?;
        if !db_exists {
            info!("Creating database");
            Sqlite::create_database(db_url)
                .await
                .context("Failed to create database")?;
        }

        let pool = SqlitePool::connect(db_url)
            .await
            .context("Failed to connect to database")?;

        run_schema(&pool).await.context("Failed to run database schema")?;

        info!("Database initialized successfully");

        Ok(Database { pool })
    }

    // --- Event Delegates ---

    pub async fn get_events(&self) -> Result<Vec<Event>> {
        events::get_all(&self.pool).await
    }

    pub async fn approve_event(&self, event_id: Uuid) -> Result<()> {
        events::approve(&self.pool, event_id).await
    }

    pub async fn reject_event(&self, event_id: Uuid) -> Result<()> {
        events::reject(&self.pool, event_id).await
    }

    pub async fn cancel_event(&self, event_id: Uuid) -> Result<()> {
        events::cancel(&self.pool, event_id).await
    }

    pub async fn assign_presenter(&self, event_id: Uuid, presenter: Option<Uuid>) -> Result<()> {
        events::assign_presenter(&self.pool, event_id, presenter).await
    }

    pub async fn delete_event(&self, event_id: Uuid) -> Result<()> {
        events::delete(&self.pool, event_id).await
    }

    // --- User Delegates ---

    pub async fn add_user(&self, user: &User) -> Result<()> {
        users::add(&self.pool, user).await
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }
}

#[async_trait]
impl EventWriter for Database {
    async fn create_event(&self, draft: NewEvent) -> AppResult<Event> {
        draft.validate()?;
        let event = events::create(&self.pool, draft).await?;
        Ok(event)
    }
}

#[async_trait]
impl UserDirectory for Database {
    async fn resolve_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let user = users::resolve(&self.pool, user_id).await?;
        Ok(user)
    }
}

async fn run_schema(pool: &SqlitePool) -> Result<()> {
    let schema = include_str!("schema.sql");

    let mut current_statement = String::new();

    for line in schema.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }

        current_statement.push_str(line);
        current_statement.push('\n');

        if trimmed.ends_with(';') {
            sqlx::query(&current_statement).execute(pool).await?;
            current_statement.clear();
        }
    }
    Ok(())
}
