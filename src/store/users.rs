// file: src/store/users.rs
use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::User;

pub async fn add(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query("INSERT INTO users (id, full_name, email, is_admin) VALUES (?, ?, ?, ?)")
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(user.is_admin)
        .execute(pool)
        .await?;

    Ok(())
}

/// Missing ids resolve to `Ok(None)`, never an error.
pub async fn resolve(pool: &SqlitePool, user_id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, is_admin FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, is_admin FROM users ORDER BY full_name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}
