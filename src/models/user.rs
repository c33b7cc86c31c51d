// file: src/models/user.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Creator recorded on system-generated events when no user is acting.
pub const SYSTEM_USER_ID: Uuid = Uuid::nil();

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(full_name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            is_admin: false,
        }
    }

    pub fn new_admin(full_name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            is_admin: true,
        }
    }
}
