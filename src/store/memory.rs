// file: src/store/memory.rs
//
// In-memory implementation of the collaborator seams. Backs the demo
// seed data and the recurrence tests; no SQLite required.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Event, NewEvent, User};
use crate::store::{EventWriter, UserDirectory};

#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            users: Mutex::new(users),
        }
    }

    pub fn seed_events(&self, events: Vec<Event>) {
        self.events.lock().unwrap().extend(events);
    }

    /// Snapshot of the stored events.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

#[async_trait]
impl EventWriter for MemoryStore {
    async fn create_event(&self, draft: NewEvent) -> AppResult<Event> {
        draft.validate()?;
        let event = draft.materialize();
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn resolve_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }
}
