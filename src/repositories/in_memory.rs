//! In-memory [`UserRepository`] for tests.
//!
//! Ids are handed out from a counter that never goes backwards, like a
//! `SERIAL` column. Every trait call is counted.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{User, UserInput};
use crate::repositories::UserRepository;

pub struct InMemoryUserRepository {
    rows: Mutex<BTreeMap<i32, User>>,
    next_id: Mutex<i32>,
    calls: AtomicUsize,
    failing: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A repository whose first assigned id is `first_id`.
    pub fn starting_at(first_id: i32) -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(first_id),
            calls: AtomicUsize::new(0),
            failing: false,
        }
    }

    /// A repository where every call fails as if the database were down.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<User> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn enter(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        self.enter()?;
        Ok(self.rows())
    }

    async fn insert(&self, input: &UserInput) -> Result<i32, ApiError> {
        self.enter()?;
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        self.rows
            .lock()
            .unwrap()
            .insert(id, input.clone().into_user(id));
        Ok(id)
    }

    async fn update(&self, id: i32, input: &UserInput) -> Result<u64, ApiError> {
        self.enter()?;
        match self.rows.lock().unwrap().get_mut(&id) {
            Some(row) => {
                row.name = input.name.clone();
                row.email = input.email.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}
