//! In-memory user store.

use crate::error::{AuthError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// A registered user. The password is kept only as a hex SHA-256 digest.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    password_digest: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Users keyed by id, guarded by a single lock. The store is the only
/// shared mutable state in the service.
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self { users: RwLock::new(HashMap::new()) }
    }

    /// Create a store seeded with the demo account, matching the behavior
    /// of the service when it starts with no registered users.
    pub fn with_demo_user() -> Self {
        let store = Self::new();
        store
            .register(NewUser {
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                password: "test123".to_string(),
            })
            .expect("seeding an empty store cannot collide");
        store
    }

    /// Register a new user, enforcing unique email and username.
    pub fn register(&self, new: NewUser) -> Result<User> {
        let mut users = self.users.write().unwrap();

        if users.values().any(|u| u.email == new.email) {
            return Err(AuthError::DuplicateEmail);
        }
        if users.values().any(|u| u.username == new.username) {
            return Err(AuthError::DuplicateUsername);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: new.username,
            email: new.email,
            password_digest: digest(&new.password),
            created_at: Utc::now(),
        };
        users.insert(user.id.clone(), user.clone());

        tracing::debug!(username = %user.username, "user registered");
        Ok(user)
    }

    /// Check credentials for login.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let users = self.users.read().unwrap();
        let user = users
            .values()
            .find(|u| u.email == email)
            .ok_or(AuthError::UnknownEmail)?;

        if user.password_digest != digest(password) {
            return Err(AuthError::InvalidPassword);
        }

        Ok(user.clone())
    }

    /// Look a user up by id (the token subject).
    pub fn get(&self, id: &str) -> Option<User> {
        self.users.read().unwrap().get(id).cloned()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
