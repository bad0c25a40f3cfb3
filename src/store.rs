use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

use crate::models::{CreateItemRequest, CreateUserRequest, Item, ItemPatch, User, UserPublic};

/// Failures reported by store operations
///
/// The display strings are the messages returned to API clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("Item not found")]
    ItemNotFound(u64),
    #[error("User not found")]
    UserNotFound(u64),
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const USER_FIELDS_REQUIRED: &str = "Username, email and password are required";
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";

struct Collections {
    items: Vec<Item>,
    users: Vec<User>,
    next_item_id: u64,
    next_user_id: u64,
}

impl Collections {
    fn seeded() -> Self {
        let now = Utc::now();
        Collections {
            items: vec![
                Item {
                    id: 1,
                    name: "Default Item 1".to_string(),
                    description: Some("This is the first default item".to_string()),
                    created_at: now,
                },
                Item {
                    id: 2,
                    name: "Default Item 2".to_string(),
                    description: None,
                    created_at: now,
                },
            ],
            users: vec![User {
                id: 1,
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                full_name: Some("Test User".to_string()),
                password: "password123".to_string(),
            }],
            next_item_id: 3,
            next_user_id: 2,
        }
    }
}

/// In-memory item and user store, shareable across async handlers
///
/// One mutex guards both collections and both id counters, so every
/// operation (including id allocation) is atomic with respect to
/// concurrent requests. Ids are never reused, even after deletion.
///
/// Passwords are kept in plaintext and compared verbatim. This is a demo
/// stub, not an authentication system.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Collections>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Treats an empty string the same as a missing field.
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl MemoryStore {
    /// Create a store holding the demo seed records
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Collections::seeded())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // No operation panics mid-mutation, so a poisoned guard still holds
        // consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Restore seed records and id counters
    pub fn reset(&self) {
        *self.lock() = Collections::seeded();
        tracing::info!("Store reset to seed data");
    }

    /// All items in insertion order
    pub fn list_items(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    pub fn create_item(&self, request: CreateItemRequest) -> Result<Item, StoreError> {
        let name = required(request.name).ok_or(StoreError::InvalidInput(NAME_REQUIRED))?;

        let mut collections = self.lock();
        let item = Item {
            id: collections.next_item_id,
            name,
            description: request.description,
            created_at: Utc::now(),
        };
        collections.next_item_id += 1;
        collections.items.push(item.clone());

        Ok(item)
    }

    pub fn get_item(&self, id: u64) -> Result<Item, StoreError> {
        self.lock()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::ItemNotFound(id))
    }

    /// Merge `patch` onto an existing item
    ///
    /// Validation happens before the lookup, so an invalid body for a
    /// missing id reports `InvalidInput`.
    pub fn update_item(&self, id: u64, patch: ItemPatch) -> Result<Item, StoreError> {
        let name = required(patch.name).ok_or(StoreError::InvalidInput(NAME_REQUIRED))?;

        let mut collections = self.lock();
        let item = collections
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;

        item.name = name;
        if let Some(description) = patch.description {
            item.description = description;
        }

        Ok(item.clone())
    }

    pub fn delete_item(&self, id: u64) -> Result<(), StoreError> {
        let mut collections = self.lock();
        let index = collections
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;
        collections.items.remove(index);

        Ok(())
    }

    pub fn list_users(&self) -> Vec<UserPublic> {
        self.lock().users.iter().map(UserPublic::from).collect()
    }

    pub fn create_user(&self, request: CreateUserRequest) -> Result<UserPublic, StoreError> {
        let (Some(username), Some(email), Some(password)) = (
            required(request.username),
            required(request.email),
            required(request.password),
        ) else {
            return Err(StoreError::InvalidInput(USER_FIELDS_REQUIRED));
        };

        let mut collections = self.lock();
        if collections.users.iter().any(|user| user.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: collections.next_user_id,
            username,
            email,
            full_name: request.full_name,
            password,
        };
        collections.next_user_id += 1;
        let public = UserPublic::from(&user);
        collections.users.push(user);

        Ok(public)
    }

    pub fn get_user(&self, id: u64) -> Result<UserPublic, StoreError> {
        self.lock()
            .users
            .iter()
            .find(|user| user.id == id)
            .map(UserPublic::from)
            .ok_or(StoreError::UserNotFound(id))
    }

    /// Find the user with exactly this username and password
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<User, StoreError> {
        self.lock()
            .users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)
    }
}
