//! Port abstraction for user storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage port backing the users resource.
///
/// Adapters guarantee each operation is atomic with respect to concurrent
/// callers; nothing stronger. There are no transactions spanning operations
/// and no optimistic concurrency control.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Assign a fresh identifier, store the record, and return it.
    async fn insert(&self, new_user: NewUser) -> Result<User, UserPersistenceError>;

    /// Replace the stored record matching the user's identifier.
    ///
    /// Returns `None` when no record matches.
    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError>;

    /// Delete the stored record matching the identifier.
    ///
    /// Returns `false` when no record matches.
    async fn remove(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
