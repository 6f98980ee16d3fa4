//! In-memory `UserRepository` adapter.
//!
//! Backs the service when no database URL is configured. The map is guarded
//! by an async `RwLock` so concurrent writers serialise instead of racing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// Process-local user storage keyed by UUID.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let records = self.records.read().await;
        Ok(records.get(id.as_uuid()).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, UserPersistenceError> {
        let id = UserId::random();
        let user = new_user.into_user(id);
        let mut records = self.records.write().await;
        records.insert(*id.as_uuid(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut records = self.records.write().await;
        match records.get_mut(user.id().as_uuid()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut records = self.records.write().await;
        Ok(records.remove(id.as_uuid()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PersonName;
    use rstest::rstest;

    fn draft(first_name: &str, last_name: &str) -> NewUser {
        NewUser::new(
            PersonName::new(first_name).expect("valid name"),
            PersonName::new(last_name).expect("valid name"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let repository = InMemoryUserRepository::new();

        let ada = repository.insert(draft("Ada", "Lovelace")).await.expect("insert");
        let grace = repository.insert(draft("Grace", "Hopper")).await.expect("insert");

        assert_ne!(ada.id(), grace.id());
        assert_eq!(repository.list().await.expect("list").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_returns_the_inserted_record() {
        let repository = InMemoryUserRepository::new();
        let stored = repository.insert(draft("Ada", "Lovelace")).await.expect("insert");

        let found = repository
            .find_by_id(stored.id())
            .await
            .expect("find")
            .expect("record present");
        assert_eq!(found, stored);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_misses_for_unknown_ids() {
        let repository = InMemoryUserRepository::new();

        let found = repository.find_by_id(&UserId::random()).await.expect("find");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_the_record_in_place() {
        let repository = InMemoryUserRepository::new();
        let stored = repository.insert(draft("Ada", "Lovelace")).await.expect("insert");

        let replacement = User::new(
            *stored.id(),
            PersonName::new("Augusta").expect("valid name"),
            PersonName::new("King").expect("valid name"),
        );
        let updated = repository
            .update(&replacement)
            .await
            .expect("update")
            .expect("record present");

        assert_eq!(updated, replacement);
        let found = repository
            .find_by_id(stored.id())
            .await
            .expect("find")
            .expect("record present");
        assert_eq!(found.first_name().as_ref(), "Augusta");
        assert_eq!(found.id(), stored.id());
    }

    #[rstest]
    #[tokio::test]
    async fn update_misses_for_unknown_ids() {
        let repository = InMemoryUserRepository::new();
        let absent = User::try_from_parts(
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "Ada",
            "Lovelace",
        )
        .expect("valid user");

        let updated = repository.update(&absent).await.expect("update");
        assert!(updated.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn remove_deletes_and_reports_misses() {
        let repository = InMemoryUserRepository::new();
        let stored = repository.insert(draft("Ada", "Lovelace")).await.expect("insert");

        assert!(repository.remove(stored.id()).await.expect("remove"));
        assert!(!repository.remove(stored.id()).await.expect("remove"));
        assert!(repository
            .find_by_id(stored.id())
            .await
            .expect("find")
            .is_none());
    }
}
