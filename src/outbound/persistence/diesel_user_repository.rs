//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel rows and domain types and
//! maps database failures to port errors. No business logic resides here.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::models::{NewUserRow, UserRow, UserRowUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => UserPersistenceError::query("database error"),
        _ => UserPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain user.
///
/// A row violating the name invariants indicates corrupt data; it surfaces
/// as a query error rather than panicking the worker.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_parts(row.id.to_string(), row.first_name, row.last_name).map_err(|err| {
        debug!(id = %row.id, error = %err, "stored user record failed validation");
        UserPersistenceError::query("stored user record failed validation")
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id = Uuid::new_v4();
        let row = NewUserRow {
            id,
            first_name: new_user.first_name().as_ref(),
            last_name: new_user.last_name().as_ref(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(new_user.into_user(UserId::from_uuid(id)))
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = UserRowUpdate {
            first_name: user.first_name().as_ref(),
            last_name: user.last_name().as_ref(),
        };
        let updated_rows = diesel::update(users::table)
            .filter(users::id.eq(user.id().as_uuid()))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated_rows == 0 {
            return Ok(None);
        }
        Ok(Some(user.clone()))
    }

    async fn remove(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted_rows = diesel::delete(users::table.filter(users::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted_rows > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Mapping coverage; queries themselves need a live database.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, UserPersistenceError::connection("timed out"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_failure() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(error, UserPersistenceError::query("record not found"));
    }

    #[rstest]
    fn corrupt_rows_surface_as_query_failures() {
        let row = UserRow {
            id: Uuid::new_v4(),
            first_name: "   ".to_owned(),
            last_name: "Lovelace".to_owned(),
        };

        let error = row_to_user(row).expect_err("blank name must not validate");
        assert_eq!(
            error,
            UserPersistenceError::query("stored user record failed validation")
        );
    }

    #[rstest]
    fn valid_rows_convert_to_domain_users() {
        let id = Uuid::new_v4();
        let row = UserRow {
            id,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        };

        let user = row_to_user(row).expect("valid row");
        assert_eq!(user.id().as_uuid(), &id);
        assert_eq!(user.first_name().as_ref(), "Ada");
    }
}
