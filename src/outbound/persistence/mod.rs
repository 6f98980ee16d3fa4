//! Storage adapters implementing the domain's `UserRepository` port.
//!
//! Two adapters are provided and selected by configuration:
//!
//! - [`InMemoryUserRepository`]: process-local map behind an async lock,
//!   used when no database URL is configured.
//! - [`DieselUserRepository`]: PostgreSQL via the Diesel ORM with async
//!   support through `diesel-async` and `bb8` connection pooling.
//!
//! Adapters are thin: they translate between storage rows and domain types
//! and map backend failures to port error types. Row structs (`models.rs`)
//! and table definitions (`schema.rs`) stay internal to this module.

mod diesel_user_repository;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use memory::InMemoryUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
