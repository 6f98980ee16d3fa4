//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain storage port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use roster::inbound::http::state::HttpState;
/// use roster::outbound::persistence::InMemoryUserRepository;
///
/// let state = HttpState::new(Arc::new(InMemoryUserRepository::new()));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state from a storage port implementation.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
