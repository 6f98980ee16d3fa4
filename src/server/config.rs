//! Server configuration: externalized settings and the runtime config object.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use roster::outbound::persistence::DbPool;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Settings loaded at startup from environment, CLI, or config file.
///
/// Covers the listen address and the store connection parameters; nothing
/// is hard-coded in the binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL; in-memory storage is used when unset.
    pub database_url: Option<String>,
    /// Store connection checkout timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the configured connection timeout, falling back to the default.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the PostgreSQL adapter.
    ///
    /// When absent, the server falls back to in-memory storage.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("roster")]).expect("settings should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("ROSTER_BIND_ADDR", None::<String>),
            ("ROSTER_DATABASE_URL", None::<String>),
            ("ROSTER_CONNECT_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:3000".parse::<SocketAddr>().expect("valid addr")
        );
        assert_eq!(settings.connect_timeout(), Duration::from_secs(10));
        assert!(settings.database_url.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ROSTER_BIND_ADDR", Some("127.0.0.1:8081".to_owned())),
            (
                "ROSTER_DATABASE_URL",
                Some("postgres://localhost/roster".to_owned()),
            ),
            ("ROSTER_CONNECT_TIMEOUT_SECS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            "127.0.0.1:8081".parse::<SocketAddr>().expect("valid addr")
        );
        assert_eq!(settings.connect_timeout(), Duration::from_secs(3));
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/roster")
        );
    }

    #[rstest]
    fn invalid_bind_addr_is_reported() {
        let _guard = lock_env([("ROSTER_BIND_ADDR", Some("not-an-addr".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
