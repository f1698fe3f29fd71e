//! envkit - typed environment variable accessors.
//!
//! Reads named variables, parses them into typed values and falls back to a
//! caller-supplied default when a variable is absent or unparsable. A variable
//! with no default is [`Fallback::Required`]; its absence is returned as
//! [`EnvError::MissingRequired`] so the hosting application decides whether to
//! stop.
//!
//! # Usage
//!
//! ```no_run
//! use envkit::{EnvAccessor, Fallback};
//!
//! let env = EnvAccessor::system().with_prefix("APP_");
//! let port = env.get_int("PORT", Fallback::Default(8080))?;
//! let database_url = env.get_string("DATABASE_URL", Fallback::Required)?;
//! let origins = env.get_string_list("CORS_ORIGINS", Fallback::Default(Vec::new()))?;
//! # Ok::<(), envkit::EnvError>(())
//! ```
//!
//! The store is injected through [`EnvironmentPort`], so tests can use
//! [`MapEnvironmentAdapter`] instead of mutating the process environment.
//! The free functions at the crate root read the process environment directly.

pub mod accessor;
pub mod adapters;
pub mod error;
pub mod fallback;
pub mod ports;
pub mod resolved;
pub mod value;

pub use accessor::EnvAccessor;
pub use adapters::{DotenvEnvironmentAdapter, MapEnvironmentAdapter, SystemEnvironmentAdapter};
pub use error::EnvError;
pub use fallback::Fallback;
pub use ports::EnvironmentPort;
pub use resolved::{Resolved, ValueSource};
pub use value::{parse_bool, FromEnvValue, VarKind};

#[cfg(any(test, feature = "testing"))]
pub use ports::MockEnvironmentPort;

// =============================================================================
// Process environment shortcuts
// =============================================================================

/// String value of `key` from the process environment. An empty value is returned as-is.
pub fn get_string(key: &str, fallback: Fallback<String>) -> Result<String, EnvError> {
    EnvAccessor::system().get_string(key, fallback)
}

/// Platform-width integer value of `key` from the process environment.
pub fn get_int(key: &str, fallback: Fallback<isize>) -> Result<isize, EnvError> {
    EnvAccessor::system().get_int(key, fallback)
}

pub fn get_int64(key: &str, fallback: Fallback<i64>) -> Result<i64, EnvError> {
    EnvAccessor::system().get_int64(key, fallback)
}

pub fn get_float(key: &str, fallback: Fallback<f64>) -> Result<f64, EnvError> {
    EnvAccessor::system().get_float(key, fallback)
}

pub fn get_bool(key: &str, fallback: Fallback<bool>) -> Result<bool, EnvError> {
    EnvAccessor::system().get_bool(key, fallback)
}

/// Comma-separated list from the process environment. Empty counts as absent.
pub fn get_string_list(
    key: &str,
    fallback: Fallback<Vec<String>>,
) -> Result<Vec<String>, EnvError> {
    EnvAccessor::system().get_string_list(key, fallback)
}
