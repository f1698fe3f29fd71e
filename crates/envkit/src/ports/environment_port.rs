//! Environment port for abstracting environment variable access.
//!
//! The accessors read through this trait instead of `std::env`, so the
//! lookup protocol can be exercised against an in-memory table or a mock
//! without touching process state.

/// Port for environment variable access.
///
/// Implementations can provide the OS environment, a `.env` file, test mocks,
/// or any other read-only key/value source.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait EnvironmentPort: Send + Sync {
    /// Get an environment variable value.
    ///
    /// Returns `None` if the variable is not set. A variable set to the
    /// empty string returns `Some("")`.
    fn get_var(&self, key: &str) -> Option<String>;
}
