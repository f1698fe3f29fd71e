//! Environment adapter using std::env for environment variable access.

use std::env::{self, VarError};

use crate::ports::EnvironmentPort;

/// System environment variable adapter.
///
/// Reads the process environment. Values that are not valid UTF-8 are decoded
/// lossily rather than reported as absent.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironmentAdapter;

impl SystemEnvironmentAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentPort for SystemEnvironmentAdapter {
    fn get_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                tracing::warn!(key, "Environment variable is not valid UTF-8, decoding lossily");
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "ENVKIT_SYSTEM_ADAPTER_READ";

    #[test]
    fn test_unset_variable_is_none() {
        temp_env::with_var_unset(KEY, || {
            assert_eq!(SystemEnvironmentAdapter::new().get_var(KEY), None);
        });
    }

    #[test]
    fn test_empty_variable_is_present() {
        temp_env::with_var(KEY, Some(""), || {
            assert_eq!(SystemEnvironmentAdapter::new().get_var(KEY), Some(String::new()));
        });
    }
}
