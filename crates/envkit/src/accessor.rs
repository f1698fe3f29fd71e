//! Typed environment accessor
//!
//! Every accessor follows the same decision tree:
//! 1. Variable absent: return the default, or `MissingRequired` when there is none.
//! 2. Variable present: parse it.
//! 3. Parse failed: log a warning and return the default, or `InvalidFormat`
//!    when there is none.
//!
//! Strings never fail to parse, so an empty string is returned as-is. String
//! lists treat an empty value the same as an absent one.

use std::sync::Arc;

use crate::adapters::SystemEnvironmentAdapter;
use crate::error::EnvError;
use crate::fallback::Fallback;
use crate::ports::EnvironmentPort;
use crate::resolved::{Resolved, ValueSource};
use crate::value::{split_list, FromEnvValue, VarKind};

/// Reads typed values from an injected environment store
#[derive(Clone)]
pub struct EnvAccessor {
    environment: Arc<dyn EnvironmentPort>,
    prefix: String,
}

impl EnvAccessor {
    pub fn new(environment: Arc<dyn EnvironmentPort>) -> Self {
        Self {
            environment,
            prefix: String::new(),
        }
    }

    /// Accessor bound to the process environment
    pub fn system() -> Self {
        Self::new(Arc::new(SystemEnvironmentAdapter::new()))
    }

    /// Prepend `prefix` to every key looked up through this accessor.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the variable is present. An empty value counts as present.
    pub fn is_set(&self, key: &str) -> bool {
        self.environment.get_var(&self.full_key(key)).is_some()
    }

    /// The raw string value, without parsing or fallback.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.environment.get_var(&self.full_key(key))
    }

    pub fn get_string(&self, key: &str, fallback: Fallback<String>) -> Result<String, EnvError> {
        self.get(key, fallback)
    }

    pub fn get_int(&self, key: &str, fallback: Fallback<isize>) -> Result<isize, EnvError> {
        self.get(key, fallback)
    }

    pub fn get_int64(&self, key: &str, fallback: Fallback<i64>) -> Result<i64, EnvError> {
        self.get(key, fallback)
    }

    pub fn get_float(&self, key: &str, fallback: Fallback<f64>) -> Result<f64, EnvError> {
        self.get(key, fallback)
    }

    pub fn get_bool(&self, key: &str, fallback: Fallback<bool>) -> Result<bool, EnvError> {
        self.get(key, fallback)
    }

    /// Comma-separated list. An empty value is treated as absent.
    pub fn get_string_list(
        &self,
        key: &str,
        fallback: Fallback<Vec<String>>,
    ) -> Result<Vec<String>, EnvError> {
        self.lookup_string_list(key, fallback).map(Resolved::into_value)
    }

    /// Generic accessor for any [`FromEnvValue`] type.
    pub fn get<T: FromEnvValue>(&self, key: &str, fallback: Fallback<T>) -> Result<T, EnvError> {
        self.lookup(key, fallback).map(Resolved::into_value)
    }

    /// Value or `default`. Never fails: absence and invalid input both yield the default.
    pub fn get_or<T: FromEnvValue>(&self, key: &str, default: T) -> T {
        self.resolve(key, default).value
    }

    /// Value of a variable that has no default.
    pub fn require<T: FromEnvValue>(&self, key: &str) -> Result<T, EnvError> {
        self.resolve_required(key).map(Resolved::into_value)
    }

    pub fn lookup_string(
        &self,
        key: &str,
        fallback: Fallback<String>,
    ) -> Result<Resolved<String>, EnvError> {
        self.lookup(key, fallback)
    }

    /// Look up a value and report where it came from.
    pub fn lookup<T: FromEnvValue>(
        &self,
        key: &str,
        fallback: Fallback<T>,
    ) -> Result<Resolved<T>, EnvError> {
        match fallback {
            Fallback::Default(default) => Ok(self.resolve(key, default)),
            Fallback::Required => self.resolve_required(key),
        }
    }

    pub fn lookup_string_list(
        &self,
        key: &str,
        fallback: Fallback<Vec<String>>,
    ) -> Result<Resolved<Vec<String>>, EnvError> {
        let key = self.full_key(key);
        match self.environment.get_var(&key) {
            Some(raw) if !raw.is_empty() => Ok(Resolved {
                key,
                value: split_list(&raw),
                source: ValueSource::Environment,
                kind: VarKind::StringList,
            }),
            _ => match fallback {
                Fallback::Default(default) => Ok(from_default(key, default, VarKind::StringList)),
                Fallback::Required => Err(missing_required(key)),
            },
        }
    }

    fn resolve<T: FromEnvValue>(&self, key: &str, default: T) -> Resolved<T> {
        let key = self.full_key(key);
        let Some(raw) = self.environment.get_var(&key) else {
            return from_default(key, default, T::KIND);
        };

        match T::from_env_value(&raw) {
            Some(value) => from_environment(key, value, T::KIND),
            None => {
                let expected = T::KIND;
                tracing::warn!(
                    key = %key,
                    value = %raw,
                    %expected,
                    "Environment variable has invalid format, using default"
                );
                Resolved {
                    key,
                    value: default,
                    source: ValueSource::InvalidFallback { raw },
                    kind: T::KIND,
                }
            }
        }
    }

    fn resolve_required<T: FromEnvValue>(&self, key: &str) -> Result<Resolved<T>, EnvError> {
        let key = self.full_key(key);
        let Some(raw) = self.environment.get_var(&key) else {
            return Err(missing_required(key));
        };

        match T::from_env_value(&raw) {
            Some(value) => Ok(from_environment(key, value, T::KIND)),
            None => {
                let expected = T::KIND;
                tracing::error!(
                    key = %key,
                    value = %raw,
                    %expected,
                    "Required environment variable has invalid format"
                );
                Err(EnvError::invalid_format(key, raw, T::KIND))
            }
        }
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl Default for EnvAccessor {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for EnvAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvAccessor")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

fn from_environment<T>(key: String, value: T, kind: VarKind) -> Resolved<T> {
    Resolved {
        key,
        value,
        source: ValueSource::Environment,
        kind,
    }
}

fn from_default<T>(key: String, value: T, kind: VarKind) -> Resolved<T> {
    tracing::debug!(key = %key, "Environment variable not set, using default");
    Resolved {
        key,
        value,
        source: ValueSource::Default,
        kind,
    }
}

fn missing_required(key: String) -> EnvError {
    tracing::error!(key = %key, "Environment variable is required and not set");
    EnvError::missing_required(key)
}
