//! In-memory environment adapter.

use std::collections::HashMap;

use crate::ports::EnvironmentPort;

/// Environment backed by a plain map.
///
/// Useful in tests and for composing configuration from sources other than
/// the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironmentAdapter {
    vars: HashMap<String, String>,
}

impl MapEnvironmentAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvironmentPort for MapEnvironmentAdapter {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironmentAdapter
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for MapEnvironmentAdapter {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}
