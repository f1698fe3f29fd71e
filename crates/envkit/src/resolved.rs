//! A looked-up value together with where it came from.

use crate::error::EnvError;
use crate::value::VarKind;

/// Source of a resolved value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Parsed from the environment
    Environment,
    /// Variable was absent (or an empty list) and the default was used
    Default,
    /// Variable was present but invalid; the default was substituted
    InvalidFallback { raw: String },
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Default => "default",
            Self::InvalidFallback { .. } => "invalid_fallback",
        }
    }
}

/// A resolved environment value with its source
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    /// Full key as looked up, including any accessor prefix
    pub key: String,
    pub value: T,
    pub source: ValueSource,
    pub kind: VarKind,
}

impl<T> Resolved<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn is_default(&self) -> bool {
        !matches!(self.source, ValueSource::Environment)
    }

    /// The format error that was swallowed when the default replaced an invalid value.
    pub fn warning(&self) -> Option<EnvError> {
        match &self.source {
            ValueSource::InvalidFallback { raw } => {
                Some(EnvError::invalid_format(self.key.clone(), raw.clone(), self.kind))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_only_for_invalid_fallback() {
        let from_env = Resolved {
            key: "PORT".to_string(),
            value: 80_isize,
            source: ValueSource::Environment,
            kind: VarKind::Int,
        };
        assert!(from_env.warning().is_none());
        assert!(!from_env.is_default());

        let substituted = Resolved {
            source: ValueSource::InvalidFallback {
                raw: "eighty".to_string(),
            },
            ..from_env
        };
        assert!(substituted.is_default());
        assert_eq!(
            substituted.warning(),
            Some(EnvError::invalid_format("PORT", "eighty", VarKind::Int))
        );
        assert_eq!(substituted.source.as_str(), "invalid_fallback");
    }
}
