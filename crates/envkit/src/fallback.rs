//! Whether a variable is required or has a fallback value.

/// Default policy for a single lookup.
///
/// `Required` makes absence an error. For string lists, `Default(Vec::new())`
/// is a valid fallback meaning "missing is fine, treat it as empty", which is
/// distinct from `Required`.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<T> {
    Default(T),
    Required,
}

impl<T> Fallback<T> {
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Default(value) => Some(value),
            Self::Required => None,
        }
    }
}

impl<T> From<Option<T>> for Fallback<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Default(value),
            None => Self::Required,
        }
    }
}

impl From<&str> for Fallback<String> {
    fn from(value: &str) -> Self {
        Self::Default(value.to_string())
    }
}

impl From<&[&str]> for Fallback<Vec<String>> {
    fn from(values: &[&str]) -> Self {
        Self::Default(values.iter().map(|v| v.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(Fallback::from(Some(3)), Fallback::Default(3));
        assert_eq!(Fallback::<i32>::from(None), Fallback::Required);
    }

    #[test]
    fn test_empty_list_default_is_not_required() {
        let fallback: Fallback<Vec<String>> = Fallback::Default(Vec::new());
        assert!(!fallback.is_required());
        assert_eq!(fallback.into_option(), Some(Vec::new()));
    }

    #[test]
    fn test_from_str_slice() {
        let fallback = Fallback::from(&["foo", "bar"][..]);
        assert_eq!(
            fallback,
            Fallback::Default(vec!["foo".to_string(), "bar".to_string()])
        );
    }
}
