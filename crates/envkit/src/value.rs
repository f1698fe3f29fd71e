//! Parsing raw environment strings into typed values.

use std::fmt;

/// Type tag for a requested variable, used in log lines and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    String,
    /// Platform-width signed integer
    Int,
    Int64,
    /// Any other fixed-width integer, tagged with its upper-case name (e.g. `U16`)
    Integer(&'static str),
    Float,
    Bool,
    StringList,
}

impl VarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Int => "INT",
            Self::Int64 => "INT64",
            Self::Integer(name) => *name,
            Self::Float => "FLOAT",
            Self::Bool => "BOOL",
            Self::StringList => "LIST",
        }
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type that can be parsed from the raw string value of an environment variable.
///
/// Returning `None` means the value is present but unusable; the accessor then
/// falls back to the caller's default or reports [`crate::EnvError::InvalidFormat`].
pub trait FromEnvValue: Sized {
    const KIND: VarKind;

    fn from_env_value(raw: &str) -> Option<Self>;
}

impl FromEnvValue for String {
    const KIND: VarKind = VarKind::String;

    fn from_env_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromEnvValue for bool {
    const KIND: VarKind = VarKind::Bool;

    fn from_env_value(raw: &str) -> Option<Self> {
        parse_bool(raw)
    }
}

macro_rules! impl_from_env_value_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                const KIND: VarKind = VarKind::Float;

                fn from_env_value(raw: &str) -> Option<Self> {
                    let value: $ty = raw.parse().ok()?;
                    (value.is_finite() || is_non_finite_literal(raw)).then_some(value)
                }
            }
        )*
    };
}

impl_from_env_value_float!(f32, f64);

/// Whether `raw` spells out infinity or NaN, as opposed to overflowing to it.
fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|t| unsigned.eq_ignore_ascii_case(t))
}

macro_rules! impl_from_env_value_int {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                const KIND: VarKind = $kind;

                fn from_env_value(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )*
    };
}

impl_from_env_value_int! {
    isize => VarKind::Int,
    i64 => VarKind::Int64,
    i8 => VarKind::Integer("I8"),
    i16 => VarKind::Integer("I16"),
    i32 => VarKind::Integer("I32"),
    usize => VarKind::Integer("USIZE"),
    u8 => VarKind::Integer("U8"),
    u16 => VarKind::Integer("U16"),
    u32 => VarKind::Integer("U32"),
    u64 => VarKind::Integer("U64"),
}

/// Parse a boolean token.
///
/// Accepts `1`, `t`, `true` and `0`, `f`, `false` in any ASCII case.
/// Everything else, including the empty string, is rejected.
pub fn parse_bool(raw: &str) -> Option<bool> {
    const TRUE_TOKENS: [&str; 3] = ["1", "t", "true"];
    const FALSE_TOKENS: [&str; 3] = ["0", "f", "false"];

    if TRUE_TOKENS.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSE_TOKENS.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}

/// Split a list value on literal commas. No trimming, no escaping.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
