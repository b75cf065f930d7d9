use std::str::FromStr;

use crate::ModelError;

/// Boolean switch with explicit enable/disable semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag(bool);

impl Flag {
    /// Create an enabled flag.
    pub const fn enabled() -> Self {
        Self(true)
    }

    /// Create a disabled flag.
    pub const fn disabled() -> Self {
        Self(false)
    }

    /// Check if the flag is enabled.
    pub const fn is_enabled(&self) -> bool {
        self.0
    }

    /// Check if the flag is disabled.
    pub const fn is_disabled(&self) -> bool {
        !self.0
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        Self(b)
    }
}

impl FromStr for Flag {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bool(s).map(Flag)
    }
}

/// Parses a boolean literal.
///
/// Accepted: `1 t T TRUE true True` and `0 f F FALSE false False`.
/// Anything else, including surrounding whitespace and the empty string, is rejected.
pub fn parse_bool(s: &str) -> Result<bool, ModelError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ModelError::InvalidBool(s.to_string())),
    }
}
