//! Utility functions and types.

use std::fmt::Debug;

/// Redact wraps a secret so that `Debug` output never reveals it.
///
/// - Empty values print as `EMPTY`.
/// - Values shorter than 12 bytes are fully masked as `***`.
/// - Longer values keep their first and last three characters, so an access key
///   like `AKIDEXAMPLE1234` can still be told apart from another one.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        if length < 12 {
            return f.write_str("***");
        }

        // Secrets are ASCII in practice, fall back to full masking otherwise.
        match (self.0.get(..3), self.0.get(length - 3..)) {
            (Some(head), Some(tail)) => write!(f, "{head}***{tail}"),
            _ => f.write_str("***"),
        }
    }
}
