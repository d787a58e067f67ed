//! Composite class-selection token.
//!
//! A faculty member's "class" is a (section, subject) pair. At serialization
//! boundaries (URL query strings, request bodies, UI selection widgets) the
//! pair travels as a single `"{section_id}|{subject_id}"` token; everywhere
//! else code carries the typed [`ClassKey`] pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validated (section, subject) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassKey {
    pub section_id: i64,
    pub subject_id: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassKeyError {
    #[error("No class selected")]
    Empty,
    #[error("Invalid class format")]
    MissingSeparator,
    #[error("Invalid section or subject ID")]
    InvalidId,
}

impl ClassKey {
    pub fn new(section_id: i64, subject_id: i64) -> Self {
        Self {
            section_id,
            subject_id,
        }
    }

    /// Joins the two identifiers with a literal `|` separator.
    pub fn encode(&self) -> String {
        format!("{}|{}", self.section_id, self.subject_id)
    }

    /// Parses and validates a class token.
    ///
    /// Rejects the empty token, tokens without the separator, and tokens
    /// where either half is empty, the literal string `"undefined"` (a
    /// stringified-nothing that leaks out of selection widgets), or not a
    /// valid integer identifier.
    pub fn parse(token: &str) -> Result<Self, ClassKeyError> {
        if token.is_empty() {
            return Err(ClassKeyError::Empty);
        }

        let Some((section, subject)) = token.split_once('|') else {
            return Err(ClassKeyError::MissingSeparator);
        };

        if section.is_empty()
            || subject.is_empty()
            || section == "undefined"
            || subject == "undefined"
        {
            return Err(ClassKeyError::InvalidId);
        }

        let section_id = section.parse().map_err(|_| ClassKeyError::InvalidId)?;
        let subject_id = subject.parse().map_err(|_| ClassKeyError::InvalidId)?;

        Ok(Self {
            section_id,
            subject_id,
        })
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_for_valid_ids() {
        let key = ClassKey::new(42, 7);
        assert_eq!(key.encode(), "42|7");
        assert_eq!(ClassKey::parse(&key.encode()), Ok(key));
    }

    #[test]
    fn rejects_empty_token() {
        let err = ClassKey::parse("").unwrap_err();
        assert_eq!(err, ClassKeyError::Empty);
        assert_eq!(err.to_string(), "No class selected");
    }

    #[test]
    fn rejects_token_without_separator() {
        let err = ClassKey::parse("abc").unwrap_err();
        assert_eq!(err, ClassKeyError::MissingSeparator);
        assert_eq!(err.to_string(), "Invalid class format");
    }

    #[test]
    fn rejects_undefined_halves() {
        for token in ["12|undefined", "undefined|7", "undefined|undefined"] {
            let err = ClassKey::parse(token).unwrap_err();
            assert_eq!(err, ClassKeyError::InvalidId);
            assert_eq!(err.to_string(), "Invalid section or subject ID");
        }
    }

    #[test]
    fn rejects_empty_halves() {
        assert_eq!(ClassKey::parse("|7"), Err(ClassKeyError::InvalidId));
        assert_eq!(ClassKey::parse("12|"), Err(ClassKeyError::InvalidId));
        assert_eq!(ClassKey::parse("|"), Err(ClassKeyError::InvalidId));
    }

    #[test]
    fn rejects_non_numeric_halves() {
        assert_eq!(ClassKey::parse("abc|7"), Err(ClassKeyError::InvalidId));
        assert_eq!(ClassKey::parse("12|x"), Err(ClassKeyError::InvalidId));
    }
}
