//! Compiled name patterns.
//!
//! Action names and object names are filtered with regular expressions.
//! Matching is a search, not a full-string comparison: `Apple` matches
//! `Apple_3`. Anchor with `^...$` when an exact match is needed.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{Result, RulesError};

/// A validated regular expression.
///
/// Construction fails fast on invalid syntax, so evaluation never has to
/// deal with a broken pattern.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Source of the wildcard pattern.
    pub const ANY: &'static str = ".*";

    /// Compile a pattern.
    pub fn new(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Self)
            .map_err(|source_err| RulesError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    /// The wildcard pattern, matching every name including the empty one.
    #[must_use]
    pub fn any() -> Self {
        Self(Regex::new(Self::ANY).expect("wildcard pattern compiles"))
    }

    /// Test a name against the pattern.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.0.is_match(name)
    }

    /// Test an optional name. Absent names never match.
    #[must_use]
    pub fn matches_opt(&self, name: Option<&str>) -> bool {
        name.is_some_and(|n| self.is_match(n))
    }

    /// The pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::any()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.as_str())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}
