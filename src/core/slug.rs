//! Validated slug value.
//!
//! A `Slug` holds only lowercase ASCII letters, digits, and single hyphens
//! between them. It is never empty. The only ways to get one are
//! `Slug::parse` (validate an existing string) and the slugifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    /// Validate `value` as-is. No normalization is applied.
    pub fn parse(value: &str) -> Result<Self> {
        match problem(value) {
            Some(problem) => Err(Error::slug_invalid(value, problem)),
            None => Ok(Self(value.to_string())),
        }
    }

    /// Wrap a string the slugifier has already normalized.
    pub(crate) fn from_normalized(value: String) -> Self {
        debug_assert!(problem(&value).is_none(), "not a slug: {value:?}");
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Describe why `value` is not a slug, or `None` when it is one.
pub fn problem(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("slug cannot be empty");
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Some("slug cannot start or end with a hyphen");
    }
    if value.contains("--") {
        return Some("slug cannot contain consecutive hyphens");
    }
    if value
        .chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
    {
        return Some("slug may only contain lowercase letters, digits and hyphens");
    }
    None
}

pub fn is_valid(value: &str) -> bool {
    problem(value).is_none()
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl FromStr for Slug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Slug {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match problem(&raw) {
            Some(problem) => Err(serde::de::Error::custom(format!(
                "invalid slug {:?}: {}",
                raw, problem
            ))),
            None => Ok(Self(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn parse_accepts_valid_slug() {
        let slug = Slug::parse("now-is-the-time-123").unwrap();
        assert_eq!(slug.as_str(), "now-is-the-time-123");
        assert_eq!(slug.to_string(), "now-is-the-time-123");
    }

    #[test]
    fn parse_rejects_uppercase() {
        let err = Slug::parse("Hello").unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugInvalid);
    }

    #[test]
    fn parse_rejects_edge_and_double_hyphens() {
        assert!(Slug::parse("-a").is_err());
        assert!(Slug::parse("a-").is_err());
        assert!(Slug::parse("a--b").is_err());
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(problem(""), Some("slug cannot be empty"));
    }

    #[test]
    fn deserialize_validates() {
        let ok: Slug = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(ok.as_str(), "abc-1");

        let bad: std::result::Result<Slug, _> = serde_json::from_str("\"a b\"");
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let slug = Slug::parse("x-y").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"x-y\"");
    }
}
