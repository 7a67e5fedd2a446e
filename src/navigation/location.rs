//! Location parsing
//!
//! Splits a raw URL location (`/pie-chart?theme=dark#legend`) into path,
//! query and fragment.

use serde::Serialize;
use std::fmt;

/// A parsed in-app location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Location {
    /// Parse a location string
    ///
    /// The fragment starts at the first `#`; the query at the first `?` that
    /// precedes it. Empty query or fragment parts become `None`. An empty
    /// path becomes `/`.
    pub fn parse(raw: &str) -> Self {
        let (before_hash, hash) = match raw.split_once('#') {
            Some((before, hash)) => (before, non_empty(hash)),
            None => (raw, None),
        };
        let (path, query) = match before_hash.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (before_hash, None),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self { path, query, hash }
    }

    /// Same location with a different path
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: self.query.clone(),
            hash: self.hash.clone(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let loc = Location::parse("/bar-chart");
        assert_eq!(loc.path, "/bar-chart");
        assert_eq!(loc.query, None);
        assert_eq!(loc.hash, None);
    }

    #[test]
    fn test_parse_query_and_hash() {
        let loc = Location::parse("/pie-chart?theme=dark&size=2#legend");
        assert_eq!(loc.path, "/pie-chart");
        assert_eq!(loc.query.as_deref(), Some("theme=dark&size=2"));
        assert_eq!(loc.hash.as_deref(), Some("legend"));
        assert_eq!(loc.to_string(), "/pie-chart?theme=dark&size=2#legend");
    }

    #[test]
    fn test_question_mark_inside_hash_is_not_a_query() {
        let loc = Location::parse("/line-chart#section?x=1");
        assert_eq!(loc.path, "/line-chart");
        assert_eq!(loc.query, None);
        assert_eq!(loc.hash.as_deref(), Some("section?x=1"));
    }

    #[test]
    fn test_parse_empty_and_relative() {
        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("?a=1").path, "/");
        assert_eq!(Location::parse("gauge-chart").path, "/gauge-chart");
        assert_eq!(Location::parse("/x?#").query, None);
    }
}
