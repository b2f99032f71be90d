//! Free-text search helpers shared by the catalog and recipe facades.

use crate::error::CoreError;

/// Maximum accepted length of a free-text search query, in characters.
pub const MAX_QUERY_LEN: usize = 200;

/// Filter value meaning "no category/difficulty restriction".
pub const FILTER_ALL: &str = "all";

/// A validated, lowercased search term. `None` inside means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
    /// Validate and normalize a raw query string.
    ///
    /// Surrounding whitespace is ignored; an empty (or absent) query matches
    /// every record.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.chars().count() > MAX_QUERY_LEN {
            return Err(CoreError::Validation(format!(
                "search query must be at most {MAX_QUERY_LEN} characters"
            )));
        }
        if trimmed.is_empty() {
            Ok(Self(None))
        } else {
            Ok(Self(Some(trimmed.to_lowercase())))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Case-insensitive substring match against any of `fields`.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        match &self.0 {
            None => true,
            Some(term) => fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(term.as_str())),
        }
    }
}

/// Returns `None` for an absent filter or the literal `"all"`, otherwise the
/// trimmed value.
pub fn optional_filter(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(FILTER_ALL))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        let term = SearchTerm::parse(None).unwrap();
        assert!(term.is_empty());
        assert!(term.matches_any(["anything"]));

        let blank = SearchTerm::parse(Some("   ")).unwrap();
        assert!(blank.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let term = SearchTerm::parse(Some("TWit")).unwrap();
        assert!(term.matches_any(["Twitter API v2"]));
        assert!(term.matches_any(["nope", "twitch"]));
        assert!(!term.matches_any(["Stripe", "payments"]));
    }

    #[test]
    fn overly_long_query_is_rejected() {
        let long = "x".repeat(MAX_QUERY_LEN + 1);
        assert_matches!(
            SearchTerm::parse(Some(&long)),
            Err(CoreError::Validation(_))
        );
        assert!(SearchTerm::parse(Some(&"x".repeat(MAX_QUERY_LEN))).is_ok());
    }

    #[test]
    fn all_filter_is_no_filter() {
        assert_eq!(optional_filter(None), None);
        assert_eq!(optional_filter(Some("all")), None);
        assert_eq!(optional_filter(Some("ALL")), None);
        assert_eq!(optional_filter(Some("")), None);
        assert_eq!(optional_filter(Some(" Social ")), Some("Social"));
    }
}
