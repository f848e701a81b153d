//! # Search Query
//!
//! The minimum-length rule is a cost-control policy, not a validation error:
//! a short query is simply "nothing to search yet".

/// Default minimum query length, in characters.
pub const MIN_QUERY_LEN: usize = 3;

/// A trimmed search query that is long enough to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim `raw` and accept it if it has at least `min_len` characters.
    ///
    /// Length is counted in `char`s so "Ñuñ" counts as three.
    pub fn parse(raw: &str, min_len: usize) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < min_len {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
