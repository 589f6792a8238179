//! Row filters rendered in the service's query syntax.
//!
//! The hosted service exposes table endpoints that take filters as query
//! string pairs, `column=operator.value`. Only the two operators the
//! application uses are modeled: exact match and case-insensitive partial
//! match. Multiple filters on one request are ANDed by the service.
//!
//! Values are rendered raw. Percent-encoding is the HTTP layer's job and
//! must happen exactly once, when the request's query string is serialized;
//! encoding here as well would make the service decode to `%20` literals
//! instead of spaces.

/// A single column filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`, rendered as `eq.<value>`.
    Eq(String, String),
    /// Case-insensitive substring match, rendered as `ilike.*<substring>*`.
    ILike(String, String),
}

impl Filter {
    /// Exact-match filter on a column.
    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq(column.into(), value.into())
    }

    /// Case-insensitive partial match on a column. The substring is wrapped
    /// in wildcards by the renderer; callers pass the bare fragment.
    #[must_use]
    pub fn ilike(column: impl Into<String>, substring: impl Into<String>) -> Self {
        Self::ILike(column.into(), substring.into())
    }

    /// Render as a raw query pair. The operator prefix and wildcards are
    /// part of the service grammar; the value is left unencoded for the
    /// request builder to escape when it serializes the query string.
    #[must_use]
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Self::Eq(column, value) => (column.clone(), format!("eq.{value}")),
            Self::ILike(column, substring) => {
                (column.clone(), format!("ilike.*{substring}*"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_rendering() {
        let (k, v) = Filter::eq("id", "it-42").to_query_pair();
        assert_eq!(k, "id");
        assert_eq!(v, "eq.it-42");
    }

    #[test]
    fn test_ilike_wraps_substring_in_wildcards() {
        let (k, v) = Filter::ilike("title", "test item").to_query_pair();
        assert_eq!(k, "title");
        assert_eq!(v, "ilike.*test item*");
    }

    #[test]
    fn test_values_are_not_pre_encoded() {
        // Escaping happens once, in the request builder. A space must stay
        // a space here or the service would see `%20` literals after its
        // single decode.
        let (_, v) = Filter::eq("title", "a&b=c").to_query_pair();
        assert_eq!(v, "eq.a&b=c");

        let (_, v) = Filter::ilike("title", "änderung").to_query_pair();
        assert_eq!(v, "ilike.*änderung*");
    }

    #[test]
    fn test_literal_percent_passes_through() {
        // A `%` in the fragment reaches the service as-is; the generated
        // clients the backend ships behave the same way.
        let (_, v) = Filter::ilike("title", "100%").to_query_pair();
        assert_eq!(v, "ilike.*100%*");
    }
}
