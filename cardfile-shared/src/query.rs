/// Contact-search query builder
///
/// Builds the structured filter the upstream contacts-query endpoint
/// expects: a logical OR of prefix matches on first and last name, a fixed
/// page size, and the `FULL` fieldset so all optional contact sections are
/// returned.
///
/// The builder is the only entry point, and it refuses blank input: an
/// empty or whitespace-only term yields `None`, which callers treat as
/// "issue no request at all".
///
/// # Wire shape
///
/// ```json
/// {
///   "query": {
///     "filter": {
///       "$or": [
///         { "info.name.first": { "$startsWith": "ann" } },
///         { "info.name.last":  { "$startsWith": "ann" } }
///       ]
///     },
///     "paging": { "limit": 10 },
///     "fieldsets": ["FULL"]
///   }
/// }
/// ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Field path for first-name prefix matching
pub const FIELD_FIRST_NAME: &str = "info.name.first";

/// Field path for last-name prefix matching
pub const FIELD_LAST_NAME: &str = "info.name.last";

/// Result-count cap applied to every name search
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Top-level contacts-query request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactQuery {
    #[validate(nested)]
    pub query: QueryBody,
}

/// Query body: filter, paging, and fieldset selection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QueryBody {
    pub filter: NameFilter,

    #[validate(nested)]
    pub paging: Paging,

    pub fieldsets: Vec<Fieldset>,
}

/// Disjunction of per-field prefix clauses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameFilter {
    /// Each clause maps one field path to a prefix match
    #[serde(rename = "$or")]
    pub any_of: Vec<PrefixClause>,
}

/// A single field-path → prefix-match clause
pub type PrefixClause = BTreeMap<String, PrefixMatch>;

/// Prefix match operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixMatch {
    #[serde(rename = "$startsWith")]
    pub starts_with: String,
}

/// Paging controls
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Paging {
    /// Maximum number of contacts to return
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
}

/// Named fieldset selector understood by the upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Fieldset {
    /// All optional contact sections
    Full,
}

impl ContactQuery {
    /// Builds the standard name search for a free-text term.
    ///
    /// The term is trimmed first. Returns `None` for empty or
    /// whitespace-only input; the caller must then issue no request.
    ///
    /// # Example
    ///
    /// ```
    /// use cardfile_shared::query::ContactQuery;
    ///
    /// assert!(ContactQuery::by_name_prefix("ann").is_some());
    /// assert!(ContactQuery::by_name_prefix("   ").is_none());
    /// ```
    pub fn by_name_prefix(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        let clause = |field: &str| {
            let mut map = PrefixClause::new();
            map.insert(
                field.to_string(),
                PrefixMatch {
                    starts_with: term.to_string(),
                },
            );
            map
        };

        Some(ContactQuery {
            query: QueryBody {
                filter: NameFilter {
                    any_of: vec![clause(FIELD_FIRST_NAME), clause(FIELD_LAST_NAME)],
                },
                paging: Paging {
                    limit: DEFAULT_PAGE_LIMIT,
                },
                fieldsets: vec![Fieldset::Full],
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_terms_build_nothing() {
        assert!(ContactQuery::by_name_prefix("").is_none());
        assert!(ContactQuery::by_name_prefix("   ").is_none());
        assert!(ContactQuery::by_name_prefix("\t\n").is_none());
    }

    #[test]
    fn test_term_is_trimmed() {
        let query = ContactQuery::by_name_prefix("  ann ").unwrap();
        let clause = &query.query.filter.any_of[0];
        assert_eq!(clause[FIELD_FIRST_NAME].starts_with, "ann");
    }

    #[test]
    fn test_wire_shape() {
        let query = ContactQuery::by_name_prefix("ann").unwrap();
        let value = serde_json::to_value(&query).unwrap();

        assert_eq!(
            value,
            json!({
                "query": {
                    "filter": {
                        "$or": [
                            { "info.name.first": { "$startsWith": "ann" } },
                            { "info.name.last": { "$startsWith": "ann" } }
                        ]
                    },
                    "paging": { "limit": 10 },
                    "fieldsets": ["FULL"]
                }
            })
        );
    }

    #[test]
    fn test_builder_passes_validation() {
        let query = ContactQuery::by_name_prefix("ann").unwrap();
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_limit_fails_validation() {
        let mut query = ContactQuery::by_name_prefix("ann").unwrap();
        query.query.paging.limit = 0;
        assert!(query.validate().is_err());

        query.query.paging.limit = 500;
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_round_trips_through_json() {
        let query = ContactQuery::by_name_prefix("ann").unwrap();
        let text = serde_json::to_string(&query).unwrap();
        let parsed: ContactQuery = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.query.paging.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(parsed.query.fieldsets, vec![Fieldset::Full]);
    }
}
