//! # Query Parameter Parser
//!
//! Interprets raw query-string pairs into a typed parameter set.
//!
//! Only the first value of a repeated key is used, so the HTTP layer must
//! hand this parser the ordered pair list rather than a map. Unrecognized
//! keys are ignored.

use super::errors::{ApiError, ApiResult};
use crate::store::Todo;

/// A field the collection can be ordered by.
///
/// The set of supported keys is deliberately explicit; resolving an
/// unsupported name yields `None`, which the pipeline treats as "leave the
/// collection in its existing order".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Owner,
    Category,
    Body,
    Status,
}

impl OrderField {
    /// Resolve an `orderBy` parameter value.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(OrderField::Owner),
            "category" => Some(OrderField::Category),
            "body" => Some(OrderField::Body),
            "status" => Some(OrderField::Status),
            _ => None,
        }
    }

    /// The textual sort key for a todo under this field.
    ///
    /// `status` compares by its canonical textual form, so `"false"`
    /// sorts before `"true"`.
    pub fn key<'a>(&self, todo: &'a Todo) -> &'a str {
        match self {
            OrderField::Owner => &todo.owner,
            OrderField::Category => &todo.category,
            OrderField::Body => &todo.body,
            OrderField::Status => {
                if todo.status {
                    "true"
                } else {
                    "false"
                }
            }
        }
    }
}

/// Parsed query parameters for a list request.
///
/// Every field is optional; an absent field makes the corresponding
/// pipeline stage a passthrough.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Exact-match filter on `owner`
    pub owner: Option<String>,

    /// Exact-match filter on `category`
    pub category: Option<String>,

    /// Substring filter on `body`
    pub contains: Option<String>,

    /// Completion filter: `"complete"` means complete, anything else
    /// means incomplete
    pub status: Option<bool>,

    /// Ordering field, if a supported one was requested
    pub order_by: Option<OrderField>,

    /// Maximum number of records to return
    pub limit: Option<usize>,
}

impl QueryParams {
    /// Parse query parameters from the raw ordered pair list.
    ///
    /// The only parse failure is a `limit` value that is not a
    /// non-negative integer.
    pub fn parse(pairs: &[(String, String)]) -> ApiResult<Self> {
        let status = first_value(pairs, "status");
        let order_by = first_value(pairs, "orderBy");
        let limit = first_value(pairs, "limit");

        Ok(QueryParams {
            owner: first_value(pairs, "owner").map(str::to_string),
            category: first_value(pairs, "category").map(str::to_string),
            contains: first_value(pairs, "contains").map(str::to_string),
            status: status.map(|v| v == "complete"),
            order_by: order_by.and_then(OrderField::from_param),
            limit: limit.map(parse_limit).transpose()?,
        })
    }
}

/// First value for a key, in pair order.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// Parse the `limit` parameter as a non-negative integer.
fn parse_limit(value: &str) -> ApiResult<usize> {
    value
        .parse()
        .map_err(|_| ApiError::InvalidLimit(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_params() {
        let params = QueryParams::parse(&[]).unwrap();
        assert!(params.owner.is_none());
        assert!(params.category.is_none());
        assert!(params.contains.is_none());
        assert!(params.status.is_none());
        assert!(params.order_by.is_none());
        assert!(params.limit.is_none());
    }

    #[test]
    fn test_all_params() {
        let params = QueryParams::parse(&pairs(&[
            ("owner", "Fry"),
            ("category", "homework"),
            ("contains", "esse"),
            ("status", "complete"),
            ("orderBy", "owner"),
            ("limit", "10"),
        ]))
        .unwrap();

        assert_eq!(params.owner.as_deref(), Some("Fry"));
        assert_eq!(params.category.as_deref(), Some("homework"));
        assert_eq!(params.contains.as_deref(), Some("esse"));
        assert_eq!(params.status, Some(true));
        assert_eq!(params.order_by, Some(OrderField::Owner));
        assert_eq!(params.limit, Some(10));
    }

    #[test]
    fn test_first_value_wins_on_repeated_key() {
        let params = QueryParams::parse(&pairs(&[
            ("owner", "Fry"),
            ("owner", "Blanche"),
        ]))
        .unwrap();
        assert_eq!(params.owner.as_deref(), Some("Fry"));
    }

    #[test]
    fn test_first_order_by_wins_even_when_unsupported() {
        // The first value is the one interpreted; a later valid value
        // must not resurrect ordering.
        let params = QueryParams::parse(&pairs(&[
            ("orderBy", "bogus"),
            ("orderBy", "owner"),
        ]))
        .unwrap();
        assert!(params.order_by.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let params = QueryParams::parse(&pairs(&[("frobnicate", "yes"), ("owner", "Dawn")]))
            .unwrap();
        assert_eq!(params.owner.as_deref(), Some("Dawn"));
    }

    #[test]
    fn test_status_is_lenient() {
        assert_eq!(
            QueryParams::parse(&pairs(&[("status", "complete")]))
                .unwrap()
                .status,
            Some(true)
        );
        assert_eq!(
            QueryParams::parse(&pairs(&[("status", "incomplete")]))
                .unwrap()
                .status,
            Some(false)
        );
        // Any other string, typos included, means incomplete
        assert_eq!(
            QueryParams::parse(&pairs(&[("status", "compleet")]))
                .unwrap()
                .status,
            Some(false)
        );
    }

    #[test]
    fn test_unsupported_order_by_is_silent() {
        let params = QueryParams::parse(&pairs(&[("orderBy", "shoe_size")])).unwrap();
        assert!(params.order_by.is_none());
    }

    #[test]
    fn test_limit_parses() {
        assert_eq!(
            QueryParams::parse(&pairs(&[("limit", "0")])).unwrap().limit,
            Some(0)
        );
        assert_eq!(
            QueryParams::parse(&pairs(&[("limit", "42")])).unwrap().limit,
            Some(42)
        );
    }

    #[test]
    fn test_bad_limit_is_an_error() {
        let result = QueryParams::parse(&pairs(&[("limit", "abc")]));
        match result {
            Err(ApiError::InvalidLimit(value)) => assert_eq!(value, "abc"),
            other => panic!("expected InvalidLimit, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_limit_is_an_error() {
        assert!(matches!(
            QueryParams::parse(&pairs(&[("limit", "-1")])),
            Err(ApiError::InvalidLimit(_))
        ));
    }

    #[test]
    fn test_order_field_status_key() {
        let complete = Todo {
            id: "a".to_string(),
            owner: "Fry".to_string(),
            status: true,
            body: String::new(),
            category: String::new(),
        };
        let incomplete = Todo {
            status: false,
            ..complete.clone()
        };

        assert_eq!(OrderField::Status.key(&complete), "true");
        assert_eq!(OrderField::Status.key(&incomplete), "false");
        assert!(OrderField::Status.key(&incomplete) < OrderField::Status.key(&complete));
    }
}
