//! Transport-level operations over the record store.
//!
//! Each operation either fully succeeds or fails with exactly one
//! [`ApiError`] classification; there are no retries and no partial results.
//! The surrounding transport (see `server`) only maps these results onto its
//! wire envelope.

use crate::analyzer;
use crate::filter::{FilterSet, apply_filters, translate};
use crate::store::{StringRecord, StringStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error classifications for the service operations. Every variant carries a
/// stable user-facing message; [`ApiError::status_code`] gives the transport
/// mapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Missing \"value\" field in request body")]
    MissingValueField,

    #[error("Invalid data type for \"value\" (must be string)")]
    InvalidValueType,

    #[error("String already exists in the system")]
    AlreadyExists,

    #[error("String does not exist in the system")]
    NotFound,

    #[error("Missing \"query\" parameter")]
    MissingQuery,

    /// The phrase parsed fine but the derived bounds are unsatisfiable
    /// (minimum length above maximum). Distinct from a validation error: the
    /// input's shape was acceptable, its meaning was not.
    #[error("Query parsed but resulted in conflicting filters")]
    ConflictingFilters,

    /// Defensive fallback. `translate` accepts any text, so no code path
    /// constructs this today; transports keep a mapping for it regardless.
    #[error("Unable to parse natural language query")]
    UnparseableQuery,

    #[error("Invalid value for {field} (must be {expected})")]
    InvalidFilterParam {
        field: &'static str,
        expected: &'static str,
    },
}

impl ApiError {
    /// HTTP-style status code reported by the transport layer.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingValueField
            | ApiError::MissingQuery
            | ApiError::UnparseableQuery
            | ApiError::InvalidFilterParam { .. } => 400,
            ApiError::InvalidValueType | ApiError::ConflictingFilters => 422,
            ApiError::AlreadyExists => 409,
            ApiError::NotFound => 404,
        }
    }
}

/// Filter parameters exactly as they arrive from the transport, before any
/// validation. Every field is an uninterpreted string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// Result payload for a structured list query.
#[derive(Debug, Serialize, PartialEq)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// Result payload for a natural-language search, echoing the original phrase
/// alongside the filters derived from it.
#[derive(Debug, Serialize, PartialEq)]
pub struct SearchResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Create and store a record for the `value` field of a raw JSON body.
///
/// The body is inspected rather than deserialized into a typed struct so a
/// missing key and a present-but-non-string key stay distinct outcomes.
pub fn create(store: &mut StringStore, body: &Value) -> Result<StringRecord, ApiError> {
    let value = match body.get("value") {
        None => return Err(ApiError::MissingValueField),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(ApiError::InvalidValueType),
    };

    let id = analyzer::fingerprint(&value);
    if store.contains(&id) {
        return Err(ApiError::AlreadyExists);
    }

    let record = StringRecord {
        id,
        properties: analyzer::analyze(&value),
        value,
        created_at: Utc::now(),
    };
    store.insert(record.clone());
    Ok(record)
}

/// Natural-language query: translate the phrase, reject unsatisfiable
/// bounds before evaluation, then filter the store.
pub fn search(store: &StringStore, query: Option<&str>) -> Result<SearchResponse, ApiError> {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::MissingQuery),
    };

    let parsed_filters = translate(query);
    if parsed_filters.has_conflicting_bounds() {
        return Err(ApiError::ConflictingFilters);
    }

    let data: Vec<StringRecord> = apply_filters(store.iter(), &parsed_filters)
        .into_iter()
        .cloned()
        .collect();

    Ok(SearchResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query.to_string(),
            parsed_filters,
        },
    })
}

/// Structured query: validate each raw parameter independently, then filter
/// the store. With no parameters set this lists every record.
pub fn list(store: &StringStore, params: &RawFilterParams) -> Result<ListResponse, ApiError> {
    let filters_applied = parse_filter_params(params)?;

    let data: Vec<StringRecord> = apply_filters(store.iter(), &filters_applied)
        .into_iter()
        .cloned()
        .collect();

    Ok(ListResponse {
        count: data.len(),
        data,
        filters_applied,
    })
}

/// Fetch a record by its literal text value, recomputing the fingerprint.
pub fn get(store: &StringStore, value: &str) -> Result<StringRecord, ApiError> {
    store
        .get(&analyzer::fingerprint(value))
        .cloned()
        .ok_or(ApiError::NotFound)
}

/// Delete a record by its literal text value. Removal frees the uniqueness
/// slot, so the same value can be created again afterwards.
pub fn delete(store: &mut StringStore, value: &str) -> Result<(), ApiError> {
    store
        .remove(&analyzer::fingerprint(value))
        .map(|_| ())
        .ok_or(ApiError::NotFound)
}

/// Validate raw filter parameters field by field, failing on the first
/// invalid one with a field-specific classification.
pub fn parse_filter_params(params: &RawFilterParams) -> Result<FilterSet, ApiError> {
    let mut filters = FilterSet::new();

    if let Some(raw) = &params.is_palindrome {
        filters.is_palindrome = Some(match raw.to_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => {
                return Err(ApiError::InvalidFilterParam {
                    field: "is_palindrome",
                    expected: "true or false",
                });
            }
        });
    }

    if let Some(raw) = &params.min_length {
        filters.min_length = Some(parse_non_negative(raw, "min_length")?);
    }

    if let Some(raw) = &params.max_length {
        filters.max_length = Some(parse_non_negative(raw, "max_length")?);
    }

    if let Some(raw) = &params.word_count {
        filters.word_count = Some(parse_non_negative(raw, "word_count")?);
    }

    if let Some(raw) = &params.contains_character {
        let mut chars = raw.chars();
        filters.contains_character = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => {
                return Err(ApiError::InvalidFilterParam {
                    field: "contains_character",
                    expected: "single character",
                });
            }
        };
    }

    Ok(filters)
}

fn parse_non_negative(raw: &str, field: &'static str) -> Result<u32, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidFilterParam {
            field,
            expected: "non-negative integer",
        })
}
