use super::error::FilterDecodeError;
use super::kinds::{FilterKind, HostFilter, MethodFilter, PathFilter, StatusCodeFilter};
use crate::record::RequestRecord;
use serde::{Deserialize, Serialize};
use std::mem;

/// A search filter: exactly one concrete kind and its chosen values
///
/// The closed tagged union behind which the UI stores heterogeneous filter
/// kinds. Equality and hashing cover the wrapped kind and its values;
/// [`Filter::is_same_kind`] compares only which kind is wrapped.
///
/// Serialized form is `{"kind": "statusCode" | "host" | "method" | "path",
/// "values": [...]}` and round-trips to an equal variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Filter {
    StatusCode(StatusCodeFilter),
    Host(HostFilter),
    Method(MethodFilter),
    Path(PathFilter),
}

impl Filter {
    /// Whether the record satisfies this filter
    pub fn matches(&self, record: &dyn RequestRecord) -> bool {
        match self {
            Filter::StatusCode(filter) => filter.is_match(record),
            Filter::Host(filter) => filter.is_match(record),
            Filter::Method(filter) => filter.is_match(record),
            Filter::Path(filter) => filter.is_match(record),
        }
    }

    /// True iff both variants wrap the same concrete kind; values may differ
    pub fn is_same_kind(&self, other: &Filter) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Display label of the wrapped kind
    pub fn name(&self) -> &'static str {
        match self {
            Filter::StatusCode(filter) => filter.name(),
            Filter::Host(filter) => filter.name(),
            Filter::Method(filter) => filter.name(),
            Filter::Path(filter) => filter.name(),
        }
    }

    /// Sample inputs for the wrapped kind
    pub fn value_examples(&self) -> &'static [&'static str] {
        match self {
            Filter::StatusCode(filter) => filter.value_examples(),
            Filter::Host(filter) => filter.value_examples(),
            Filter::Method(filter) => filter.value_examples(),
            Filter::Path(filter) => filter.value_examples(),
        }
    }

    /// The wrapped kind's values rendered for display
    pub fn rendered_values(&self) -> Vec<String> {
        match self {
            Filter::StatusCode(filter) => filter.rendered_values(),
            Filter::Host(filter) => filter.rendered_values(),
            Filter::Method(filter) => filter.rendered_values(),
            Filter::Path(filter) => filter.rendered_values(),
        }
    }

    /// Compact label summarizing the wrapped value set
    pub fn token(&self) -> String {
        match self {
            Filter::StatusCode(filter) => filter.token(),
            Filter::Host(filter) => filter.token(),
            Filter::Method(filter) => filter.token(),
            Filter::Path(filter) => filter.token(),
        }
    }

    /// Encode to the stable JSON form used for persistence/sharing
    pub fn encode(&self) -> Result<String, FilterDecodeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored filter, surfacing failures to the persistence boundary
    pub fn decode(json: &str) -> Result<Self, FilterDecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Encode a whole filter set as a JSON array
pub fn encode_filters(filters: &[Filter]) -> Result<String, FilterDecodeError> {
    Ok(serde_json::to_string(filters)?)
}

/// Decode a stored filter set
pub fn decode_filters(json: &str) -> Result<Vec<Filter>, FilterDecodeError> {
    Ok(serde_json::from_str(json)?)
}
