use super::error::FilterParseError;
use super::kinds::{HostFilter, MethodFilter, PathFilter, StatusCodeFilter};
use super::method::HttpMethod;
use super::range::{RangeModifier, ValueRange};
use super::variant::Filter;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static STATUS_BUCKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([1-5])xx$").expect("valid bucket regex"));
static STATUS_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,4})(\.{2,3})(\d{1,4})$").expect("valid range regex"));

/// Fields a filter term can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    StatusCode,
    Host,
    Method,
    Path,
}

impl FromStr for FilterField {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" | "statuscode" | "code" | "s" => Ok(FilterField::StatusCode),
            "host" | "h" => Ok(FilterField::Host),
            "method" | "m" => Ok(FilterField::Method),
            "path" | "p" => Ok(FilterField::Path),
            _ => Err(FilterParseError::UnknownFilterField(s.to_string())),
        }
    }
}

impl FilterField {
    /// Get the canonical name of this filter field
    pub fn canonical_name(&self) -> &'static str {
        match self {
            FilterField::StatusCode => "status",
            FilterField::Host => "host",
            FilterField::Method => "method",
            FilterField::Path => "path",
        }
    }
}

/// A single parsed value, typed per field
#[derive(Debug, Clone, PartialEq)]
enum TermValue {
    Status(ValueRange<i32>),
    Host(String),
    Method(HttpMethod),
    Path(String),
}

/// A single filter term (e.g. "status:2XX" or "host:example.com")
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTerm {
    pub field: FilterField,
    value: TermValue,
}

impl FilterTerm {
    /// Parse a single `field:value` term
    pub fn parse(s: &str) -> Result<Self, FilterParseError> {
        let Some((field_str, raw_value)) = s.split_once(':') else {
            return Err(FilterParseError::InvalidExpression(format!(
                "Expected 'field:value' format, got: {}",
                s
            )));
        };

        let field: FilterField = field_str.parse()?;
        let value = unquote(raw_value.trim());

        if value.is_empty() {
            return Err(FilterParseError::EmptyValue(
                field.canonical_name().to_string(),
            ));
        }

        let value = match field {
            FilterField::StatusCode => TermValue::Status(parse_status_value(value)?),
            FilterField::Host => TermValue::Host(value.to_string()),
            FilterField::Method => TermValue::Method(value.parse()?),
            FilterField::Path => TermValue::Path(value.to_string()),
        };

        Ok(FilterTerm { field, value })
    }
}

/// A complete filter expression: whitespace-separated terms, combined as a
/// flat conjunction (same-field values combine with OR)
#[derive(Debug, Clone, Default)]
pub struct FilterExpression {
    pub terms: Vec<FilterTerm>,
}

impl FilterExpression {
    /// Parse a filter expression from a string
    pub fn parse(s: &str) -> Result<Self, FilterParseError> {
        let mut terms = Vec::new();
        for part in split_preserving_quotes(s) {
            terms.push(FilterTerm::parse(part)?);
        }
        Ok(FilterExpression { terms })
    }

    /// Check if this expression is empty (no terms)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Build the filter set: one variant per field, in first-appearance
    /// order, with same-field values merged in term order
    pub fn to_filters(&self) -> Vec<Filter> {
        let mut status = Vec::new();
        let mut hosts = Vec::new();
        let mut methods = Vec::new();
        let mut paths = Vec::new();
        let mut field_order = Vec::new();

        for term in &self.terms {
            if !field_order.contains(&term.field) {
                field_order.push(term.field);
            }
            match &term.value {
                TermValue::Status(range) => status.push(range.clone()),
                TermValue::Host(host) => hosts.push(host.clone()),
                TermValue::Method(method) => methods.push(*method),
                TermValue::Path(path) => paths.push(path.clone()),
            }
        }

        field_order
            .into_iter()
            .map(|field| match field {
                FilterField::StatusCode => Filter::StatusCode(StatusCodeFilter {
                    values: std::mem::take(&mut status),
                }),
                FilterField::Host => Filter::Host(HostFilter {
                    values: std::mem::take(&mut hosts),
                }),
                FilterField::Method => Filter::Method(MethodFilter {
                    values: std::mem::take(&mut methods),
                }),
                FilterField::Path => Filter::Path(PathFilter {
                    values: std::mem::take(&mut paths),
                }),
            })
            .collect()
    }
}

/// Parse a status value: a bare code, a bucket (2XX), or a range
///
/// `200..300` is open (upper bound exclusive), `200...299` is closed.
/// Buckets expand to the open range `n00..(n+1)00`.
fn parse_status_value(s: &str) -> Result<ValueRange<i32>, FilterParseError> {
    if let Some(captures) = STATUS_BUCKET_RE.captures(s) {
        let class: i32 = captures[1].parse().expect("single digit");
        return Ok(ValueRange::new(
            RangeModifier::Open,
            class * 100,
            (class + 1) * 100,
        ));
    }

    if let Some(captures) = STATUS_RANGE_RE.captures(s) {
        let lower: i32 = captures[1]
            .parse()
            .map_err(|_| FilterParseError::InvalidStatusValue(s.to_string()))?;
        let upper: i32 = captures[3]
            .parse()
            .map_err(|_| FilterParseError::InvalidStatusValue(s.to_string()))?;
        let modifier = if captures[2].len() == 2 {
            RangeModifier::Open
        } else {
            RangeModifier::Closed
        };
        return Ok(ValueRange::new(modifier, lower, upper));
    }

    s.parse::<i32>()
        .map(ValueRange::single)
        .map_err(|_| FilterParseError::InvalidStatusValue(s.to_string()))
}

/// Strip one pair of surrounding double quotes, if present
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Split a string by whitespace while preserving quoted segments
fn split_preserving_quotes(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ' ' | '\t' if !in_quotes => {
                if i > start {
                    let part = &s[start..i];
                    if !part.trim().is_empty() {
                        parts.push(part.trim());
                    }
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < s.len() {
        let part = &s[start..];
        if !part.trim().is_empty() {
            parts.push(part.trim());
        }
    }

    parts
}
