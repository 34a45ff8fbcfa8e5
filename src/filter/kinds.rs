use super::method::HttpMethod;
use super::range::ValueRange;
use super::token::make_token;
use crate::record::RequestRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Uniform capability shared by all concrete filter kinds
///
/// A kind holds its chosen values (insertion order kept, duplicates allowed)
/// and decides whether a record matches them. `is_match` is a pure function
/// of its inputs: it never fails, and malformed record fields simply do not
/// match.
pub trait FilterKind {
    type Value: fmt::Display;

    /// Constant display label for this kind
    fn name(&self) -> &'static str;

    /// The chosen values, in insertion order
    fn values(&self) -> &[Self::Value];

    /// Sample inputs for placeholder/help text
    fn value_examples(&self) -> &'static [&'static str];

    fn is_match(&self, record: &dyn RequestRecord) -> bool;

    /// The values rendered for display, one string per value
    fn rendered_values(&self) -> Vec<String> {
        self.values().iter().map(|v| v.to_string()).collect()
    }

    /// Compact label summarizing the value set
    fn token(&self) -> String {
        make_token(&self.rendered_values())
    }
}

/// Matches records whose status code falls in any of the given ranges
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusCodeFilter {
    pub values: Vec<ValueRange<i32>>,
}

impl FilterKind for StatusCodeFilter {
    type Value = ValueRange<i32>;

    fn name(&self) -> &'static str {
        "Status Code"
    }

    fn values(&self) -> &[Self::Value] {
        &self.values
    }

    fn value_examples(&self) -> &'static [&'static str] {
        &["200"]
    }

    fn is_match(&self, record: &dyn RequestRecord) -> bool {
        let status = record.status_code();
        self.values.iter().any(|range| range.resolved().contains(&status))
    }

    fn rendered_values(&self) -> Vec<String> {
        self.values.iter().map(|range| range.describe()).collect()
    }
}

/// Matches records whose URL host equals any of the given hosts exactly
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostFilter {
    pub values: Vec<String>,
}

impl FilterKind for HostFilter {
    type Value = String;

    fn name(&self) -> &'static str {
        "Host"
    }

    fn values(&self) -> &[Self::Value] {
        &self.values
    }

    fn value_examples(&self) -> &'static [&'static str] {
        &["example.com"]
    }

    fn is_match(&self, record: &dyn RequestRecord) -> bool {
        let Some(host) = record.url().and_then(parse_host) else {
            return false;
        };
        self.values.iter().any(|value| host == *value)
    }
}

/// Matches records whose parsed method is a member of the value set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodFilter {
    pub values: Vec<HttpMethod>,
}

impl FilterKind for MethodFilter {
    type Value = HttpMethod;

    fn name(&self) -> &'static str {
        "Method"
    }

    fn values(&self) -> &[Self::Value] {
        &self.values
    }

    fn value_examples(&self) -> &'static [&'static str] {
        &["GET"]
    }

    fn is_match(&self, record: &dyn RequestRecord) -> bool {
        let Some(method) = record.http_method().and_then(|raw| raw.parse::<HttpMethod>().ok())
        else {
            return false;
        };
        self.values.contains(&method)
    }
}

/// Matches records whose URL path contains any of the given substrings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathFilter {
    pub values: Vec<String>,
}

impl FilterKind for PathFilter {
    type Value = String;

    fn name(&self) -> &'static str {
        "Path"
    }

    fn values(&self) -> &[Self::Value] {
        &self.values
    }

    fn value_examples(&self) -> &'static [&'static str] {
        &["/example"]
    }

    fn is_match(&self, record: &dyn RequestRecord) -> bool {
        let Some(path) = record.url().and_then(parse_path) else {
            return false;
        };
        self.values.iter().any(|value| path.contains(value.as_str()))
    }
}

fn parse_host(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(str::to_string)
}

fn parse_path(url: &str) -> Option<String> {
    Some(Url::parse(url).ok()?.path().to_string())
}
