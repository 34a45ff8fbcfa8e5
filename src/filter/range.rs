use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Whether the upper bound of a range is exclusive or inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeModifier {
    /// Upper bound is exclusive
    Open,
    /// Upper bound is inclusive
    Closed,
}

/// An interval over an ordered scalar with open/closed upper-bound semantics
///
/// Only the integer instantiation carries interval resolution and the status
/// bucket rendering; see [`ValueRange::resolved`] and [`ValueRange::describe`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange<T> {
    pub modifier: RangeModifier,
    pub lower_bound: T,
    pub upper_bound: T,
}

impl<T> ValueRange<T> {
    pub fn new(modifier: RangeModifier, lower_bound: T, upper_bound: T) -> Self {
        Self {
            modifier,
            lower_bound,
            upper_bound,
        }
    }
}

impl<T: Clone> ValueRange<T> {
    /// A degenerate single-value range: closed, both bounds equal
    pub fn single(value: T) -> Self {
        Self {
            modifier: RangeModifier::Closed,
            lower_bound: value.clone(),
            upper_bound: value,
        }
    }
}

impl<T: fmt::Display + PartialOrd> fmt::Display for ValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upper_bound <= self.lower_bound {
            return write!(f, "{}", self.lower_bound);
        }
        match self.modifier {
            RangeModifier::Open => write!(f, "{}..{}", self.lower_bound, self.upper_bound),
            RangeModifier::Closed => write!(f, "{}...{}", self.lower_bound, self.upper_bound),
        }
    }
}

impl ValueRange<i32> {
    /// Resolve the range into inclusive bounds for matching
    ///
    /// A malformed range (`upper < lower`) degrades to the single point
    /// `[lower, lower]` rather than an error. An open range with equal
    /// bounds resolves to an empty interval.
    pub fn resolved(&self) -> RangeInclusive<i32> {
        if self.upper_bound < self.lower_bound {
            return self.lower_bound..=self.lower_bound;
        }
        match self.modifier {
            RangeModifier::Open => self.lower_bound..=self.upper_bound.saturating_sub(1),
            RangeModifier::Closed => self.lower_bound..=self.upper_bound,
        }
    }

    /// Display label for the range, collapsing well-known status classes
    ///
    /// Any range whose adjusted bounds land exactly on a `(n00, (n+1)00)`
    /// pair renders as the `nXX` bucket label. This shortcut affects the
    /// label only, never match semantics.
    pub fn describe(&self) -> String {
        if self.upper_bound <= self.lower_bound {
            return self.lower_bound.to_string();
        }
        let adjusted_upper = match self.modifier {
            RangeModifier::Open => self.upper_bound,
            RangeModifier::Closed => self.upper_bound.saturating_add(1),
        };
        match status_bucket_label(self.lower_bound, adjusted_upper) {
            Some(label) => label.to_string(),
            None => self.to_string(),
        }
    }
}

fn status_bucket_label(lower: i32, upper: i32) -> Option<&'static str> {
    match (lower, upper) {
        (100, 200) => Some("1XX"),
        (200, 300) => Some("2XX"),
        (300, 400) => Some("3XX"),
        (400, 500) => Some("4XX"),
        (500, 600) => Some("5XX"),
        _ => None,
    }
}
