use super::variant::Filter;
use crate::record::RequestRecord;

/// Whether the record satisfies every filter in the set
///
/// Logical AND across variants; an empty set matches everything. Each
/// `matches` call is pure, so callers may evaluate in any order, in
/// parallel, or short-circuit (as `all` does here).
pub fn matches_all(record: &dyn RequestRecord, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(record))
}

/// Borrow-only scan of a record collection against a filter set
pub fn filter_records<'a, R: RequestRecord>(records: &'a [R], filters: &[Filter]) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches_all(*record, filters))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::kinds::{HostFilter, StatusCodeFilter};
    use crate::filter::range::{RangeModifier, ValueRange};
    use crate::record::TaskRecord;

    fn record(url: &str, status_code: i32) -> TaskRecord {
        TaskRecord {
            url: Some(url.to_string()),
            method: Some("GET".to_string()),
            status_code,
            created_at: None,
        }
    }

    fn filters() -> Vec<Filter> {
        vec![
            Filter::StatusCode(StatusCodeFilter {
                values: vec![ValueRange::new(RangeModifier::Open, 200, 300)],
            }),
            Filter::Host(HostFilter {
                values: vec!["example.com".to_string()],
            }),
        ]
    }

    #[test]
    fn test_conjunction_requires_every_filter() {
        assert!(matches_all(&record("https://example.com/a", 204), &filters()));
        assert!(!matches_all(&record("https://example.com/a", 404), &filters()));
        assert!(!matches_all(&record("https://other.com/a", 204), &filters()));
    }

    #[test]
    fn test_empty_filter_set_matches_everything() {
        assert!(matches_all(&record("https://example.com/a", 500), &[]));
    }

    #[test]
    fn test_filter_records_borrows_matches() {
        let records = vec![
            record("https://example.com/a", 200),
            record("https://example.com/b", 404),
            record("https://other.com/c", 200),
        ];
        let matched = filter_records(&records, &filters());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].url.as_deref(), Some("https://example.com/a"));
    }
}
