use request_filter::filter::{Filter, FilterExpression, filter_records};
use request_filter::mocks::demo_records;

fn filters(expression: &str) -> Vec<Filter> {
    FilterExpression::parse(expression)
        .expect("expression should parse")
        .to_filters()
}

#[test]
fn test_bucket_expression_selects_success_responses() {
    let records = demo_records();
    let matched = filter_records(&records, &filters("status:2XX"));
    assert!(!matched.is_empty());
    assert!(matched.iter().all(|r| (200..300).contains(&r.status_code)));
}

#[test]
fn test_conjunction_across_fields() {
    let records = demo_records();
    let matched = filter_records(&records, &filters("host:api.example.com path:/login"));
    assert!(!matched.is_empty());
    for record in &matched {
        let url = record.url.as_deref().unwrap();
        assert!(url.starts_with("https://api.example.com"));
        assert!(url.contains("/login"));
    }
}

#[test]
fn test_same_field_values_combine_with_or() {
    let records = demo_records();
    let matched = filter_records(&records, &filters("method:PUT method:DELETE"));
    assert!(!matched.is_empty());
    assert!(
        matched
            .iter()
            .all(|r| matches!(r.method.as_deref(), Some("PUT") | Some("DELETE")))
    );
}

#[test]
fn test_websocket_records_are_reachable_by_method() {
    let records = demo_records();
    let matched = filter_records(&records, &filters("method:WEBSOCKET"));
    assert_eq!(matched.len(), 1);
    assert!(matched[0].url.as_deref().unwrap().starts_with("wss://"));
}

#[test]
fn test_open_and_closed_ranges_differ_at_the_upper_bound() {
    let records = demo_records();
    let open = filter_records(&records, &filters("status:200..304"));
    let closed = filter_records(&records, &filters("status:200...304"));
    assert!(closed.len() > open.len());
    assert!(closed.iter().any(|r| r.status_code == 304));
    assert!(open.iter().all(|r| r.status_code != 304));
}

#[test]
fn test_expression_tokens_summarize_values() {
    let set = filters("status:2XX status:404 method:GET");
    assert_eq!(set[0].token(), "2XX…");
    assert_eq!(set[1].token(), "GET");
}

#[test]
fn test_empty_expression_yields_no_filters() {
    let expr = FilterExpression::parse("").unwrap();
    assert!(expr.is_empty());
    assert!(expr.to_filters().is_empty());
}

#[test]
fn test_records_without_urls_survive_scans() {
    // Malformed or missing URLs must degrade to non-matches, not errors
    let records = demo_records();
    let matched = filter_records(&records, &filters("host:api.example.com"));
    assert!(matched.iter().all(|r| r.url.is_some()));
}
