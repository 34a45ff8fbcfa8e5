use request_filter::filter::{
    Filter, HostFilter, HttpMethod, MethodFilter, PathFilter, RangeModifier, StatusCodeFilter,
    ValueRange, decode_filters, encode_filters,
};

fn sample_filters() -> Vec<Filter> {
    vec![
        Filter::StatusCode(StatusCodeFilter {
            values: vec![
                ValueRange::new(RangeModifier::Open, 200, 300),
                ValueRange::new(RangeModifier::Closed, 401, 403),
                ValueRange::single(418),
            ],
        }),
        Filter::Host(HostFilter {
            values: vec!["example.com".to_string(), "other.test".to_string()],
        }),
        Filter::Method(MethodFilter {
            values: vec![HttpMethod::Get, HttpMethod::WebSocket],
        }),
        Filter::Path(PathFilter {
            values: vec!["/v1/login".to_string()],
        }),
    ]
}

#[test]
fn test_each_kind_round_trips_to_an_equal_variant() {
    for filter in sample_filters() {
        let encoded = filter.encode().unwrap();
        let decoded = Filter::decode(&encoded).unwrap();
        assert_eq!(decoded, filter, "round-trip changed: {encoded}");
    }
}

#[test]
fn test_filter_set_round_trips_in_order() {
    let filters = sample_filters();
    let encoded = encode_filters(&filters).unwrap();
    let decoded = decode_filters(&encoded).unwrap();
    assert_eq!(decoded, filters);
}

#[test]
fn test_stable_encoded_shape() {
    let filter = Filter::StatusCode(StatusCodeFilter {
        values: vec![ValueRange::new(RangeModifier::Open, 200, 300)],
    });
    assert_eq!(
        filter.encode().unwrap(),
        r#"{"kind":"statusCode","values":[{"modifier":"open","lowerBound":200,"upperBound":300}]}"#
    );

    let filter = Filter::Host(HostFilter {
        values: vec!["example.com".to_string()],
    });
    assert_eq!(
        filter.encode().unwrap(),
        r#"{"kind":"host","values":["example.com"]}"#
    );
}

#[test]
fn test_decode_preserves_value_order_and_duplicates() {
    let json = r#"{"kind":"host","values":["b.test","a.test","b.test"]}"#;
    let decoded = Filter::decode(json).unwrap();
    assert_eq!(
        decoded,
        Filter::Host(HostFilter {
            values: vec!["b.test".to_string(), "a.test".to_string(), "b.test".to_string()],
        })
    );
}

#[test]
fn test_decode_failure_is_an_explicit_error() {
    assert!(Filter::decode("").is_err());
    assert!(Filter::decode(r#"{"kind":"contentType","values":[]}"#).is_err());
    assert!(Filter::decode(r#"{"kind":"method","values":["FETCH"]}"#).is_err());
    assert!(decode_filters(r#"{"kind":"host","values":[]}"#).is_err()); // not an array
}

#[test]
fn test_same_kind_comparison_ignores_values() {
    let a = Filter::StatusCode(StatusCodeFilter {
        values: vec![ValueRange::single(200)],
    });
    let b = Filter::StatusCode(StatusCodeFilter {
        values: vec![ValueRange::new(RangeModifier::Closed, 500, 599)],
    });
    let c = Filter::Host(HostFilter {
        values: vec!["example.com".to_string()],
    });
    assert!(a.is_same_kind(&b));
    assert!(b.is_same_kind(&a));
    assert!(!a.is_same_kind(&c));
}
