use rbxstats::api::{parse_flat, FlatMap};

#[test]
fn test_parse_flat_simple_object() {
    let map = parse_flat(r#"{"a":"1","b":"2"}"#);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some("1"));
    assert_eq!(map.get("b"), Some("2"));
}

#[test]
fn test_parse_flat_empty_body() {
    assert!(parse_flat("").is_empty());
}

#[test]
fn test_parse_flat_no_quotes() {
    assert!(parse_flat("<html>502 Bad Gateway</html>").is_empty());
}

#[test]
fn test_parse_flat_nested_object_legacy_behavior() {
    // Nesting is not understood: "a" pairs with "b", and "1" is left as a key with no value.
    let map = parse_flat(r#"{"a":{"b":"1"}}"#);

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), Some("b"));
    assert!(!map.contains_key("b"));
    assert!(!map.contains_key("1"));
}

#[test]
fn test_parse_flat_repeated_key_last_wins() {
    let map = parse_flat(r#"{"k":"first","other":"x","k":"second"}"#);

    assert_eq!(map.get("k"), Some("second"));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["k", "other"]);
}

#[test]
fn test_parse_flat_preserves_first_occurrence_order() {
    let map = parse_flat(r#"{"zeta":"1","alpha":"2","mid":"3"}"#);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_parse_flat_ignores_unquoted_values() {
    // Numbers, booleans and null sit outside quotes, so the next quoted token becomes the value.
    let map = parse_flat(r#"{"count":3,"enabled":true,"name":"Synapse"}"#);

    assert_eq!(map.get("count"), Some("enabled"));
    assert_eq!(map.get("name"), Some("Synapse"));
    assert!(!map.contains_key("enabled"));
}

#[test]
fn test_parse_flat_escaped_quote_ends_token() {
    let map = parse_flat(r#"{"msg":"say \"hi\""}"#);

    // The value stops at the backslash-escaped quote.
    assert_eq!(map.get("msg"), Some(r"say \"));
}

#[test]
fn test_parse_flat_empty_value() {
    let map = parse_flat(r#"{"a":"","b":"2"}"#);

    assert_eq!(map.get("a"), Some(""));
    assert_eq!(map.get("b"), Some("2"));
}

#[test]
fn test_parse_flat_unicode() {
    let map = parse_flat(r#"{"név":"értékű"}"#);
    assert_eq!(map.get("név"), Some("értékű"));
}

#[test]
fn test_flat_map_into_iter() {
    let map = parse_flat(r#"{"x":"1","y":"2"}"#);
    let pairs: Vec<(String, String)> = map.into_iter().collect();

    assert_eq!(
        pairs,
        vec![
            ("x".to_string(), "1".to_string()),
            ("y".to_string(), "2".to_string())
        ]
    );
}

#[test]
fn test_flat_map_from_iter_dedupes() {
    let map: FlatMap = vec![
        ("a".to_string(), "1".to_string()),
        ("a".to_string(), "2".to_string()),
    ]
    .into_iter()
    .collect();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), Some("2"));
}
