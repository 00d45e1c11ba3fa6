use nimbus_types::*;

#[test]
fn test_nested_roundtrip_through_json() {
    let text = r#"{"name": "vm-1", "flavor": {"ram": 2048, "disk": [20, 40]}, "public": false}"#;
    let value = from_json_str(text).unwrap();

    let back = serde_json::Value::from(&value);
    let original: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_large_unsigned_becomes_float() {
    let value = from_json_str("18446744073709551615").unwrap();
    assert!(matches!(value, Value::Scalar(Scalar::Float(_))));
}

#[test]
fn test_record_collects_from_pairs() {
    let record: Record = [("id", Value::from(1)), ("name", Value::from("a"))]
        .into_iter()
        .collect();
    assert_eq!(record.len(), 2);
    assert!(record.contains_key("name"));
    assert!(Value::from(record).as_sequence().is_none());
}
