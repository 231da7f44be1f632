//! Classification of every kind through the public facade.

use crate::common::*;
use std::collections::HashMap;
use typekind::{assert_kind, classify, is_initialized, is_object};

#[test]
fn each_sample_classifies_as_its_kind() {
    for (kind, value) in sample_per_kind() {
        assert_eq!(classify(&value), Ok(kind), "value {}", value);
    }
}

#[test]
fn classification_is_idempotent() {
    for (_, value) in sample_per_kind() {
        let first = classify(&value).unwrap();
        for _ in 0..3 {
            assert_eq!(classify(&value), Ok(first));
        }
    }
}

#[test]
fn object_like_values_classify_specifically() {
    let object_like: Vec<Value> = sample_per_kind()
        .into_iter()
        .map(|(_, v)| v)
        .filter(is_object)
        .collect();
    let kinds: Vec<Kind> = object_like.iter().map(|v| classify(v).unwrap()).collect();
    assert_eq!(kinds, [Kind::Object, Kind::Array, Kind::RegExp, Kind::Date]);
}

#[test]
fn nested_values_classify_by_outer_shape() {
    let nested = Value::Array(vec![Value::Object(HashMap::new()), Value::now()]);
    assert_eq!(classify(&nested), Ok(Kind::Array));

    let mut fields = HashMap::new();
    fields.insert("list".to_string(), Value::Array(vec![]));
    assert_eq!(classify(&Value::Object(fields)), Ok(Kind::Object));
}

#[test]
fn object_fields_classify() {
    let value = record_value();
    assert_eq!(classify(&value), Ok(Kind::Object));
    let inner = value.as_object().unwrap();
    assert_eq!(classify(&inner["tags"]), Ok(Kind::Array));
    assert_eq!(classify(&inner["missing"]), Ok(Kind::Null));
    assert_eq!(classify(&inner["score"]), Ok(Kind::Number));
}

fn record_value() -> Value {
    let mut map = HashMap::new();
    map.insert("tags".to_string(), Value::Array(vec![Value::from("a")]));
    map.insert("missing".to_string(), Value::Null);
    map.insert("score".to_string(), Value::Number(0.5));
    Value::Object(map)
}

#[test]
fn sentinels_are_uninitialized() {
    assert!(!is_initialized(&Value::Undefined));
    assert!(!is_initialized(&Value::Null));
    for (_, value) in assignable_samples() {
        assert!(is_initialized(&value));
    }
}

#[test]
fn assert_kind_distinguishes_sentinels() {
    assert_eq!(assert_kind(Kind::Null, &Value::Null), Ok(true));
    assert_eq!(assert_kind(Kind::Null, &Value::Undefined), Ok(false));
    assert_eq!(assert_kind(Kind::Undefined, &Value::Undefined), Ok(true));
}

#[test]
fn symbols_and_big_integers_are_unclassifiable() {
    for value in [Value::Symbol("iterator".into()), Value::BigInt(-5)] {
        let err = classify(&value).unwrap_err();
        assert!(matches!(err, Error::Unclassifiable { .. }));
        assert!(assert_kind(Kind::Object, &value).is_err());
    }
}
