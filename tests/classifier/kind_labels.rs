//! Kind labels and their validity.

use crate::common::*;
use typekind::{
    is_valid_kind, ARRAY, BOOLEAN, DATE, FUNCTION, NULL, NUMBER, OBJECT, REGEX, STRING, UNDEFINED,
};

#[test]
fn label_constants_match_kinds() {
    let labels = [
        OBJECT, STRING, ARRAY, REGEX, NUMBER, BOOLEAN, FUNCTION, DATE, UNDEFINED, NULL,
    ];
    let kinds: Vec<Kind> = labels
        .iter()
        .map(|label| Kind::from_label(label).unwrap())
        .collect();
    assert_eq!(kinds, Kind::ALL);
}

#[test]
fn assignable_labels_are_valid() {
    for kind in Kind::ASSIGNABLE {
        assert_eq!(is_valid_kind(kind.label()), Ok(true));
    }
}

#[test]
fn reserved_labels_raise() {
    for label in [UNDEFINED, NULL] {
        assert!(matches!(
            is_valid_kind(label),
            Err(Error::ReservedKind { kind }) if kind.label() == label
        ));
    }
}

#[test]
fn unknown_labels_are_invalid() {
    for label in ["symbol", "bigint", "int", "Object", " string", ""] {
        assert_eq!(is_valid_kind(label), Ok(false), "label {:?}", label);
    }
}

#[test]
fn kind_set_is_closed() {
    assert_eq!(Kind::ALL.len(), 10);
    assert_eq!(Kind::ASSIGNABLE.len(), 8);
    assert_eq!(Kind::ALL.iter().filter(|k| k.is_reserved()).count(), 2);
}
