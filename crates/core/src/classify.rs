//! Kind classifier
//!
//! [`classify`] maps a value to exactly one [`Kind`] by walking an ordered
//! list of predicates; the first predicate that matches wins.
//!
//! ## Classification Order
//!
//! | # | Predicate | Kind |
//! |---|-----------|------|
//! | 1 | `is_boolean` | boolean |
//! | 2 | `is_undefined` | undefined |
//! | 3 | `is_string` | string |
//! | 4 | `is_number` | number |
//! | 5 | `is_array` | array |
//! | 6 | `is_null` | null |
//! | 7 | `is_function` | function |
//! | 8 | `is_date` | date |
//! | 9 | `is_regexp` | regexp |
//! | 10 | `is_object` | object |
//!
//! `is_object` also holds for arrays, dates and patterns, so it must stay
//! last. Values no predicate accepts (symbols, big integers) are an error,
//! never a fallback kind.

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::value::Value;

type Predicate = fn(&Value) -> bool;

/// Predicates in classification order
const CLASSIFICATION_ORDER: [(Predicate, Kind); 10] = [
    (is_boolean, Kind::Boolean),
    (is_undefined, Kind::Undefined),
    (is_string, Kind::String),
    (is_number, Kind::Number),
    (is_array, Kind::Array),
    (is_null, Kind::Null),
    (is_function, Kind::Function),
    (is_date, Kind::Date),
    (is_regexp, Kind::RegExp),
    (is_object, Kind::Object),
];

/// Classify a value
///
/// # Errors
///
/// Returns `Unclassifiable` if no predicate accepts the value.
pub fn classify(value: &Value) -> Result<Kind> {
    CLASSIFICATION_ORDER
        .iter()
        .find(|(predicate, _)| predicate(value))
        .map(|(_, kind)| *kind)
        .ok_or_else(|| Error::Unclassifiable {
            value: value.to_string(),
        })
}

/// Check that `value` classifies as `kind`
///
/// Works for every kind, the reserved sentinels included.
///
/// # Errors
///
/// Returns `Unclassifiable` if the value belongs to no kind.
pub fn assert_kind(kind: Kind, value: &Value) -> Result<bool> {
    Ok(classify(value)? == kind)
}

/// Neither the uninitialized nor the null sentinel
pub fn is_initialized(value: &Value) -> bool {
    !is_undefined(value) && !is_null(value)
}

/// Check if value is a boolean
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Check if value is the uninitialized sentinel
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Check if value is a string
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Check if value is a number (NaN and infinities included)
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Check if value is an array
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Check if value is the null sentinel
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Check if value is callable
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Check if value is a date
///
/// Only a real date value qualifies; an object carrying date-like fields
/// does not.
pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// Check if value is a regular expression
pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp(_))
}

/// Check if value is object-like
///
/// True for plain objects and for arrays, dates and patterns; false for
/// null, functions and primitives.
pub fn is_object(value: &Value) -> bool {
    matches!(
        value,
        Value::Object(_) | Value::Array(_) | Value::Date(_) | Value::RegExp(_)
    )
}
