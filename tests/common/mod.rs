//! Shared test utilities for all integration test suites.
//!
//! Import via `#[macro_use] #[path = "../common/mod.rs"] mod common;` from any
//! test's main.rs, before the suite's own modules.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::collections::HashMap;
use std::sync::Once;

use chrono::{TimeZone, Utc};
pub use typekind::{Entity, Error, Kind, Schema, SchemaConfig, Value};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness writer.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// The `{username: string, password: string}` entity.
pub fn user_entity() -> Entity {
    init_tracing();
    Entity::from_declarations([("username", "string"), ("password", "string")])
        .expect("user schema is valid")
}

/// Construct a user the way a derived constructor would: declare, then assign.
pub fn new_user(name: &str, password: &str) -> Entity {
    let mut user = user_entity();
    user.set("username", name).expect("username is a string");
    user.set("password", password).expect("password is a string");
    user
}

/// One value of every kind, paired with that kind.
pub fn sample_per_kind() -> Vec<(Kind, Value)> {
    vec![
        (Kind::Object, Value::Object(HashMap::new())),
        (Kind::String, Value::from("text")),
        (Kind::Array, Value::Array(vec![Value::Number(1.0)])),
        (Kind::RegExp, Value::regexp("^a+$").expect("valid pattern")),
        (Kind::Number, Value::Number(3.5)),
        (Kind::Boolean, Value::Bool(true)),
        (
            Kind::Function,
            Value::function("noop", |_| Value::Undefined),
        ),
        (
            Kind::Date,
            Value::Date(Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()),
        ),
        (Kind::Undefined, Value::Undefined),
        (Kind::Null, Value::Null),
    ]
}

/// Samples for the eight declarable kinds only.
pub fn assignable_samples() -> Vec<(Kind, Value)> {
    sample_per_kind()
        .into_iter()
        .filter(|(kind, _)| kind.is_assignable())
        .collect()
}

/// Assert that a result is a type mismatch for `attribute` with the given kinds.
#[allow(unused_macros)]
macro_rules! assert_mismatch {
    ($result:expr, $attribute:expr, $actual:expr, $expected:expr) => {
        match $result {
            Err(Error::TypeMismatch {
                attribute,
                actual,
                expected,
                ..
            }) => {
                assert_eq!(attribute, $attribute);
                assert_eq!(actual, $actual);
                assert_eq!(expected, $expected);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    };
}
