//! Core types for typekind
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Runtime value model (sentinels, primitives, structures, callables)
//! - Kind: The closed set of kind labels
//! - classify: Ordered kind classifier and its predicates
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod error;
pub mod kind;
pub mod value;

pub use classify::{
    assert_kind, classify, is_array, is_boolean, is_date, is_function, is_initialized, is_null,
    is_number, is_object, is_regexp, is_string, is_undefined,
};
pub use error::{Error, Result};
pub use kind::{
    is_valid_kind, Kind, ARRAY, BOOLEAN, DATE, FUNCTION, NULL, NUMBER, OBJECT, REGEX, STRING,
    UNDEFINED,
};
pub use value::{Callable, Pattern, Value};
