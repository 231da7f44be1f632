//! Runtime value model
//!
//! This module defines:
//! - Value: the closed set of runtime shapes the classifier understands
//! - Callable: a named, shareable function value
//! - Pattern: a compiled regular expression that remembers its source
//!
//! ## Sentinels
//!
//! `Undefined` marks "not yet assigned" and `Null` marks "intentionally
//! empty". Both bypass the kind check on attribute writes.
//!
//! ## Equality
//!
//! - Different variants are NEVER equal
//! - Numbers use IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - Callables compare by identity, patterns by source text

use crate::classify;
use crate::error::Result;
use crate::kind::Kind;
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Func = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named function value
///
/// Cloning shares the underlying closure. Two callables are equal only if
/// they share the same closure.
#[derive(Clone)]
pub struct Callable {
    name: String,
    func: Arc<Func>,
}

impl Callable {
    /// Wrap a closure as a function value
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Callable {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Function name (may be empty for anonymous functions)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").field("name", &self.name).finish()
    }
}

/// A compiled regular expression
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns the regex compile error if `source` is not a valid pattern.
    pub fn new(source: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    /// Pattern source text
    pub fn source(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the pattern matches anywhere in `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    /// Borrow the compiled regex
    pub fn as_regex(&self) -> &Regex {
        &self.0
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

/// Runtime value
///
/// This enum represents every value shape that can be handed to the
/// classifier or assigned to a validated attribute. `Symbol` and `BigInt`
/// are representable but belong to no kind; classifying them fails.
#[derive(Debug, Clone)]
pub enum Value {
    /// Uninitialized sentinel
    Undefined,
    /// Null sentinel
    Null,
    /// Boolean value
    Bool(bool),
    /// IEEE-754 number (NaN and the infinities included)
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object with string keys
    Object(HashMap<String, Value>),
    /// Callable value
    Function(Callable),
    /// Point in time
    Date(DateTime<Utc>),
    /// Regular expression
    RegExp(Pattern),
    /// Unique symbol with an optional description
    Symbol(String),
    /// Arbitrary-size integer
    BigInt(i128),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
            }
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Create a function value
    pub fn function<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Callable::new(name, func))
    }

    /// Create a regular expression value
    ///
    /// # Errors
    ///
    /// Returns the regex compile error if `source` is not a valid pattern.
    pub fn regexp(source: &str) -> std::result::Result<Self, regex::Error> {
        Pattern::new(source).map(Value::RegExp)
    }

    /// Create a date value for the current instant
    pub fn now() -> Self {
        Value::Date(Utc::now())
    }

    /// Classify this value
    ///
    /// # Errors
    ///
    /// Returns `Unclassifiable` for values that belong to no kind.
    pub fn kind(&self) -> Result<Kind> {
        classify::classify(self)
    }

    /// Neither `Undefined` nor `Null`
    pub fn is_initialized(&self) -> bool {
        classify::is_initialized(self)
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as f64 if this is a Number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[Value] if this is an Array value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as &HashMap if this is an Object value
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get as &Callable if this is a Function value
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(c) => Some(c),
            _ => None,
        }
    }

    /// Get the timestamp if this is a Date value
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as &Pattern if this is a RegExp value
    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Value::RegExp(p) => Some(p),
            _ => None,
        }
    }
}

// ============================================================================
// String rendering
// ============================================================================

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form with an explicit sign: 1e+21, 1e-7
        let rendered = format!("{:e}", n);
        match rendered.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{}e+{}", mantissa, exp),
            _ => f.write_str(&rendered),
        }
    } else {
        write!(f, "{}", n)
    }
}

/// Renders values the way string interpolation does: arrays join their
/// elements with `,` and render sentinels as empty, objects are opaque.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if item.is_initialized() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Function(c) => write!(f, "function {}() {{}}", c.name()),
            Value::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::RegExp(p) => write!(f, "/{}/", p.source()),
            Value::Symbol(desc) => write!(f, "Symbol({})", desc),
            Value::BigInt(i) => write!(f, "{}n", i),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(i as f64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(i as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(a)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(o: HashMap<String, Value>) -> Self {
        Value::Object(o)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Regex> for Value {
    fn from(r: Regex) -> Self {
        Value::RegExp(Pattern(r))
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::RegExp(p)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Function(c)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Self {
        o.map_or(Value::Undefined, Into::into)
    }
}

// ============================================================================
// serde_json interop for ergonomic JSON construction
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
