//! Kind labels
//!
//! Every runtime value classifies into exactly one [`Kind`]. Eight kinds can
//! be declared on an attribute; `undefined` and `null` are reserved for
//! classifier output and are never declarable.
//!
//! | Kind | Label | Declarable |
//! |------|-------|------------|
//! | Object | `object` | yes |
//! | String | `string` | yes |
//! | Array | `array` | yes |
//! | RegExp | `regexp` | yes |
//! | Number | `number` | yes |
//! | Boolean | `boolean` | yes |
//! | Function | `function` | yes |
//! | Date | `date` | yes |
//! | Undefined | `undefined` | no |
//! | Null | `null` | no |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the `object` kind
pub const OBJECT: &str = "object";
/// Label of the `string` kind
pub const STRING: &str = "string";
/// Label of the `array` kind
pub const ARRAY: &str = "array";
/// Label of the `regexp` kind
pub const REGEX: &str = "regexp";
/// Label of the `number` kind
pub const NUMBER: &str = "number";
/// Label of the `boolean` kind
pub const BOOLEAN: &str = "boolean";
/// Label of the `function` kind
pub const FUNCTION: &str = "function";
/// Label of the `date` kind
pub const DATE: &str = "date";
/// Label of the reserved `undefined` kind
pub const UNDEFINED: &str = "undefined";
/// Label of the reserved `null` kind
pub const NULL: &str = "null";

/// The closed set of value kinds
///
/// ## Invariant
///
/// This enum has exactly 10 variants. Adding a kind means adding a
/// predicate to the classifier and a slot in its ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Plain structural object
    Object,
    /// UTF-8 string
    String,
    /// Linear indexed sequence
    Array,
    /// Regular expression
    RegExp,
    /// IEEE-754 number
    Number,
    /// Boolean
    Boolean,
    /// Callable
    Function,
    /// Date
    Date,
    /// Uninitialized sentinel (reserved)
    Undefined,
    /// Null sentinel (reserved)
    Null,
}

impl Kind {
    /// All kinds, declarable ones first
    pub const ALL: [Kind; 10] = [
        Kind::Object,
        Kind::String,
        Kind::Array,
        Kind::RegExp,
        Kind::Number,
        Kind::Boolean,
        Kind::Function,
        Kind::Date,
        Kind::Undefined,
        Kind::Null,
    ];

    /// The eight kinds an attribute may be declared with
    pub const ASSIGNABLE: [Kind; 8] = [
        Kind::Object,
        Kind::String,
        Kind::Array,
        Kind::RegExp,
        Kind::Number,
        Kind::Boolean,
        Kind::Function,
        Kind::Date,
    ];

    /// Lowercase label
    pub const fn label(&self) -> &'static str {
        match self {
            Kind::Object => OBJECT,
            Kind::String => STRING,
            Kind::Array => ARRAY,
            Kind::RegExp => REGEX,
            Kind::Number => NUMBER,
            Kind::Boolean => BOOLEAN,
            Kind::Function => FUNCTION,
            Kind::Date => DATE,
            Kind::Undefined => UNDEFINED,
            Kind::Null => NULL,
        }
    }

    /// Parse from label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            OBJECT => Some(Kind::Object),
            STRING => Some(Kind::String),
            ARRAY => Some(Kind::Array),
            REGEX => Some(Kind::RegExp),
            NUMBER => Some(Kind::Number),
            BOOLEAN => Some(Kind::Boolean),
            FUNCTION => Some(Kind::Function),
            DATE => Some(Kind::Date),
            UNDEFINED => Some(Kind::Undefined),
            NULL => Some(Kind::Null),
            _ => None,
        }
    }

    /// Whether an attribute may be declared with this kind
    pub const fn is_assignable(&self) -> bool {
        !self.is_reserved()
    }

    /// Whether this is one of the sentinel kinds
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Kind::Undefined | Kind::Null)
    }

    /// Return `self` if declarable, `ReservedKind` otherwise
    pub fn ensure_assignable(self) -> Result<Kind> {
        if self.is_reserved() {
            return Err(Error::ReservedKind { kind: self });
        }
        Ok(self)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check whether `label` names a declarable kind
///
/// Returns `Ok(true)` for the eight declarable labels and `Ok(false)` for
/// labels this library does not know.
///
/// # Errors
///
/// Returns `ReservedKind` for `"undefined"` and `"null"`: those labels are
/// classifier outputs and declaring an attribute with them is a mistake,
/// not an unknown label.
pub fn is_valid_kind(label: &str) -> Result<bool> {
    match Kind::from_label(label) {
        Some(kind) => kind.ensure_assignable().map(|_| true),
        None => Ok(false),
    }
}
