//! Installed attribute accessors
//!
//! An [`Accessor`] is the get/set pair for one declared attribute. It owns
//! nothing but the attribute's name and kind; the values live in the
//! entity's storage record, which is handed in on every call.

use std::collections::HashMap;

use typekind_core::{classify, is_initialized, is_valid_kind, Error, Kind, Result, Value};

/// Private storage record backing an entity's attributes
pub(crate) type Storage = HashMap<String, Value>;

static UNSET: Value = Value::Undefined;

/// Get/set pair for one declared attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    name: String,
    kind: Kind,
}

impl Accessor {
    /// Install an accessor for `name` holding values of `kind`
    ///
    /// # Errors
    ///
    /// Returns `InvalidKindDeclaration` if `kind` is one of the reserved
    /// sentinel kinds.
    pub fn install(name: impl Into<String>, kind: Kind) -> Result<Self> {
        let name = name.into();
        if let Err(err) = kind.ensure_assignable() {
            return Err(declaration_error(name, kind.label(), err.to_string()));
        }
        Ok(Accessor { name, kind })
    }

    /// Install an accessor from a kind label
    ///
    /// # Errors
    ///
    /// Returns `InvalidKindDeclaration` if the label is reserved or unknown.
    pub fn install_label(name: impl Into<String>, label: &str) -> Result<Self> {
        let name = name.into();
        let valid = match is_valid_kind(label) {
            Ok(valid) => valid,
            Err(err) => return Err(declaration_error(name, label, err.to_string())),
        };
        match Kind::from_label(label).filter(|_| valid) {
            Some(kind) => Ok(Accessor { name, kind }),
            None => Err(declaration_error(name, label, "unknown kind")),
        }
    }

    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Validate `value` and write it into `storage`
    ///
    /// Sentinels skip the kind check. A missing record is recreated empty
    /// before the write.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if an initialized value classifies as another
    /// kind, or `Unclassifiable` if it has no kind. Storage is untouched on
    /// error.
    pub(crate) fn set(&self, storage: &mut Option<Storage>, value: Value) -> Result<()> {
        if is_initialized(&value) {
            let actual = classify(&value)?;
            if actual != self.kind {
                return Err(Error::TypeMismatch {
                    attribute: self.name.clone(),
                    actual,
                    value: value.to_string(),
                    expected: self.kind,
                });
            }
        }
        storage
            .get_or_insert_with(HashMap::new)
            .insert(self.name.clone(), value);
        Ok(())
    }

    /// Read the current value from `storage`
    ///
    /// # Errors
    ///
    /// Returns `Destroyed` if the record has been cleared.
    pub(crate) fn get<'a>(&self, storage: &'a Option<Storage>) -> Result<&'a Value> {
        let record = storage.as_ref().ok_or_else(|| Error::Destroyed {
            attribute: self.name.clone(),
        })?;
        Ok(record.get(&self.name).unwrap_or(&UNSET))
    }
}

fn declaration_error(attribute: String, kind: &str, reason: impl Into<String>) -> Error {
    Error::InvalidKindDeclaration {
        attribute,
        kind: kind.to_string(),
        reason: reason.into(),
    }
}
