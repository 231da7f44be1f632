//! Validated entities
//!
//! An [`Entity`] pairs a shared [`Schema`] with a private storage record.
//! Every write goes through the declared attribute's accessor, which
//! classifies the value and rejects it on a kind mismatch.
//!
//! ## Lifecycle
//!
//! | Phase | Storage record | Reads | Writes |
//! |-------|----------------|-------|--------|
//! | Constructed | empty | `Undefined` until set | validated |
//! | Populated | holds written values | stored value | validated |
//! | Destroyed | cleared | `Destroyed` error | validated, record recreated empty |
//!
//! The attribute set is sealed at construction: writing an undeclared name
//! fails with `SealViolation`.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use typekind_core::{Error, Kind, Result, Value};

use crate::accessor::Storage;
use crate::schema::Schema;

/// An object whose attributes are declared up front and checked on write
#[derive(Clone)]
pub struct Entity {
    schema: Arc<Schema>,
    storage: Option<Storage>,
}

impl Entity {
    /// Create an empty, sealed entity for `schema`
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        let schema = schema.into();
        debug!(attributes = schema.len(), "entity constructed and sealed");
        Entity {
            schema,
            storage: Some(Storage::new()),
        }
    }

    /// Create an entity from (name, kind label) pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidKindDeclaration` for the first reserved or unknown
    /// label; no entity is created.
    pub fn from_declarations<I, N, L>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: AsRef<str>,
    {
        Ok(Entity::new(Schema::from_declarations(declarations)?))
    }

    /// Assign `value` to the declared attribute `name`
    ///
    /// # Errors
    ///
    /// - `SealViolation` if `name` is not declared
    /// - `TypeMismatch` if the value classifies as a different kind
    /// - `Unclassifiable` if the value has no kind
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let accessor = self
            .schema
            .get_accessor(name)
            .ok_or_else(|| Error::SealViolation {
                property: name.to_string(),
            })?;
        accessor.set(&mut self.storage, value.into())
    }

    /// Read the declared attribute `name`
    ///
    /// # Errors
    ///
    /// - `UndeclaredAttribute` if `name` is not declared
    /// - `Destroyed` after [`destroy`](Entity::destroy)
    pub fn get(&self, name: &str) -> Result<&Value> {
        let accessor =
            self.schema
                .get_accessor(name)
                .ok_or_else(|| Error::UndeclaredAttribute {
                    attribute: name.to_string(),
                })?;
        accessor.get(&self.storage)
    }

    /// Clear the storage record
    ///
    /// Calling it again is a no-op.
    pub fn destroy(&mut self) {
        match self.storage.take() {
            Some(record) => debug!(stored = record.len(), "entity destroyed"),
            None => debug!("entity already destroyed"),
        }
    }

    /// Whether the storage record is cleared
    pub fn is_destroyed(&self) -> bool {
        self.storage.is_none()
    }

    /// The schema this entity was built from
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Declared kind of `name`
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.schema.kind_of(name)
    }

    /// Declared attribute names, in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.schema.names()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("attributes", &self.schema.names().collect::<Vec<_>>())
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}
