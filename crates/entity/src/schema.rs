//! Attribute schemas
//!
//! A [`Schema`] is the ordered list of accessors an entity is built from.
//! Declaring an attribute installs its accessor immediately, so an invalid
//! kind fails at declaration time rather than on first write.
//!
//! ## Duplicate declarations
//!
//! Declaring a name twice replaces the earlier accessor: the last kind wins
//! and the attribute keeps its first position.

use tracing::{trace, warn};
use typekind_core::{Error, Kind, Result};

use crate::accessor::Accessor;

/// Ordered attribute declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    accessors: Vec<Accessor>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fluent schema declaration
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Build a schema from (name, kind label) pairs, in iteration order
    ///
    /// # Errors
    ///
    /// Returns `InvalidKindDeclaration` for the first reserved or unknown
    /// label.
    pub fn from_declarations<I, N, L>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: AsRef<str>,
    {
        let mut schema = Schema::new();
        for (name, label) in declarations {
            schema.install_label(name, label.as_ref())?;
        }
        Ok(schema)
    }

    /// Install an accessor for `name`
    ///
    /// # Errors
    ///
    /// Returns `InvalidKindDeclaration` if `kind` is reserved.
    pub fn install_property(&mut self, name: impl Into<String>, kind: Kind) -> Result<()> {
        let accessor = Accessor::install(name, kind)?;
        self.insert(accessor);
        Ok(())
    }

    /// Install an accessor for `name` from a kind label
    ///
    /// # Errors
    ///
    /// Returns `InvalidKindDeclaration` if the label is reserved or unknown.
    pub fn install_label(&mut self, name: impl Into<String>, label: &str) -> Result<()> {
        let accessor = Accessor::install_label(name, label)?;
        self.insert(accessor);
        Ok(())
    }

    fn insert(&mut self, accessor: Accessor) {
        match self
            .accessors
            .iter_mut()
            .find(|existing| existing.name() == accessor.name())
        {
            Some(existing) => {
                warn!(
                    attribute = accessor.name(),
                    previous = %existing.kind(),
                    kind = %accessor.kind(),
                    "duplicate declaration overrides earlier accessor"
                );
                *existing = accessor;
            }
            None => {
                trace!(attribute = accessor.name(), kind = %accessor.kind(), "installed accessor");
                self.accessors.push(accessor);
            }
        }
    }

    /// Accessor for `name`, if declared
    pub fn get_accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|a| a.name() == name)
    }

    /// Declared kind of `name`
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.get_accessor(name).map(Accessor::kind)
    }

    /// Whether `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.get_accessor(name).is_some()
    }

    /// Declared names, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(Accessor::name)
    }

    /// All accessors, in declaration order
    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    /// Number of declared attributes
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// True if nothing is declared
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

/// Fluent builder for [`Schema`]
///
/// The first failing declaration is kept and reported by [`build`];
/// later declarations are ignored once one has failed.
///
/// [`build`]: SchemaBuilder::build
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    schema: Schema,
    error: Option<Error>,
}

impl SchemaBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` with `kind`
    pub fn attribute(mut self, name: impl Into<String>, kind: Kind) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.schema.install_property(name, kind) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Declare `name` with a kind label
    pub fn attribute_label(mut self, name: impl Into<String>, label: &str) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.schema.install_label(name, label) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Finish the declaration
    ///
    /// # Errors
    ///
    /// Returns the first declaration error.
    pub fn build(self) -> Result<Schema> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.schema),
        }
    }
}
