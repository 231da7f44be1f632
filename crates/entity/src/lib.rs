//! Validated attributes for typekind
//!
//! This crate installs kind-checked accessors on entities:
//! - Accessor: get/set pair for one declared attribute
//! - Schema: ordered attribute declarations, built fail-fast
//! - Entity: sealed attribute set over a private storage record
//! - SchemaConfig: schema declarations loaded from TOML or JSON
//! - validated_entity!: typed entities with generated accessors
//!
//! # Example
//!
//! ```
//! use typekind_entity::{Entity, Error, Value};
//!
//! let mut user = Entity::from_declarations([("username", "string"), ("password", "string")])?;
//! user.set("username", "Igor")?;
//! assert_eq!(user.get("username")?, &Value::from("Igor"));
//!
//! assert!(matches!(user.set("username", 1), Err(Error::TypeMismatch { .. })));
//! assert!(matches!(user.set("index", 1), Err(Error::SealViolation { .. })));
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accessor;
pub mod config;
pub mod entity;
mod macros;
pub mod schema;

pub use accessor::Accessor;
pub use config::SchemaConfig;
pub use entity::Entity;
pub use schema::{Schema, SchemaBuilder};

pub use typekind_core::{Error, Kind, Result, Value};
