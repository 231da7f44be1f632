//! typekind - runtime kind classification and validated attributes
//!
//! Two layers, leaf first:
//!
//! - the kind classifier maps any [`Value`] to exactly one [`Kind`]
//! - the validated property installer builds [`Entity`] values whose
//!   declared attributes are checked against their kind on every write
//!
//! # Quick Start
//!
//! ```
//! use typekind::{Entity, Error, Kind, Value};
//!
//! let mut user = Entity::from_declarations([("username", "string"), ("password", "string")])?;
//! user.set("username", "Igor")?;
//! user.set("password", "Ivanovic")?;
//!
//! assert_eq!(typekind::classify(user.get("username")?)?, Kind::String);
//! assert!(matches!(user.set("index", 1), Err(Error::SealViolation { .. })));
//!
//! user.destroy();
//! assert!(user.is_destroyed());
//! # Ok::<(), Error>(())
//! ```
//!
//! Internal crate boundaries are not part of the API; everything public is
//! re-exported here.

pub use typekind_core::*;
pub use typekind_entity::{
    validated_entity, Accessor, Entity, Schema, SchemaBuilder, SchemaConfig,
};
