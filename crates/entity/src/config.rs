//! Schema configuration files
//!
//! Schemas can be declared in TOML or JSON instead of code. Declaration
//! order in the file is the attribute order of the schema.
//!
//! # Example
//!
//! ```toml
//! [attributes]
//! username = "string"
//! password = "string"
//! created = "date"
//! ```

use std::path::Path;

use serde::Deserialize;
use typekind_core::{Error, Result};

use crate::entity::Entity;
use crate::schema::Schema;

#[derive(Deserialize)]
struct TomlSchemaFile {
    #[serde(default)]
    attributes: toml::Table,
}

#[derive(Deserialize)]
struct JsonSchemaFile {
    #[serde(default)]
    attributes: serde_json::Map<String, serde_json::Value>,
}

/// Attribute declarations loaded from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    /// (name, kind label) pairs in file order
    pub attributes: Vec<(String, String)>,
}

impl SchemaConfig {
    /// Parse a TOML schema
    ///
    /// # Errors
    ///
    /// Returns `Config` if the document does not parse or an attribute does
    /// not map to a string label.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TomlSchemaFile = toml::from_str(content)
            .map_err(|e| Error::config(format!("failed to parse TOML schema: {}", e)))?;
        let attributes = file
            .attributes
            .into_iter()
            .map(|(name, value)| match value {
                toml::Value::String(label) => Ok((name, label)),
                other => Err(label_error(&name, other.type_str())),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SchemaConfig { attributes })
    }

    /// Parse a JSON schema
    ///
    /// # Errors
    ///
    /// Returns `Config` if the document does not parse or an attribute does
    /// not map to a string label.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: JsonSchemaFile = serde_json::from_str(content)
            .map_err(|e| Error::config(format!("failed to parse JSON schema: {}", e)))?;
        let attributes = file
            .attributes
            .into_iter()
            .map(|(name, value)| match value {
                serde_json::Value::String(label) => Ok((name, label)),
                other => Err(label_error(&name, json_type_name(&other))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SchemaConfig { attributes })
    }

    /// Read a schema file, choosing the format by extension
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read, has an unsupported
    /// extension, or does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(Error::config(format!(
                "unsupported schema file '{}': expected .toml or .json",
                path.display()
            ))),
        }
    }

    /// Install every declared attribute into a schema
    ///
    /// # Errors
    ///
    /// Returns `InvalidKindDeclaration` for the first reserved or unknown
    /// label.
    pub fn to_schema(&self) -> Result<Schema> {
        Schema::from_declarations(
            self.attributes
                .iter()
                .map(|(name, label)| (name.as_str(), label.as_str())),
        )
    }

    /// Build an empty entity from this configuration
    ///
    /// # Errors
    ///
    /// Same as [`to_schema`](SchemaConfig::to_schema).
    pub fn to_entity(&self) -> Result<Entity> {
        Ok(Entity::new(self.to_schema()?))
    }
}

fn label_error(name: &str, found: &str) -> Error {
    Error::config(format!(
        "attribute '{}' must map to a kind label, found {}",
        name, found
    ))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
