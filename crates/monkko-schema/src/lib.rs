//! Schema model produced by `monkko-extract` and consumed by `monkko-typegen`.
//!
//! A [`Schema`] describes one document collection: where it lives
//! (`database`, `collection`), which fields it has, and schema-level options.
//! Field types are open string tags; generators decide how to render tags
//! they don't know.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field type tag used when a field declares no `type`.
pub const ANY_TYPE: &str = "any";

/// A single data schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    /// Database name; empty when the declaration doesn't specify one.
    #[serde(rename = "db")]
    pub database: String,
    pub collection: String,
    /// Fields in declaration order.
    pub fields: IndexMap<String, Field>,
    pub options: Options,
}

impl Schema {
    /// Schema with the defaults for a binding name: the collection is the
    /// lower-cased name and there are no fields.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            collection: name.to_lowercase(),
            name,
            database: String::new(),
            fields: IndexMap::new(),
            options: Options::default(),
        }
    }

    /// Fields sorted by name.
    pub fn sorted_fields(&self) -> Vec<(&str, &Field)> {
        let mut fields: Vec<_> = self
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        fields
    }
}

/// A field of a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Type tag, e.g. `string`, `objectId`, or a sub-document name.
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
    pub unique: bool,
    pub optional: bool,
}

impl Field {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            required: false,
            unique: false,
            optional: false,
        }
    }

    /// Whether generated code treats this field as optional.
    ///
    /// Only `required` decides; the separate `optional` flag is kept for
    /// consumers that want it but never overrides `required`.
    pub fn is_optional(&self) -> bool {
        !self.required
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(ANY_TYPE)
    }
}

/// Schema-level options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Adds `createdAt` / `updatedAt` to the document.
    pub timestamps: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_collection() {
        let schema = Schema::new("BlogPost");
        assert_eq!(schema.name, "BlogPost");
        assert_eq!(schema.collection, "blogpost");
        assert!(schema.database.is_empty());
        assert!(schema.fields.is_empty());
        assert!(!schema.options.timestamps);
    }

    #[test]
    fn test_optional_follows_required() {
        let mut field = Field::new("string");
        assert!(field.is_optional());

        field.required = true;
        field.optional = true;
        assert!(!field.is_optional());
    }

    #[test]
    fn test_sorted_fields() {
        let mut schema = Schema::new("User");
        schema.fields.insert("name".into(), Field::new("string"));
        schema.fields.insert("age".into(), Field::new("number"));

        let names: Vec<_> = schema.sorted_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["age", "name"]);
        // declaration order is untouched
        assert_eq!(schema.fields.get_index(0).map(|(k, _)| k.as_str()), Some("name"));
    }

    #[test]
    fn test_json_shape() {
        let mut schema = Schema::new("User");
        schema.database = "app".into();
        schema.fields.insert("email".into(), Field::new("string"));

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["db"], "app");
        assert_eq!(json["fields"]["email"]["type"], "string");
        assert_eq!(json["options"]["timestamps"], false);
    }
}
