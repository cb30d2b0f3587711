//! Maps an evaluated `defineSchema` argument onto the typed schema model.
//!
//! Values of the wrong type in known positions are treated as absent and
//! defaulted. Only a definition that is not an object at all is an error.

use crate::value::GenericValue;
use indexmap::IndexMap;
use monkko_schema::{ANY_TYPE, Field, Options, Schema};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("schema definition must be an object, got {found}")]
    NotAMapping { found: &'static str },
}

/// Build a [`Schema`] for `binding` from its evaluated definition.
pub fn map_schema(binding: &str, definition: &GenericValue) -> Result<Schema, MapError> {
    let GenericValue::Map(definition) = definition else {
        return Err(MapError::NotAMapping {
            found: definition.kind(),
        });
    };

    let mut schema = Schema::new(binding);
    if let Some(name) = str_entry(definition, "name") {
        schema.name = name.to_string();
    }
    if let Some(db) = str_entry(definition, "db") {
        schema.database = db.to_string();
    }
    if let Some(collection) = str_entry(definition, "collection") {
        schema.collection = collection.to_string();
    }
    debug!(
        name = %schema.name,
        db = %schema.database,
        collection = %schema.collection,
        "mapping schema"
    );

    if let Some(fields) = definition.get("fields").and_then(GenericValue::as_map) {
        schema.fields = fields
            .iter()
            .filter_map(|(name, value)| match value.as_map() {
                Some(entry) => Some((name.clone(), map_field(entry))),
                None => {
                    warn!(
                        schema = %schema.name,
                        field = %name,
                        found = value.kind(),
                        "skipping field that is not an object"
                    );
                    None
                }
            })
            .inspect(|(name, field)| debug!(field = %name, ty = %field.ty, "mapped field"))
            .collect();
    }

    if let Some(options) = definition.get("options").and_then(GenericValue::as_map) {
        schema.options = map_options(options);
    }

    Ok(schema)
}

fn map_field(entry: &IndexMap<String, GenericValue>) -> Field {
    Field {
        ty: str_entry(entry, "type").unwrap_or(ANY_TYPE).to_string(),
        required: bool_entry(entry, "required"),
        unique: bool_entry(entry, "unique"),
        optional: bool_entry(entry, "optional"),
    }
}

/// Unknown option keys are ignored.
fn map_options(options: &IndexMap<String, GenericValue>) -> Options {
    Options {
        timestamps: bool_entry(options, "timestamps"),
    }
}

fn str_entry<'v>(map: &'v IndexMap<String, GenericValue>, key: &str) -> Option<&'v str> {
    map.get(key).and_then(GenericValue::as_str)
}

fn bool_entry(map: &IndexMap<String, GenericValue>, key: &str) -> bool {
    map.get(key).and_then(GenericValue::as_bool).unwrap_or(false)
}
