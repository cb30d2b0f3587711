//! Built-in templates.
//!
//! Each template renders one artifact per [`Schema`](monkko_schema::Schema).
//! Fields are written sorted by name.

pub mod support;
pub mod typescript;
pub mod zod;

pub use support::OBJECT_ID_SUPPORT;
pub use typescript::TypesTemplate;
pub use zod::ZodTemplate;

use crate::traits::TemplateError;
use monkko_schema::Schema;
use std::borrow::Cow;

/// Properties the built-in templates write for every document.
pub(crate) fn generated_properties(schema: &Schema) -> &'static [&'static str] {
    if schema.options.timestamps {
        &["_id", "createdAt", "updatedAt"]
    } else {
        &["_id"]
    }
}

/// Reject schemas declaring a field the template already generates.
pub(crate) fn check_reserved(schema: &Schema) -> Result<(), TemplateError> {
    let reserved = generated_properties(schema);
    match schema.fields.keys().find(|name| reserved.contains(&name.as_str())) {
        Some(field) => Err(TemplateError::ReservedField {
            field: field.clone(),
        }),
        None => Ok(()),
    }
}

/// Whether `name` can be written as a bare TypeScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Object property name, quoted when it is not an identifier.
pub(crate) fn property_name(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        return Cow::Borrowed(name);
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');
    for c in name.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("User"));
        assert!(is_identifier("_id"));
        assert!(is_identifier("$ref2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier("first-name"));
        assert!(!is_identifier("has space"));
    }

    #[test]
    fn test_check_reserved() {
        use monkko_schema::Field;

        let mut schema = Schema::new("User");
        schema.fields.insert("createdAt".into(), Field::new("date"));
        assert!(check_reserved(&schema).is_ok());

        schema.options.timestamps = true;
        assert!(matches!(
            check_reserved(&schema),
            Err(TemplateError::ReservedField { field }) if field == "createdAt"
        ));

        let mut schema = Schema::new("User");
        schema.fields.insert("_id".into(), Field::new("string"));
        assert!(check_reserved(&schema).is_err());
    }

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("email"), "email");
        assert_eq!(property_name("first-name"), "'first-name'");
        assert_eq!(property_name("it's"), r"'it\'s'");
    }
}
