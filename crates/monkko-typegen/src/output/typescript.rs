//! TypeScript document types.
//!
//! Renders `<Name>.types.ts` with the stored document type and the create and
//! update input types derived from it.

use super::{check_reserved, property_name};
use crate::traits::{Template, TemplateError};
use crate::typemap::typescript_type;
use monkko_schema::Schema;
use std::fmt::Write;

pub struct TypesTemplate;

impl Template for TypesTemplate {
    fn name(&self) -> &'static str {
        "types"
    }

    fn file_name(&self, schema: &Schema) -> String {
        format!("{}.types.ts", schema.name)
    }

    fn render(&self, schema: &Schema, out: &mut String) -> Result<(), TemplateError> {
        check_reserved(schema)?;
        let name = &schema.name;
        let timestamps = schema.options.timestamps;

        writeln!(out, "import type {{ ObjectId }} from 'mongodb';")?;
        writeln!(out)?;
        writeln!(out, "export type {name}Document = {{")?;
        writeln!(out, "  _id: ObjectId;")?;
        for (field_name, field) in schema.sorted_fields() {
            writeln!(
                out,
                "  {}{}: {};",
                property_name(field_name),
                if field.is_optional() { "?" } else { "" },
                typescript_type(&field.ty)
            )
            .map_err(TemplateError::in_field(field_name))?;
        }
        if timestamps {
            writeln!(out, "  createdAt: Date;")?;
            writeln!(out, "  updatedAt: Date;")?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        let omitted = if timestamps {
            "'_id' | 'createdAt' | 'updatedAt'"
        } else {
            "'_id'"
        };
        writeln!(
            out,
            "export type Create{name}Input = Omit<{name}Document, {omitted}>;"
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "export type Update{name}Input = Partial<Create{name}Input>;"
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkko_schema::Field;

    fn render(schema: &Schema) -> String {
        let mut out = String::new();
        TypesTemplate.render(schema, &mut out).unwrap();
        out
    }

    #[test]
    fn test_without_timestamps() {
        let mut schema = Schema::new("Tag");
        schema.fields.insert("label".into(), Field::new("string"));
        let out = render(&schema);
        assert!(out.contains("  label?: string;\n"));
        assert!(!out.contains("createdAt"));
        assert!(out.contains("export type CreateTagInput = Omit<TagDocument, '_id'>;\n"));
    }

    #[test]
    fn test_field_named_like_generated_property() {
        let mut schema = Schema::new("User");
        schema.options.timestamps = true;
        schema.fields.insert("updatedAt".into(), Field::new("date"));
        let err = TypesTemplate.render(&schema, &mut String::new()).unwrap_err();
        assert!(matches!(err, TemplateError::ReservedField { field } if field == "updatedAt"));
    }

    #[test]
    fn test_quoted_property() {
        let mut schema = Schema::new("Tag");
        let mut field = Field::new("number");
        field.required = true;
        schema.fields.insert("sort-order".into(), field);
        assert!(render(&schema).contains("  'sort-order': number;\n"));
    }
}
