//! Zod validators.
//!
//! Renders `<Name>.schema.ts`: the document schema, create and update input
//! schemas, and the types Zod infers from them. Object ids validate through
//! the shared [`OBJECT_ID_SUPPORT`] helper.

use super::{OBJECT_ID_SUPPORT, check_reserved, property_name};
use crate::traits::{SupportFile, Template, TemplateError};
use crate::typemap::zod_validator;
use monkko_schema::Schema;
use std::fmt::Write;

pub struct ZodTemplate;

impl Template for ZodTemplate {
    fn name(&self) -> &'static str {
        "zod"
    }

    fn file_name(&self, schema: &Schema) -> String {
        format!("{}.schema.ts", schema.name)
    }

    fn render(&self, schema: &Schema, out: &mut String) -> Result<(), TemplateError> {
        check_reserved(schema)?;
        let name = &schema.name;
        let timestamps = schema.options.timestamps;

        writeln!(out, "import {{ z }} from 'zod';")?;
        writeln!(out, "import {{ ObjectIdSchema }} from './utils';")?;
        writeln!(out)?;

        writeln!(out, "// Base document schema for {name}")?;
        writeln!(out, "export const {name}Schema = z.object({{")?;
        writeln!(out, "  _id: ObjectIdSchema,")?;
        for (field_name, field) in schema.sorted_fields() {
            writeln!(
                out,
                "  {}: {}{},",
                property_name(field_name),
                zod_validator(&field.ty),
                if field.is_optional() { ".optional()" } else { "" }
            )
            .map_err(TemplateError::in_field(field_name))?;
        }
        if timestamps {
            writeln!(out, "  createdAt: z.date(),")?;
            writeln!(out, "  updatedAt: z.date(),")?;
        }
        writeln!(out, "}});")?;
        writeln!(out)?;

        writeln!(out, "// Create input schema (without _id and timestamps)")?;
        writeln!(out, "export const Create{name}Schema = {name}Schema.omit({{")?;
        writeln!(out, "  _id: true,")?;
        if timestamps {
            writeln!(out, "  createdAt: true,")?;
            writeln!(out, "  updatedAt: true,")?;
        }
        writeln!(out, "}});")?;
        writeln!(out)?;

        writeln!(out, "// Update input schema (partial of create schema)")?;
        writeln!(
            out,
            "export const Update{name}Schema = Create{name}Schema.partial();"
        )?;
        writeln!(out)?;

        writeln!(out, "// Type exports inferred from Zod schemas")?;
        writeln!(out, "export type {name}Document = z.infer<typeof {name}Schema>;")?;
        writeln!(
            out,
            "export type Create{name}Input = z.infer<typeof Create{name}Schema>;"
        )?;
        writeln!(
            out,
            "export type Update{name}Input = z.infer<typeof Update{name}Schema>;"
        )?;
        Ok(())
    }

    fn support(&self, _schema: &Schema) -> Option<&'static SupportFile> {
        Some(&OBJECT_ID_SUPPORT)
    }
}
