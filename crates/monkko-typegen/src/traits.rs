//! Traits for output templates.

use monkko_schema::Schema;
use std::fmt;

/// A file shared by every schema whose output imports it.
#[derive(Debug, PartialEq, Eq)]
pub struct SupportFile {
    pub file_name: &'static str,
    pub content: &'static str,
}

/// Why a template could not render a schema.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("formatting failed")]
    Format {
        /// Field being written when formatting failed, if any.
        field: Option<String>,
        #[source]
        source: fmt::Error,
    },

    /// A schema field has the name of a property the template writes itself.
    #[error("field `{field}` collides with a generated property")]
    ReservedField { field: String },
}

impl TemplateError {
    /// Attribute a formatting failure to `field`.
    pub fn in_field(field: &str) -> impl FnOnce(fmt::Error) -> Self {
        let field = field.to_string();
        move |source| TemplateError::Format {
            field: Some(field),
            source,
        }
    }
}

impl From<fmt::Error> for TemplateError {
    fn from(source: fmt::Error) -> Self {
        TemplateError::Format {
            field: None,
            source,
        }
    }
}

/// A per-schema output template.
///
/// # Implementing Custom Templates
///
/// ```
/// use monkko_typegen::{Schema, Template, TemplateError, TemplateSet};
/// use std::fmt::Write;
///
/// struct Collections;
///
/// impl Template for Collections {
///     fn name(&self) -> &'static str { "collections" }
///     fn file_name(&self, schema: &Schema) -> String { format!("{}.collection.ts", schema.name) }
///     fn render(&self, schema: &Schema, out: &mut String) -> Result<(), TemplateError> {
///         writeln!(out, "export const {}Collection = '{}';", schema.name, schema.collection)?;
///         Ok(())
///     }
/// }
///
/// let templates = TemplateSet::new().with(Collections);
/// let files = monkko_typegen::render(&[Schema::new("Post")], &templates).unwrap();
/// assert_eq!(files["Post.collection.ts"], "export const PostCollection = 'post';\n");
/// ```
pub trait Template: Send + Sync {
    /// Unique template identifier (e.g., "types", "zod").
    fn name(&self) -> &'static str;

    /// Output file name for `schema`, relative to the output directory.
    fn file_name(&self, schema: &Schema) -> String;

    /// Append the artifact for `schema` to `out`.
    fn render(&self, schema: &Schema, out: &mut String) -> Result<(), TemplateError>;

    /// Shared file the rendered artifact imports, if any.
    fn support(&self, _schema: &Schema) -> Option<&'static SupportFile> {
        None
    }
}
