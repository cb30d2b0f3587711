//! Rendering a schema set through a [`TemplateSet`].

use crate::output::{TypesTemplate, ZodTemplate, is_identifier};
use crate::traits::{SupportFile, Template, TemplateError};
use indexmap::IndexMap;
use monkko_schema::Schema;
use std::fmt;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(
        "failed to render template `{template}` for schema `{schema}`{}",
        field_label(.field.as_deref())
    )]
    Template {
        schema: String,
        template: &'static str,
        field: Option<String>,
        #[source]
        source: fmt::Error,
    },

    #[error("field `{field}` of schema `{schema}` collides with a property generated by `{template}`")]
    ReservedField {
        schema: String,
        template: &'static str,
        field: String,
    },

    #[error("schema name `{schema}` is not a valid identifier")]
    InvalidName { schema: String },

    #[error("schema `{schema}` renders to `{file}`, which another schema already produced")]
    DuplicateOutput { file: String, schema: String },
}

fn field_label(field: Option<&str>) -> String {
    field.map(|f| format!(" at field `{f}`")).unwrap_or_default()
}

impl RenderError {
    fn from_template(schema: &Schema, template: &dyn Template, err: TemplateError) -> Self {
        let schema = schema.name.clone();
        let template = template.name();
        match err {
            TemplateError::Format { field, source } => RenderError::Template {
                schema,
                template,
                field,
                source,
            },
            TemplateError::ReservedField { field } => RenderError::ReservedField {
                schema,
                template,
                field,
            },
        }
    }
}

/// An ordered, immutable set of templates.
#[derive(Default)]
pub struct TemplateSet {
    templates: Vec<Box<dyn Template>>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// TypeScript document types followed by Zod validators.
    pub fn standard() -> Self {
        Self::new().with(TypesTemplate).with(ZodTemplate)
    }

    pub fn with(mut self, template: impl Template + 'static) -> Self {
        self.templates.push(Box::new(template));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Template> {
        self.templates.iter().map(|t| t.as_ref())
    }
}

impl fmt::Debug for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Render every schema through every template.
///
/// Files come back keyed by file name, in schema order then template order,
/// followed by the support files the rendered artifacts import. No file is
/// produced twice.
pub fn render(
    schemas: &[Schema],
    templates: &TemplateSet,
) -> Result<IndexMap<String, String>, RenderError> {
    let mut files = IndexMap::new();
    let mut support: IndexMap<&'static str, (&'static SupportFile, &str)> = IndexMap::new();

    for schema in schemas {
        if !is_identifier(&schema.name) {
            return Err(RenderError::InvalidName {
                schema: schema.name.clone(),
            });
        }
        for template in templates.iter() {
            let file = template.file_name(schema);
            if files.contains_key(&file) {
                return Err(RenderError::DuplicateOutput {
                    file,
                    schema: schema.name.clone(),
                });
            }

            let mut content = String::new();
            template
                .render(schema, &mut content)
                .map_err(|err| RenderError::from_template(schema, template, err))?;
            debug!(schema = %schema.name, template = template.name(), file = %file, "rendered");
            files.insert(file, content);

            if let Some(shared) = template.support(schema) {
                support
                    .entry(shared.file_name)
                    .or_insert((shared, schema.name.as_str()));
            }
        }
    }

    for (file_name, (shared, schema)) in support {
        if files.contains_key(file_name) {
            return Err(RenderError::DuplicateOutput {
                file: file_name.to_string(),
                schema: schema.to_string(),
            });
        }
        files.insert(file_name.to_string(), shared.content.to_string());
    }

    Ok(files)
}
