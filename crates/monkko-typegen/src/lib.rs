//! TypeScript code generation for monkko schemas.
//!
//! `monkko-typegen` turns extracted [`Schema`]s into TypeScript artifacts:
//! document types, Zod validators and the helpers they share.
//!
//! # Architecture
//!
//! ```text
//! Schema ──> TemplateSet ──┬─> <Name>.types.ts   (TypesTemplate)
//!                          ├─> <Name>.schema.ts  (ZodTemplate)
//!                          └─> utils.ts          (support file, once)
//! ```
//!
//! # Example
//!
//! ```
//! use monkko_typegen::{Field, Schema, TemplateSet, render};
//!
//! let mut schema = Schema::new("User");
//! schema.fields.insert("email".into(), Field::new("string"));
//!
//! let files = render(&[schema], &TemplateSet::standard()).unwrap();
//! assert!(files["User.types.ts"].contains("email?: string;"));
//! assert!(files["User.schema.ts"].contains("email: z.string().optional(),"));
//! assert!(files.contains_key("utils.ts"));
//! ```

pub mod output;
pub mod render;
pub mod traits;
pub mod typemap;

pub use monkko_schema::{Field, Options, Schema};
pub use output::{OBJECT_ID_SUPPORT, TypesTemplate, ZodTemplate};
pub use render::{RenderError, TemplateSet, render};
pub use traits::{SupportFile, Template, TemplateError};
pub use typemap::{typescript_type, zod_validator};
