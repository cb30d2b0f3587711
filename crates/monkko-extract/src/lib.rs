//! Schema extraction from `*.monkko.ts` sources.
//!
//! `monkko-extract` finds `defineSchema({...})` declarations in TypeScript
//! (or its CommonJS output) and turns them into [`Schema`] values without
//! running any of the source.
//!
//! # Architecture
//!
//! ```text
//! source ─> syntax::parse ─> scan::scan ─> eval::Evaluator ─> mapper::map_schema ─> Schema
//!           (tree-sitter)    (bindings)    (literals only)    (defaults)
//! ```
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//!
//! let source = r#"
//!     export const User = defineSchema({
//!         db: "app",
//!         fields: { email: fields.string({ required: true, unique: true }) },
//!     });
//! "#;
//!
//! let schemas = monkko_extract::extract_source(Path::new("user.monkko.ts"), source).unwrap();
//! assert_eq!(schemas[0].name, "User");
//! assert_eq!(schemas[0].collection, "user");
//! assert_eq!(schemas[0].fields["email"].ty, "string");
//! ```
//!
//! Extraction is all-or-nothing: the first malformed declaration fails the
//! whole run with an [`ExtractionError`] naming the file and binding.

pub mod error;
pub mod eval;
pub mod mapper;
pub mod scan;
pub mod syntax;
pub mod value;

pub use error::{ErrorKind, ExtractionError, MalformedArgument};
pub use monkko_schema::{Field, Options, Schema};
pub use scan::SCHEMA_ENTRY_POINT;
pub use value::GenericValue;

use rayon::prelude::*;
use std::path::Path;
use tracing::info;

/// Extract schemas from `files`, in file order then declaration order.
pub fn extract<P: AsRef<Path>>(files: &[P]) -> Result<Vec<Schema>, ExtractionError> {
    concat(files.iter().map(|path| extract_file(path.as_ref())))
}

/// Like [`extract`], but processes files on the rayon pool.
///
/// Output order and the reported error (the first failing file in input
/// order) are the same as for [`extract`].
pub fn extract_parallel<P: AsRef<Path> + Sync>(
    files: &[P],
) -> Result<Vec<Schema>, ExtractionError> {
    let results: Vec<_> = files
        .par_iter()
        .map(|path| extract_file(path.as_ref()))
        .collect();
    concat(results)
}

fn concat(
    results: impl IntoIterator<Item = Result<Vec<Schema>, ExtractionError>>,
) -> Result<Vec<Schema>, ExtractionError> {
    results
        .into_iter()
        .try_fold(Vec::new(), |mut all, schemas| {
            all.extend(schemas?);
            Ok(all)
        })
}

/// Read and extract one file.
pub fn extract_file(path: &Path) -> Result<Vec<Schema>, ExtractionError> {
    let source = std::fs::read_to_string(path)
        .map_err(|err| ExtractionError::new(path, None, ErrorKind::Io(err)))?;
    extract_source(path, &source)
}

/// Extract schemas from already-loaded source text. `path` is only used for
/// error reporting.
pub fn extract_source(path: &Path, source: &str) -> Result<Vec<Schema>, ExtractionError> {
    info!(path = %path.display(), bytes = source.len(), "extracting schemas");

    let tree = syntax::parse(source).map_err(|err| ExtractionError::new(path, None, err))?;

    let declarations = scan::scan(tree.root_node(), source)
        .map_err(|err| ExtractionError::new(path, Some(&err.binding), err.error))?;

    let evaluator = eval::Evaluator::new(source);
    declarations
        .iter()
        .map(|declaration| {
            let binding = declaration.binding.as_str();
            let definition = evaluator
                .evaluate(declaration.argument)
                .map_err(|err| ExtractionError::new(path, Some(binding), err))?;
            mapper::map_schema(binding, &definition)
                .map_err(|err| ExtractionError::new(path, Some(binding), err))
        })
        .collect()
}
