//! Extraction errors with file and binding context.

use crate::eval::EvalError;
use crate::mapper::MapError;
use crate::scan::ShapeError;
use crate::syntax::ParseError;
use std::path::{Path, PathBuf};

/// What went wrong while extracting one file.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("failed to read file: {0}")]
    Io(std::io::Error),

    #[error("parse failure: {0}")]
    ParseFailure(ParseError),

    #[error("unrecognized declaration shape: {0}")]
    UnrecognizedDeclarationShape(ShapeError),

    #[error("non-evaluable expression: {0}")]
    NonEvaluableExpression(EvalError),

    #[error("malformed schema argument: {0}")]
    MalformedSchemaArgument(MalformedArgument),
}

/// Why a `defineSchema` argument could not describe a schema.
#[derive(Debug, thiserror::Error)]
pub enum MalformedArgument {
    /// The argument is not an object literal.
    #[error(transparent)]
    Shape(ShapeError),

    /// The argument evaluated to something other than a mapping.
    #[error(transparent)]
    Definition(MapError),
}

impl From<ParseError> for ErrorKind {
    fn from(err: ParseError) -> Self {
        ErrorKind::ParseFailure(err)
    }
}

impl From<ShapeError> for ErrorKind {
    fn from(err: ShapeError) -> Self {
        match err {
            ShapeError::NotAnObject { .. } => {
                ErrorKind::MalformedSchemaArgument(MalformedArgument::Shape(err))
            }
            ShapeError::Arity { .. } => ErrorKind::UnrecognizedDeclarationShape(err),
        }
    }
}

impl From<EvalError> for ErrorKind {
    fn from(err: EvalError) -> Self {
        ErrorKind::NonEvaluableExpression(err)
    }
}

impl From<MapError> for ErrorKind {
    fn from(err: MapError) -> Self {
        ErrorKind::MalformedSchemaArgument(MalformedArgument::Definition(err))
    }
}

/// An extraction failure, attributed to a file and, when known, a binding.
#[derive(Debug, thiserror::Error)]
#[error("{}{}: {kind}", .path.display(), binding_label(.binding.as_deref()))]
pub struct ExtractionError {
    pub path: PathBuf,
    pub binding: Option<String>,
    pub kind: ErrorKind,
}

impl ExtractionError {
    pub fn new(path: &Path, binding: Option<&str>, kind: impl Into<ErrorKind>) -> Self {
        Self {
            path: path.to_path_buf(),
            binding: binding.map(str::to_string),
            kind: kind.into(),
        }
    }
}

fn binding_label(binding: Option<&str>) -> String {
    binding.map(|b| format!(" ({b})")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_binding() {
        let err = ExtractionError::new(
            Path::new("src/user.monkko.ts"),
            Some("User"),
            MapError::NotAMapping { found: "list" },
        );
        assert_eq!(
            err.to_string(),
            "src/user.monkko.ts (User): malformed schema argument: schema definition must be an object, got list"
        );
    }

    #[test]
    fn test_malformed_argument_keeps_node_kind_and_span() {
        let shape = ShapeError::NotAnObject {
            kind: "identifier".to_string(),
            span: crate::syntax::Span {
                line: 2,
                column: 34,
                start_byte: 40,
                end_byte: 44,
            },
        };
        match ErrorKind::from(shape) {
            ErrorKind::MalformedSchemaArgument(MalformedArgument::Shape(
                ShapeError::NotAnObject { kind, span },
            )) => {
                assert_eq!(kind, "identifier");
                assert_eq!((span.line, span.column), (2, 34));
            }
            other => panic!("expected a malformed shape, got {other:?}"),
        }
    }

    #[test]
    fn test_display_without_binding() {
        let err = ExtractionError::new(
            Path::new("a.monkko.ts"),
            None,
            ErrorKind::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        );
        assert_eq!(err.to_string(), "a.monkko.ts: failed to read file: gone");
    }
}
