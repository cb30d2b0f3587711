//! Declaration scanner.
//!
//! Finds top-level bindings initialized by a call to [`SCHEMA_ENTRY_POINT`]:
//!
//! ```text
//! const User = defineSchema({ ... });
//! export const User = orm.defineSchema({ ... });
//! exports.User = (0, import_orm.defineSchema)({ ... });
//! ```
//!
//! Every top-level statement contributes zero or more declarations; other
//! statements are ordinary code and are skipped without error.

use crate::syntax::{Span, node_text, significant_children};
use tracing::debug;
use tree_sitter::Node;

/// Name of the schema-defining function.
pub const SCHEMA_ENTRY_POINT: &str = "defineSchema";

/// A schema-defining binding and the object literal it was called with.
#[derive(Debug, Clone)]
pub struct Declaration<'tree> {
    pub binding: String,
    pub argument: Node<'tree>,
}

/// A `defineSchema` call whose shape is not supported.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("`defineSchema` takes exactly one argument, got {found} at {span}")]
    Arity { found: usize, span: Span },

    #[error("`defineSchema` argument must be an object literal, got `{kind}` at {span}")]
    NotAnObject { kind: String, span: Span },
}

/// A [`ShapeError`] attributed to the binding it occurred in.
#[derive(Debug, thiserror::Error)]
#[error("invalid schema declaration `{binding}`: {error}")]
pub struct ScanError {
    pub binding: String,
    pub error: ShapeError,
}

/// Collect schema declarations from the top-level statements of `root`, in
/// source order.
pub fn scan<'tree>(root: Node<'tree>, source: &str) -> Result<Vec<Declaration<'tree>>, ScanError> {
    significant_children(root)
        .into_iter()
        .map(|statement| scan_statement(statement, source))
        .try_fold(Vec::new(), |mut declarations, found| {
            declarations.extend(found?);
            Ok(declarations)
        })
}

fn scan_statement<'tree>(
    statement: Node<'tree>,
    source: &str,
) -> Result<Vec<Declaration<'tree>>, ScanError> {
    match statement.kind() {
        "lexical_declaration" | "variable_declaration" => {
            scan_variable_declaration(statement, source)
        }
        "export_statement" => match statement.child_by_field_name("declaration") {
            Some(declaration) => scan_statement(declaration, source),
            None => Ok(Vec::new()),
        },
        "expression_statement" => {
            Ok(scan_export_assignment(statement, source)?.into_iter().collect())
        }
        _ => Ok(Vec::new()),
    }
}

/// `const A = defineSchema({...}), B = ...;`
fn scan_variable_declaration<'tree>(
    statement: Node<'tree>,
    source: &str,
) -> Result<Vec<Declaration<'tree>>, ScanError> {
    significant_children(statement)
        .into_iter()
        .filter(|child| child.kind() == "variable_declarator")
        .filter_map(|declarator| {
            // Destructuring patterns never name a schema.
            let name = declarator
                .child_by_field_name("name")
                .filter(|name| name.kind() == "identifier")?;
            let value = declarator.child_by_field_name("value")?;
            Some((node_text(name, source), value))
        })
        .filter_map(|(binding, value)| match_schema_call(binding, value, source).transpose())
        .collect()
}

/// `exports.A = defineSchema({...});` and `module.exports.A = ...`
fn scan_export_assignment<'tree>(
    statement: Node<'tree>,
    source: &str,
) -> Result<Option<Declaration<'tree>>, ScanError> {
    let Some(expression) = significant_children(statement).into_iter().next() else {
        return Ok(None);
    };
    if expression.kind() == "sequence_expression" {
        debug!(line = Span::of(expression).line, "skipping comma-joined statement");
        return Ok(None);
    }
    if expression.kind() != "assignment_expression" {
        return Ok(None);
    }
    let (Some(left), Some(right)) = (
        expression.child_by_field_name("left"),
        expression.child_by_field_name("right"),
    ) else {
        return Ok(None);
    };
    let Some(binding) = export_binding_name(left, source) else {
        return Ok(None);
    };
    if right.kind() == "assignment_expression" {
        debug!(binding, "skipping chained export assignment");
        return Ok(None);
    }
    match_schema_call(binding, right, source)
}

fn export_binding_name<'s>(target: Node, source: &'s str) -> Option<&'s str> {
    if target.kind() != "member_expression" {
        return None;
    }
    let object = target.child_by_field_name("object")?;
    let property = target.child_by_field_name("property")?;
    let exports = match object.kind() {
        "identifier" => node_text(object, source) == "exports",
        "member_expression" => node_text(object, source) == "module.exports",
        _ => false,
    };
    exports.then(|| node_text(property, source))
}

/// Check whether `value` is a schema-defining call and validate its shape.
fn match_schema_call<'tree>(
    binding: &str,
    value: Node<'tree>,
    source: &str,
) -> Result<Option<Declaration<'tree>>, ScanError> {
    let value = strip_type_wrappers(value);
    if value.kind() != "call_expression" {
        return Ok(None);
    }
    let Some(callee) = value.child_by_field_name("function") else {
        return Ok(None);
    };
    if resolve_callee_name(callee, source) != Some(SCHEMA_ENTRY_POINT) {
        return Ok(None);
    }

    debug!(binding, "found schema declaration");

    let fail = |error| ScanError {
        binding: binding.to_string(),
        error,
    };

    let arguments = match value.child_by_field_name("arguments") {
        Some(arguments) if arguments.kind() == "arguments" => significant_children(arguments),
        // Tagged template: defineSchema`...`
        Some(template) => vec![template],
        None => Vec::new(),
    };

    let [argument] = arguments.as_slice() else {
        return Err(fail(ShapeError::Arity {
            found: arguments.len(),
            span: Span::of(value),
        }));
    };

    if argument.kind() != "object" {
        return Err(fail(ShapeError::NotAnObject {
            kind: argument.kind().to_string(),
            span: Span::of(*argument),
        }));
    }

    Ok(Some(Declaration {
        binding: binding.to_string(),
        argument: *argument,
    }))
}

/// `(x)`, `x as const`, `x satisfies T` and `x!` all evaluate to `x`.
fn strip_type_wrappers(mut node: Node) -> Node {
    while matches!(
        node.kind(),
        "parenthesized_expression"
            | "as_expression"
            | "satisfies_expression"
            | "non_null_expression"
    ) {
        match significant_children(node).first() {
            Some(inner) => node = *inner,
            None => break,
        }
    }
    node
}

/// Resolve the function name a callee expression refers to.
///
/// Handles bare identifiers, member access (`ns.defineSchema`), parentheses,
/// the comma-sequence wrapper emitted by transpilers (`(0, ns.defineSchema)`)
/// and non-null assertions (`defineSchema!`).
pub fn resolve_callee_name<'s>(callee: Node, source: &'s str) -> Option<&'s str> {
    match callee.kind() {
        "identifier" => Some(node_text(callee, source)),
        "member_expression" => callee
            .child_by_field_name("property")
            .map(|property| node_text(property, source)),
        "parenthesized_expression" | "non_null_expression" => {
            let inner = *significant_children(callee).first()?;
            resolve_callee_name(inner, source)
        }
        "sequence_expression" => {
            let last = *significant_children(callee).last()?;
            resolve_callee_name(last, source)
        }
        _ => None,
    }
}
