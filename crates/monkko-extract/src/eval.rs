//! Literal-only expression evaluator.
//!
//! Reduces an expression subtree to a [`GenericValue`] using a fixed set of
//! rules. Nothing is executed: identifiers, operators, interpolation and
//! functions are rejected with [`EvalError::NonEvaluable`].
//!
//! Field-builder calls are the one non-literal form accepted. They reduce to
//! their options object with a `type` entry naming the builder:
//!
//! ```text
//! fields.string({ required: true })  =>  { required: true, type: "string" }
//! Address({ optional: true })        =>  { optional: true, type: "Address" }
//! fields.date()                      =>  { type: "date" }
//! ```
//!
//! Only the first argument of a builder is read. Later arguments are never
//! evaluated, so `fields.object({...}, opts)` reduces to its first argument.

use crate::syntax::{Span, node_text, significant_children};
use crate::value::GenericValue;
use indexmap::IndexMap;
use tree_sitter::Node;

/// Key a field-builder call writes its name to.
pub const TYPE_KEY: &str = "type";

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("cannot evaluate `{kind}` at {span}: only literal values are allowed")]
    NonEvaluable { kind: String, span: Span },

    #[error("invalid {kind} literal `{text}` at {span}")]
    InvalidLiteral {
        kind: &'static str,
        text: String,
        span: Span,
    },

    #[error("field builder `{builder}` at {span} expects an object argument, got {found}")]
    BuilderArgument {
        builder: String,
        found: &'static str,
        span: Span,
    },
}

impl EvalError {
    fn non_evaluable(node: Node) -> Self {
        EvalError::NonEvaluable {
            kind: node.kind().to_string(),
            span: Span::of(node),
        }
    }
}

/// Evaluates expressions of one source text.
pub struct Evaluator<'s> {
    source: &'s str,
}

impl<'s> Evaluator<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    fn text(&self, node: Node) -> &'s str {
        node_text(node, self.source)
    }

    pub fn evaluate(&self, node: Node) -> Result<GenericValue, EvalError> {
        match node.kind() {
            "string" => self.string(node).map(GenericValue::String),
            "template_string" => self.template_string(node).map(GenericValue::String),
            "number" => self.number(node).map(GenericValue::Number),
            "true" => Ok(GenericValue::Bool(true)),
            "false" => Ok(GenericValue::Bool(false)),
            "null" | "undefined" => Ok(GenericValue::Null),
            "object" => self.object(node),
            "array" => self.array(node),
            "call_expression" => self.builder_call(node),
            "unary_expression" => self.signed_number(node),
            // No runtime effect: (x), x as const, x satisfies T, x!
            "parenthesized_expression"
            | "as_expression"
            | "satisfies_expression"
            | "non_null_expression" => {
                let inner = significant_children(node)
                    .into_iter()
                    .next()
                    .ok_or_else(|| EvalError::non_evaluable(node))?;
                self.evaluate(inner)
            }
            _ => Err(EvalError::non_evaluable(node)),
        }
    }

    fn object(&self, node: Node) -> Result<GenericValue, EvalError> {
        let mut map = IndexMap::new();
        for member in significant_children(node) {
            // Shorthand properties, spreads and methods all depend on runtime values.
            if member.kind() != "pair" {
                return Err(EvalError::non_evaluable(member));
            }
            let (Some(key), Some(value)) = (
                member.child_by_field_name("key"),
                member.child_by_field_name("value"),
            ) else {
                return Err(EvalError::non_evaluable(member));
            };
            let key = self.property_key(key)?;
            let value = self.evaluate(value)?;
            // Re-inserting keeps the first position and takes the last value.
            map.insert(key, value);
        }
        Ok(GenericValue::Map(map))
    }

    fn property_key(&self, node: Node) -> Result<String, EvalError> {
        match node.kind() {
            "property_identifier" => Ok(self.text(node).to_string()),
            "string" => self.string(node),
            "number" => {
                let n = self.number(node)?;
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Ok(format!("{}", n as i64))
                } else {
                    Ok(n.to_string())
                }
            }
            _ => Err(EvalError::non_evaluable(node)),
        }
    }

    fn array(&self, node: Node) -> Result<GenericValue, EvalError> {
        significant_children(node)
            .into_iter()
            .map(|element| self.evaluate(element))
            .collect::<Result<Vec<_>, _>>()
            .map(GenericValue::List)
    }

    fn builder_call(&self, node: Node) -> Result<GenericValue, EvalError> {
        let callee = node
            .child_by_field_name("function")
            .ok_or_else(|| EvalError::non_evaluable(node))?;
        let builder = self
            .builder_name(callee)
            .ok_or_else(|| EvalError::non_evaluable(callee))?;

        let arguments = node
            .child_by_field_name("arguments")
            .filter(|arguments| arguments.kind() == "arguments")
            .ok_or_else(|| EvalError::non_evaluable(node))?;

        let mut options = match significant_children(arguments).first() {
            None => IndexMap::new(),
            Some(argument) => match self.evaluate(*argument)? {
                GenericValue::Map(map) => map,
                other => {
                    return Err(EvalError::BuilderArgument {
                        builder: builder.to_string(),
                        found: other.kind(),
                        span: Span::of(*argument),
                    });
                }
            },
        };

        options.insert(
            TYPE_KEY.to_string(),
            GenericValue::String(builder.to_string()),
        );
        Ok(GenericValue::Map(options))
    }

    /// `X.Y` gives `Y`, a bare `X` gives `X`. The object of a member access
    /// must itself be a plain name path.
    fn builder_name(&self, callee: Node) -> Option<&'s str> {
        match callee.kind() {
            "identifier" => Some(self.text(callee)),
            "member_expression" => {
                let object = callee.child_by_field_name("object")?;
                let property = callee.child_by_field_name("property")?;
                (is_name_path(object) && property.kind() == "property_identifier")
                    .then(|| self.text(property))
            }
            _ => None,
        }
    }

    /// `-1` and `+1` are constants; every other operator is not.
    fn signed_number(&self, node: Node) -> Result<GenericValue, EvalError> {
        let operator = node
            .child_by_field_name("operator")
            .map(|operator| self.text(operator));
        let argument = node
            .child_by_field_name("argument")
            .filter(|argument| argument.kind() == "number");
        match (operator, argument) {
            (Some("-"), Some(argument)) => Ok(GenericValue::Number(-self.number(argument)?)),
            (Some("+"), Some(argument)) => Ok(GenericValue::Number(self.number(argument)?)),
            _ => Err(EvalError::non_evaluable(node)),
        }
    }

    fn number(&self, node: Node) -> Result<f64, EvalError> {
        let text = self.text(node);
        parse_number(text).ok_or_else(|| EvalError::InvalidLiteral {
            kind: "number",
            text: text.to_string(),
            span: Span::of(node),
        })
    }

    fn string(&self, node: Node) -> Result<String, EvalError> {
        let text = self.text(node);
        let inner = strip_delimiters(text);
        inner
            .and_then(unescape)
            .ok_or_else(|| EvalError::InvalidLiteral {
                kind: "string",
                text: text.to_string(),
                span: Span::of(node),
            })
    }

    fn template_string(&self, node: Node) -> Result<String, EvalError> {
        if let Some(substitution) = significant_children(node)
            .into_iter()
            .find(|child| child.kind() == "template_substitution")
        {
            return Err(EvalError::non_evaluable(substitution));
        }
        self.string(node)
    }
}

fn is_name_path(node: Node) -> bool {
    match node.kind() {
        "identifier" => true,
        "member_expression" => node
            .child_by_field_name("object")
            .is_some_and(is_name_path),
        _ => false,
    }
}

fn strip_delimiters(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let open = chars.next()?;
    let close = chars.next_back()?;
    (matches!(open, '"' | '\'' | '`') && open == close).then(|| chars.as_str())
}

/// Numeric literal text to a value. BigInt literals are rejected.
fn parse_number(text: &str) -> Option<f64> {
    if text.ends_with('n') {
        return None;
    }
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    let lower = digits.to_ascii_lowercase();
    let from_radix =
        |digits: &str, radix| u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    if let Some(hex) = lower.strip_prefix("0x") {
        from_radix(hex, 16)
    } else if let Some(octal) = lower.strip_prefix("0o") {
        from_radix(octal, 8)
    } else if let Some(binary) = lower.strip_prefix("0b") {
        from_radix(binary, 2)
    } else {
        lower.parse().ok()
    }
}

/// Decode escape sequences of a string literal body.
fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => {
                let code = take_hex(&mut chars, 2)?;
                out.push(char::from_u32(code)?);
            }
            'u' => {
                let code = unicode_escape(&mut chars)?;
                if (0xD800..0xDC00).contains(&code) {
                    // High surrogate: must be followed by `\uDC00`-`\uDFFF`.
                    if chars.next()? != '\\' || chars.next()? != 'u' {
                        return None;
                    }
                    let low = unicode_escape(&mut chars)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return None;
                    }
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined)?);
                } else {
                    out.push(char::from_u32(code)?);
                }
            }
            // Line continuation
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }
    Some(out)
}

fn unicode_escape(chars: &mut std::iter::Peekable<std::str::Chars>) -> Option<u32> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut code = 0u32;
        let mut len = 0;
        loop {
            let c = chars.next()?;
            if c == '}' {
                break;
            }
            code = code.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
            len += 1;
        }
        (len > 0 && code <= 0x10FFFF).then_some(code)
    } else {
        take_hex(chars, 4)
    }
}

fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars>, len: usize) -> Option<u32> {
    (0..len).try_fold(0u32, |code, _| Some(code * 16 + chars.next()?.to_digit(16)?))
}
