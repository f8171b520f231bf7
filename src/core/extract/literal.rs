//! Compile-time string extraction from call arguments.
//!
//! Accepts string literals and `+` concatenations of them, nested to any
//! depth: `_("Hello, " + ("big" + " world"))` extracts `"Hello, big world"`.

use swc_ecma_ast::{Expr, Lit};

use crate::core::extract::ExtractError;

/// Shape of a syntax node as far as literal extraction is concerned.
pub enum LiteralShape<'a, N> {
    /// A string literal and its cooked value.
    String(&'a str),
    /// A binary expression, e.g. `left + right`.
    Binary {
        operator: &'a str,
        left: &'a N,
        right: &'a N,
    },
    /// Anything else, labelled with its node kind (e.g. `Identifier`).
    Other(&'static str),
}

/// Node-shape predicates supplied by the syntax tree that hosts the occurrence.
pub trait LiteralNode: Sized {
    fn shape(&self) -> LiteralShape<'_, Self>;
}

/// One positional argument of a call-site.
#[derive(Debug, Clone, Copy)]
pub enum Argument<'a, N> {
    Node(&'a N),
    /// `...rest`; never a literal.
    Spread,
}

/// Extract the compile-time string value of `node`.
///
/// `argument_index` is zero-based; errors report it 1-based together with
/// the name of the function being called.
pub fn extract_literal<N: LiteralNode>(
    node: &N,
    argument_index: usize,
    function: &str,
) -> Result<String, ExtractError> {
    match node.shape() {
        LiteralShape::String(value) => Ok(value.to_string()),
        LiteralShape::Binary {
            operator,
            left,
            right,
        } => {
            if operator != "+" {
                return Err(ExtractError::InvalidConcatenationOperator {
                    function: function.to_string(),
                    position: argument_index + 1,
                    operator: operator.to_string(),
                });
            }
            let mut value = extract_literal(left, argument_index, function)?;
            value.push_str(&extract_literal(right, argument_index, function)?);
            Ok(value)
        }
        LiteralShape::Other(kind) => Err(malformed(function, argument_index, kind)),
    }
}

/// Extract the argument at `argument_index`, which may be missing or a spread.
pub fn extract_argument<N: LiteralNode>(
    arguments: &[Argument<'_, N>],
    argument_index: usize,
    function: &str,
) -> Result<String, ExtractError> {
    match arguments.get(argument_index) {
        Some(Argument::Node(node)) => extract_literal(*node, argument_index, function),
        Some(Argument::Spread) => Err(malformed(function, argument_index, "SpreadElement")),
        None => Err(malformed(function, argument_index, "undefined")),
    }
}

fn malformed(function: &str, argument_index: usize, found: &str) -> ExtractError {
    ExtractError::MalformedLiteralArgument {
        function: function.to_string(),
        position: argument_index + 1,
        found: found.to_string(),
    }
}

impl LiteralNode for Expr {
    fn shape(&self) -> LiteralShape<'_, Self> {
        match self {
            // The JS grammar keeps no node for parentheses; swc does.
            Expr::Paren(paren) => paren.expr.shape(),
            Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                Some(value) => LiteralShape::String(value),
                None => LiteralShape::Other("StringLiteral"),
            },
            Expr::Bin(bin) => LiteralShape::Binary {
                operator: bin.op.as_str(),
                left: &bin.left,
                right: &bin.right,
            },
            other => LiteralShape::Other(expr_kind(other)),
        }
    }
}

/// ESTree-style node kind label used in diagnostics.
pub fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::This(_) => "ThisExpression",
        Expr::Array(_) => "ArrayExpression",
        Expr::Object(_) => "ObjectExpression",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Member(_) | Expr::SuperProp(_) => "MemberExpression",
        Expr::Cond(_) => "ConditionalExpression",
        Expr::Call(_) => "CallExpression",
        Expr::New(_) => "NewExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::Ident(_) => "Identifier",
        Expr::Lit(lit) => match lit {
            Lit::Str(_) => "StringLiteral",
            Lit::Bool(_) => "BooleanLiteral",
            Lit::Null(_) => "NullLiteral",
            Lit::Num(_) => "NumericLiteral",
            Lit::BigInt(_) => "BigIntLiteral",
            Lit::Regex(_) => "RegExpLiteral",
            _ => "Literal",
        },
        Expr::Tpl(_) => "TemplateLiteral",
        Expr::TaggedTpl(_) => "TaggedTemplateExpression",
        Expr::Arrow(_) => "ArrowFunctionExpression",
        Expr::Class(_) => "ClassExpression",
        Expr::Yield(_) => "YieldExpression",
        Expr::Await(_) => "AwaitExpression",
        Expr::Paren(_) => "ParenthesizedExpression",
        Expr::JSXElement(_) => "JSXElement",
        Expr::JSXFragment(_) => "JSXFragment",
        Expr::TsAs(_) => "TSAsExpression",
        Expr::TsNonNull(_) => "TSNonNullExpression",
        Expr::TsSatisfies(_) => "TSSatisfiesExpression",
        Expr::OptChain(_) => "OptionalExpression",
        _ => "Expression",
    }
}
