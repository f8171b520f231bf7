use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// File extensions scanned for translatable strings.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Pick the swc syntax for a file based on its extension.
///
/// Plain JavaScript files are parsed with JSX enabled, since JSX in `.js`
/// files is common. `.ts`/`.mts`/`.cts` files are parsed without TSX so that
/// angle-bracket type assertions keep working.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse JS/JSX/TS/TSX source code into an AST.
///
/// Accepts a shared SourceMap so files can be parsed on separate threads.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        Ok(ParsedSource { module, source_map })
    })
}

/// Parse a single expression statement, for tests that need swc nodes.
#[cfg(test)]
pub(crate) fn parse_expression(code: &str) -> Box<swc_ecma_ast::Expr> {
    use swc_ecma_ast::{ModuleItem, Stmt};

    let parsed = parse_source(
        code.to_string(),
        "expression.jsx",
        Arc::new(SourceMap::default()),
    )
    .unwrap();

    match parsed.module.body.into_iter().next() {
        Some(ModuleItem::Stmt(Stmt::Expr(stmt))) => stmt.expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}
