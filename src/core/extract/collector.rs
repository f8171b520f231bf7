//! AST traversal that collects candidate entries from one source file.
//!
//! Call expressions and marker elements are handed to the [`EntryBuilder`]
//! in pre-order, so candidates come out in source order. The first failure
//! stops the traversal and is returned with its source position.

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementName, JSXExpr, Module,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::config::ResolvedConfig;
use crate::core::data::{SourceContext, SourceLocation};
use crate::core::extract::{
    Argument, CandidateEntry, ElementAttribute, EntryBuilder, ExtractError, LiteralNode,
    LiteralShape,
};
use crate::issues::ExtractionFailure;

pub struct EntryCollector<'a> {
    builder: EntryBuilder<'a>,
    /// Path shown in diagnostics.
    file_path: &'a str,
    source_map: &'a SourceMap,
    entries: Vec<CandidateEntry>,
    failure: Option<ExtractionFailure>,
}

impl<'a> EntryCollector<'a> {
    /// `absolute_path` feeds entry references; `file_path` is used for diagnostics.
    pub fn new(
        config: &'a ResolvedConfig,
        file_path: &'a str,
        absolute_path: &'a str,
        source_map: &'a SourceMap,
    ) -> Self {
        Self {
            builder: EntryBuilder::new(config, absolute_path),
            file_path,
            source_map,
            entries: Vec::new(),
            failure: None,
        }
    }

    /// Main entry point: walk a module and return its candidates in source order.
    pub fn collect(mut self, module: &Module) -> Result<Vec<CandidateEntry>, ExtractionFailure> {
        self.visit_module(module);
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.entries),
        }
    }

    fn record(&mut self, result: Result<Option<CandidateEntry>, ExtractError>, pos: BytePos) {
        match result {
            Ok(Some(entry)) => self.entries.push(entry),
            Ok(None) => {}
            Err(error) => {
                self.failure = Some(ExtractionFailure::new(self.make_source_context(pos), error))
            }
        }
    }

    fn make_source_context(&self, pos: BytePos) -> SourceContext {
        let loc = self.source_map.lookup_char_pos(pos);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col.0 + 1),
            source_line,
        )
    }
}

/// Read a JSX attribute as a name and, when it is a plain string, its value.
///
/// `name="text"` and `name={"text"}` both count as literal.
fn element_attribute(attr: &JSXAttr) -> Option<ElementAttribute<'_>> {
    let JSXAttrName::Ident(name) = &attr.name else {
        return None;
    };

    let value = match &attr.value {
        Some(JSXAttrValue::Str(s)) => s.value.as_str(),
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => match expr.shape() {
                LiteralShape::String(value) => Some(value),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    };

    Some(ElementAttribute::new(name.sym.as_str(), value))
}

impl Visit for EntryCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.failure.is_some() {
            return;
        }

        if let Callee::Expr(expr) = &node.callee
            && let Expr::Ident(ident) = &**expr
        {
            let arguments: Vec<Argument<'_, Expr>> = node
                .args
                .iter()
                .map(|arg| match arg.spread {
                    Some(_) => Argument::Spread,
                    None => Argument::Node(&*arg.expr),
                })
                .collect();

            let result = self
                .builder
                .build_call_entry(ident.sym.as_str(), &arguments);
            self.record(result, node.span.lo);
        }

        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if self.failure.is_some() {
            return;
        }

        if let JSXElementName::Ident(ident) = &node.opening.name {
            let attributes = node.opening.attrs.iter().filter_map(|attr| match attr {
                JSXAttrOrSpread::JSXAttr(attr) => element_attribute(attr),
                JSXAttrOrSpread::SpreadElement(_) => None,
            });

            let result = self
                .builder
                .build_element_entry(ident.sym.as_str(), attributes);
            self.record(result, node.span.lo);
        }

        node.visit_children_with(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FunctionRole, FunctionSpec};
    use crate::core::parsers::jsx::parse_source;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    const FILE: &str = "/home/dev/project/src/app.jsx";

    fn collect_with(
        config: &ResolvedConfig,
        code: &str,
    ) -> Result<Vec<CandidateEntry>, ExtractionFailure> {
        let source_map = Arc::new(SourceMap::default());
        let parsed = parse_source(code.to_string(), "app.jsx", source_map.clone()).unwrap();
        EntryCollector::new(config, "src/app.jsx", FILE, &source_map).collect(&parsed.module)
    }

    fn collect(code: &str) -> Result<Vec<CandidateEntry>, ExtractionFailure> {
        collect_with(&ResolvedConfig::default(), code)
    }

    #[test]
    fn test_call_expressions() {
        let entries = collect(
            r#"
            _('Hello World!');
            _n('One', 'Many', 5);
            _c('Flag', 'Object');
            _nc('1 flag', 'Many flags', 5, 'Object');
            "#,
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                CandidateEntry::new("Hello World!"),
                CandidateEntry::new("One").with_plural("Many"),
                CandidateEntry::new("Flag").with_context("Object"),
                CandidateEntry::new("1 flag")
                    .with_plural("Many flags")
                    .with_context("Object"),
            ]
        );
    }

    #[test]
    fn test_concatenated_arguments() {
        let entries = collect(
            "_nc('1' + (' flag'), ('Many' + ' flags') + (', many' + ' flags'), 5, 'Physical' + ' Object')",
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                CandidateEntry::new("1 flag")
                    .with_plural("Many flags, many flags")
                    .with_context("Physical Object")
            ]
        );
    }

    #[test]
    fn test_member_callee_is_ignored() {
        let entries = collect("i18n._('Hello'); obj['_']('World');").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_marker_elements() {
        let entries = collect(
            r#"
            const view = (
                <span>
                    <LocalizedString id="Hello World!" />
                    <LocalizedString
                        id="You have just {cats} cat."
                        idPlural="You have so many {cats}!"
                        comment="On the browser page"
                        count={numCats}
                        cats={catsFormatted} />
                    <LocalizedString id={"Flag"} context="Physical" />
                </span>
            );
            "#,
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                CandidateEntry::new("Hello World!"),
                CandidateEntry::new("You have just {cats} cat.")
                    .with_plural("You have so many {cats}!")
                    .with_extracted("On the browser page"),
                CandidateEntry::new("Flag").with_context("Physical"),
            ]
        );
    }

    #[test]
    fn test_short_form_element_keeps_inner_call() {
        let entries = collect(r#"<LocalizedString i18n={_('Hey {name}!')} name='Bob' />"#).unwrap();
        assert_eq!(entries, vec![CandidateEntry::new("Hey {name}!")]);
    }

    #[test]
    fn test_source_order_is_preserved() {
        let entries = collect(r#"<LocalizedString id="outer" title={_('inner')} />; _('after');"#)
            .unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.msgid.as_str()).collect();
        assert_eq!(ids, vec!["outer", "inner", "after"]);
    }

    #[test]
    fn test_failure_location() {
        let failure = collect("const a = 1;\nconst b = _(label);\n").unwrap_err();

        assert_eq!(failure.context.file_path(), "src/app.jsx");
        assert_eq!(failure.context.line(), 2);
        assert_eq!(failure.context.col(), 11);
        assert_eq!(failure.context.source_line, "const b = _(label);");
        assert_eq!(
            failure.message(),
            "Function _ must have a String Literal or Binary Expression for argument #1, found Identifier instead!"
        );
    }

    #[test]
    fn test_failure_column_counts_characters() {
        let failure = collect("let a;\nx(\"你好\", _(name));\n").unwrap_err();

        assert_eq!(failure.context.line(), 2);
        assert_eq!(failure.context.col(), 9);
        assert_eq!(failure.context.source_line, "x(\"你好\", _(name));");
    }

    #[test]
    fn test_missing_identifier_failure() {
        let failure = collect(r#"<LocalizedString comment="nothing here" />"#).unwrap_err();
        assert_eq!(
            failure.error,
            ExtractError::MissingRequiredIdentifier {
                element: "LocalizedString".to_string(),
                id_attribute: "id".to_string(),
                short_form_attribute: "i18n".to_string(),
            }
        );
    }

    #[test]
    fn test_first_failure_stops_collection() {
        let failure = collect("_(a);\n_(b);").unwrap_err();
        assert_eq!(failure.context.line(), 1);
    }

    #[test]
    fn test_ignore_error_function() {
        let config = Config {
            function: Some(vec![
                FunctionSpec::new(FunctionRole::Singular, "_", 0).ignoring_errors(),
            ]),
            ..Default::default()
        }
        .resolve();

        let entries = collect_with(&config, "_(dynamic); _('static');").unwrap();
        assert_eq!(entries, vec![CandidateEntry::new("static")]);
    }

    #[test]
    fn test_references_use_absolute_path() {
        let config = Config {
            include_reference: true,
            base_dir: Some("project".to_string()),
            ..Default::default()
        }
        .resolve();

        let entries = collect_with(&config, "_('Hello');").unwrap();
        assert_eq!(entries[0].reference.as_deref(), Some("src/app.jsx"));
    }
}
