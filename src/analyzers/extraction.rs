//! Declaration extraction: walks parsed modules and turns every accepted
//! class declaration into a [`ClassRecord`] on the shared model builder.

use crate::complexity::calculate_cyclomatic;
use crate::model::{ClassRecord, ModelBuilder, SELF_IDENT};
use crate::python::visit::{self, Visit};
use crate::python::{bare_name, expr_to_name};
use rustpython_parser::ast;
use std::collections::BTreeSet;
use std::path::Path;

/// Extract every class declared in `module` (at any nesting level) into the
/// builder, tagging each with `file` for the per-file grouping.
pub fn extract_module(builder: &mut ModelBuilder, module: &ast::Mod, file: &Path) {
    if let ast::Mod::Module(module) = module {
        let mut extractor = DeclarationExtractor { builder, file };
        extractor.visit_body(&module.body);
    }
}

struct DeclarationExtractor<'a> {
    builder: &'a mut ModelBuilder,
    file: &'a Path,
}

impl Visit for DeclarationExtractor<'_> {
    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        if let ast::Stmt::ClassDef(class_def) = stmt {
            self.extract_class(class_def);
        }
        // Keep walking: classes may be nested in functions or other classes.
        visit::walk_stmt(self, stmt);
    }
}

impl DeclarationExtractor<'_> {
    fn extract_class(&mut self, class_def: &ast::StmtClassDef) {
        let name = class_def.name.to_string();
        if !self.builder.accepts(&name) {
            return;
        }

        let bases = class_def.bases.iter().filter_map(expr_to_name).collect();
        let mut record = ClassRecord::new(name, bases);

        for item in &class_def.body {
            match item {
                ast::Stmt::FunctionDef(def) => {
                    extract_method(&mut record, def.name.as_str(), &def.body);
                }
                ast::Stmt::AsyncFunctionDef(def) => {
                    extract_method(&mut record, def.name.as_str(), &def.body);
                }
                ast::Stmt::Assign(assign) => {
                    for target in &assign.targets {
                        if let Some(attr) = bare_name(target) {
                            record.attributes.insert(attr.to_string());
                        }
                    }
                }
                ast::Stmt::AnnAssign(assign) => {
                    if let Some(attr) = bare_name(&assign.target) {
                        record.attributes.insert(attr.to_string());
                    }
                }
                _ => {}
            }
        }

        self.builder.insert(record, self.file);
    }
}

fn extract_method(record: &mut ClassRecord, method_name: &str, body: &[ast::Stmt]) {
    record.methods.insert(method_name.to_string());

    let mut visitor = MethodBodyVisitor::default();
    visitor.visit_body(body);

    record
        .method_calls
        .insert(method_name.to_string(), visitor.calls);
    record
        .method_attributes
        .insert(method_name.to_string(), visitor.self_attributes);
    record.called_classes.extend(visitor.receivers);
    record.attributes.extend(visitor.self_assignments);
    record
        .method_complexity
        .insert(method_name.to_string(), calculate_cyclomatic(body));
}

/// Collects calls, self-qualified attribute accesses, call receivers, and
/// self-assignment targets from one method body.
#[derive(Default)]
struct MethodBodyVisitor {
    calls: BTreeSet<String>,
    self_attributes: BTreeSet<String>,
    receivers: BTreeSet<String>,
    self_assignments: BTreeSet<String>,
}

impl MethodBodyVisitor {
    fn record_self_assignment(&mut self, target: &ast::Expr) {
        if let ast::Expr::Attribute(attr) = target {
            if bare_name(&attr.value) == Some(SELF_IDENT) {
                self.self_assignments.insert(attr.attr.to_string());
            }
        }
    }
}

impl Visit for MethodBodyVisitor {
    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::Assign(assign) => {
                for target in &assign.targets {
                    self.record_self_assignment(target);
                }
            }
            ast::Stmt::AnnAssign(assign) => self.record_self_assignment(&assign.target),
            ast::Stmt::AugAssign(assign) => self.record_self_assignment(&assign.target),
            _ => {}
        }
        visit::walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &ast::Expr) {
        match expr {
            ast::Expr::Call(call) => match call.func.as_ref() {
                ast::Expr::Name(name) => {
                    self.calls.insert(name.id.to_string());
                }
                ast::Expr::Attribute(attr) => {
                    // A bare name before the dot is a candidate coupled
                    // class (or `self`, filtered out by CBO later).
                    if let Some(receiver) = bare_name(&attr.value) {
                        self.receivers.insert(receiver.to_string());
                    }
                    self.calls.insert(attr.attr.to_string());
                }
                _ => {}
            },
            ast::Expr::Attribute(attr) => {
                if bare_name(&attr.value) == Some(SELF_IDENT) {
                    self.self_attributes.insert(attr.attr.to_string());
                }
            }
            _ => {}
        }
        visit::walk_expr(self, expr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassModel;
    use crate::python::parse_module;
    use indoc::indoc;

    fn model_of(code: &str) -> ClassModel {
        let mut builder = ModelBuilder::new();
        let module = parse_module(code, "<test>").expect("failed to parse snippet");
        extract_module(&mut builder, &module, Path::new("test.py"));
        builder.freeze()
    }

    fn record<'a>(model: &'a ClassModel, name: &str) -> &'a ClassRecord {
        model
            .classes()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| r)
            .unwrap_or_else(|| panic!("class {name} not extracted"))
    }

    #[test]
    fn extracts_methods_and_complexities() {
        let model = model_of(indoc! {"
            class Calculator:
                def add(self, a, b):
                    return a + b

                def div(self, a, b):
                    if b == 0:
                        return None
                    return a / b
        "});
        let calc = record(&model, "Calculator");
        assert_eq!(calc.methods.len(), 2);
        assert_eq!(calc.method_complexity["add"], 1);
        assert_eq!(calc.method_complexity["div"], 2);
    }

    #[test]
    fn records_class_body_and_self_assigned_attributes() {
        let model = model_of(indoc! {"
            class Config:
                DEFAULT_LIMIT = 100
                timeout: int = 30

                def __init__(self):
                    self.retries = 3
        "});
        let config = record(&model, "Config");
        assert!(config.attributes.contains("DEFAULT_LIMIT"));
        assert!(config.attributes.contains("timeout"));
        assert!(config.attributes.contains("retries"));
    }

    #[test]
    fn records_calls_receivers_and_self_attributes() {
        let model = model_of(indoc! {"
            class User:
                def __init__(self):
                    self.helper = Helper()

                def use_helper(self):
                    return self.helper.help_method()
        "});
        let user = record(&model, "User");
        assert!(user.method_calls["__init__"].contains("Helper"));
        assert!(user.method_calls["use_helper"].contains("help_method"));
        assert!(user.method_attributes["use_helper"].contains("helper"));
        // `self` lands in receivers; CBO strips it later.
        assert!(user.called_classes.contains("self"));
    }

    #[test]
    fn qualified_receiver_is_recorded() {
        let model = model_of(indoc! {"
            class Caller:
                def go(self):
                    return Registry.lookup('x')
        "});
        let caller = record(&model, "Caller");
        assert!(caller.called_classes.contains("Registry"));
        assert!(caller.method_calls["go"].contains("lookup"));
    }

    #[test]
    fn nested_classes_are_discovered() {
        let model = model_of(indoc! {"
            class Outer:
                class Inner:
                    def ping(self):
                        return 1

                def outer_method(self):
                    return 2
        "});
        assert_eq!(model.len(), 2);
        let outer = record(&model, "Outer");
        let inner = record(&model, "Inner");
        assert_eq!(outer.methods.len(), 1);
        assert_eq!(inner.methods.len(), 1);
    }

    #[test]
    fn class_filter_skips_unlisted_classes_entirely() {
        let mut builder = ModelBuilder::with_class_filter(Some(vec!["Kept".to_string()]));
        let code = indoc! {"
            class Kept(Dropped):
                pass

            class Dropped:
                pass
        "};
        let module = parse_module(code, "<test>").unwrap();
        extract_module(&mut builder, &module, Path::new("test.py"));
        let model = builder.freeze();

        assert_eq!(model.len(), 1);
        assert!(model.contains_class("Kept"));
        // Dropped was never modelled, so the declared base adds no edge.
        assert_eq!(model.graph().inheritance_depth("Kept"), 0);
    }

    #[test]
    fn dotted_bases_are_recorded_verbatim() {
        let model = model_of("class Store(collections.abc.Mapping):\n    pass\n");
        let store = record(&model, "Store");
        assert_eq!(store.bases, vec!["collections.abc.Mapping"]);
    }
}
