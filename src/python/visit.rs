//! AST traversal for `rustpython_parser` syntax trees.
//!
//! Modelled on `syn::visit`: a trait whose default methods delegate to
//! free `walk_*` functions, so a visitor overrides only the nodes it cares
//! about and still reaches every nested statement and expression.

use rustpython_parser::ast;

pub trait Visit {
    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &ast::Expr) {
        walk_expr(self, expr);
    }

    fn visit_body(&mut self, body: &[ast::Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }

    fn visit_comprehension(&mut self, comp: &ast::Comprehension) {
        walk_comprehension(self, comp);
    }

    fn visit_except_handler(&mut self, handler: &ast::ExceptHandler) {
        walk_except_handler(self, handler);
    }

    fn visit_match_case(&mut self, case: &ast::MatchCase) {
        walk_match_case(self, case);
    }

    fn visit_pattern(&mut self, pattern: &ast::Pattern) {
        walk_pattern(self, pattern);
    }

    fn visit_arguments(&mut self, args: &ast::Arguments) {
        walk_arguments(self, args);
    }
}

pub fn walk_stmt<V: Visit + ?Sized>(v: &mut V, stmt: &ast::Stmt) {
    match stmt {
        ast::Stmt::FunctionDef(def) => {
            for dec in &def.decorator_list {
                v.visit_expr(dec);
            }
            v.visit_arguments(&def.args);
            v.visit_body(&def.body);
        }
        ast::Stmt::AsyncFunctionDef(def) => {
            for dec in &def.decorator_list {
                v.visit_expr(dec);
            }
            v.visit_arguments(&def.args);
            v.visit_body(&def.body);
        }
        ast::Stmt::ClassDef(def) => {
            for dec in &def.decorator_list {
                v.visit_expr(dec);
            }
            for base in &def.bases {
                v.visit_expr(base);
            }
            for kw in &def.keywords {
                v.visit_expr(&kw.value);
            }
            v.visit_body(&def.body);
        }
        ast::Stmt::Return(ret) => {
            if let Some(value) = &ret.value {
                v.visit_expr(value);
            }
        }
        ast::Stmt::Delete(del) => {
            for target in &del.targets {
                v.visit_expr(target);
            }
        }
        ast::Stmt::Assign(assign) => {
            for target in &assign.targets {
                v.visit_expr(target);
            }
            v.visit_expr(&assign.value);
        }
        ast::Stmt::AugAssign(assign) => {
            v.visit_expr(&assign.target);
            v.visit_expr(&assign.value);
        }
        ast::Stmt::AnnAssign(assign) => {
            v.visit_expr(&assign.target);
            v.visit_expr(&assign.annotation);
            if let Some(value) = &assign.value {
                v.visit_expr(value);
            }
        }
        ast::Stmt::For(stmt) => {
            v.visit_expr(&stmt.target);
            v.visit_expr(&stmt.iter);
            v.visit_body(&stmt.body);
            v.visit_body(&stmt.orelse);
        }
        ast::Stmt::AsyncFor(stmt) => {
            v.visit_expr(&stmt.target);
            v.visit_expr(&stmt.iter);
            v.visit_body(&stmt.body);
            v.visit_body(&stmt.orelse);
        }
        ast::Stmt::While(stmt) => {
            v.visit_expr(&stmt.test);
            v.visit_body(&stmt.body);
            v.visit_body(&stmt.orelse);
        }
        ast::Stmt::If(stmt) => {
            v.visit_expr(&stmt.test);
            v.visit_body(&stmt.body);
            v.visit_body(&stmt.orelse);
        }
        ast::Stmt::With(stmt) => {
            for item in &stmt.items {
                v.visit_expr(&item.context_expr);
                if let Some(vars) = &item.optional_vars {
                    v.visit_expr(vars);
                }
            }
            v.visit_body(&stmt.body);
        }
        ast::Stmt::AsyncWith(stmt) => {
            for item in &stmt.items {
                v.visit_expr(&item.context_expr);
                if let Some(vars) = &item.optional_vars {
                    v.visit_expr(vars);
                }
            }
            v.visit_body(&stmt.body);
        }
        ast::Stmt::Match(stmt) => {
            v.visit_expr(&stmt.subject);
            for case in &stmt.cases {
                v.visit_match_case(case);
            }
        }
        ast::Stmt::Raise(stmt) => {
            if let Some(exc) = &stmt.exc {
                v.visit_expr(exc);
            }
            if let Some(cause) = &stmt.cause {
                v.visit_expr(cause);
            }
        }
        ast::Stmt::Try(stmt) => {
            v.visit_body(&stmt.body);
            for handler in &stmt.handlers {
                v.visit_except_handler(handler);
            }
            v.visit_body(&stmt.orelse);
            v.visit_body(&stmt.finalbody);
        }
        ast::Stmt::TryStar(stmt) => {
            v.visit_body(&stmt.body);
            for handler in &stmt.handlers {
                v.visit_except_handler(handler);
            }
            v.visit_body(&stmt.orelse);
            v.visit_body(&stmt.finalbody);
        }
        ast::Stmt::Assert(stmt) => {
            v.visit_expr(&stmt.test);
            if let Some(msg) = &stmt.msg {
                v.visit_expr(msg);
            }
        }
        ast::Stmt::Expr(stmt) => v.visit_expr(&stmt.value),
        // Import, Global, Nonlocal, Pass, Break, Continue carry no nested
        // statements or expressions.
        _ => {}
    }
}

pub fn walk_expr<V: Visit + ?Sized>(v: &mut V, expr: &ast::Expr) {
    match expr {
        ast::Expr::BoolOp(op) => {
            for value in &op.values {
                v.visit_expr(value);
            }
        }
        ast::Expr::NamedExpr(named) => {
            v.visit_expr(&named.target);
            v.visit_expr(&named.value);
        }
        ast::Expr::BinOp(op) => {
            v.visit_expr(&op.left);
            v.visit_expr(&op.right);
        }
        ast::Expr::UnaryOp(op) => v.visit_expr(&op.operand),
        ast::Expr::Lambda(lambda) => {
            v.visit_arguments(&lambda.args);
            v.visit_expr(&lambda.body);
        }
        ast::Expr::IfExp(ifexp) => {
            v.visit_expr(&ifexp.test);
            v.visit_expr(&ifexp.body);
            v.visit_expr(&ifexp.orelse);
        }
        ast::Expr::Dict(dict) => {
            for key in dict.keys.iter().flatten() {
                v.visit_expr(key);
            }
            for value in &dict.values {
                v.visit_expr(value);
            }
        }
        ast::Expr::Set(set) => {
            for elt in &set.elts {
                v.visit_expr(elt);
            }
        }
        ast::Expr::ListComp(comp) => {
            v.visit_expr(&comp.elt);
            for generator in &comp.generators {
                v.visit_comprehension(generator);
            }
        }
        ast::Expr::SetComp(comp) => {
            v.visit_expr(&comp.elt);
            for generator in &comp.generators {
                v.visit_comprehension(generator);
            }
        }
        ast::Expr::DictComp(comp) => {
            v.visit_expr(&comp.key);
            v.visit_expr(&comp.value);
            for generator in &comp.generators {
                v.visit_comprehension(generator);
            }
        }
        ast::Expr::GeneratorExp(comp) => {
            v.visit_expr(&comp.elt);
            for generator in &comp.generators {
                v.visit_comprehension(generator);
            }
        }
        ast::Expr::Await(await_expr) => v.visit_expr(&await_expr.value),
        ast::Expr::Yield(yield_expr) => {
            if let Some(value) = &yield_expr.value {
                v.visit_expr(value);
            }
        }
        ast::Expr::YieldFrom(yield_from) => v.visit_expr(&yield_from.value),
        ast::Expr::Compare(compare) => {
            v.visit_expr(&compare.left);
            for comparator in &compare.comparators {
                v.visit_expr(comparator);
            }
        }
        ast::Expr::Call(call) => {
            v.visit_expr(&call.func);
            for arg in &call.args {
                v.visit_expr(arg);
            }
            for kw in &call.keywords {
                v.visit_expr(&kw.value);
            }
        }
        ast::Expr::FormattedValue(fmt) => {
            v.visit_expr(&fmt.value);
            if let Some(spec) = &fmt.format_spec {
                v.visit_expr(spec);
            }
        }
        ast::Expr::JoinedStr(joined) => {
            for value in &joined.values {
                v.visit_expr(value);
            }
        }
        ast::Expr::Attribute(attr) => v.visit_expr(&attr.value),
        ast::Expr::Subscript(sub) => {
            v.visit_expr(&sub.value);
            v.visit_expr(&sub.slice);
        }
        ast::Expr::Starred(starred) => v.visit_expr(&starred.value),
        ast::Expr::List(list) => {
            for elt in &list.elts {
                v.visit_expr(elt);
            }
        }
        ast::Expr::Tuple(tuple) => {
            for elt in &tuple.elts {
                v.visit_expr(elt);
            }
        }
        ast::Expr::Slice(slice) => {
            if let Some(lower) = &slice.lower {
                v.visit_expr(lower);
            }
            if let Some(upper) = &slice.upper {
                v.visit_expr(upper);
            }
            if let Some(step) = &slice.step {
                v.visit_expr(step);
            }
        }
        // Name and Constant are leaves.
        _ => {}
    }
}

pub fn walk_comprehension<V: Visit + ?Sized>(v: &mut V, comp: &ast::Comprehension) {
    v.visit_expr(&comp.target);
    v.visit_expr(&comp.iter);
    for cond in &comp.ifs {
        v.visit_expr(cond);
    }
}

pub fn walk_except_handler<V: Visit + ?Sized>(v: &mut V, handler: &ast::ExceptHandler) {
    let ast::ExceptHandler::ExceptHandler(handler) = handler;
    if let Some(type_) = &handler.type_ {
        v.visit_expr(type_);
    }
    v.visit_body(&handler.body);
}

pub fn walk_match_case<V: Visit + ?Sized>(v: &mut V, case: &ast::MatchCase) {
    v.visit_pattern(&case.pattern);
    if let Some(guard) = &case.guard {
        v.visit_expr(guard);
    }
    v.visit_body(&case.body);
}

pub fn walk_pattern<V: Visit + ?Sized>(v: &mut V, pattern: &ast::Pattern) {
    match pattern {
        ast::Pattern::MatchValue(value) => v.visit_expr(&value.value),
        ast::Pattern::MatchSequence(seq) => {
            for p in &seq.patterns {
                v.visit_pattern(p);
            }
        }
        ast::Pattern::MatchMapping(mapping) => {
            for key in &mapping.keys {
                v.visit_expr(key);
            }
            for p in &mapping.patterns {
                v.visit_pattern(p);
            }
        }
        ast::Pattern::MatchClass(class) => {
            v.visit_expr(&class.cls);
            for p in &class.patterns {
                v.visit_pattern(p);
            }
            for p in &class.kwd_patterns {
                v.visit_pattern(p);
            }
        }
        ast::Pattern::MatchAs(as_pattern) => {
            if let Some(p) = &as_pattern.pattern {
                v.visit_pattern(p);
            }
        }
        ast::Pattern::MatchOr(or_pattern) => {
            for p in &or_pattern.patterns {
                v.visit_pattern(p);
            }
        }
        // MatchSingleton and MatchStar are leaves.
        _ => {}
    }
}

pub fn walk_arguments<V: Visit + ?Sized>(v: &mut V, args: &ast::Arguments) {
    for arg in args
        .posonlyargs
        .iter()
        .chain(&args.args)
        .chain(&args.kwonlyargs)
    {
        if let Some(default) = &arg.default {
            v.visit_expr(default);
        }
    }
}
