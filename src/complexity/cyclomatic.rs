//! McCabe cyclomatic complexity for Python method bodies.

use crate::python::visit::{self, Visit};
use rustpython_parser::ast;

/// Complexity of one method body, starting from the base value of 1.
/// Nested constructs are counted independently; the traversal is
/// exhaustive, including nested functions and lambda bodies.
pub fn calculate_cyclomatic(body: &[ast::Stmt]) -> u32 {
    let mut visitor = CyclomaticVisitor { complexity: 1 };
    visitor.visit_body(body);
    visitor.complexity
}

struct CyclomaticVisitor {
    complexity: u32,
}

impl Visit for CyclomaticVisitor {
    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::If(_)
            | ast::Stmt::For(_)
            | ast::Stmt::AsyncFor(_)
            | ast::Stmt::While(_) => self.complexity += 1,
            // One for the match construct plus one per case arm.
            ast::Stmt::Match(match_stmt) => {
                self.complexity += 1 + match_stmt.cases.len() as u32;
            }
            // try/with headers are not branch points; handlers are
            // counted in visit_except_handler.
            _ => {}
        }
        visit::walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &ast::Expr) {
        match expr {
            ast::Expr::IfExp(_) => self.complexity += 1,
            // N chained operands under one and/or add N-1 decision points.
            ast::Expr::BoolOp(bool_op) => {
                self.complexity += bool_op.values.len().saturating_sub(1) as u32;
            }
            // Lambdas, yields, awaits, and walrus assignments add nothing.
            _ => {}
        }
        visit::walk_expr(self, expr);
    }

    fn visit_except_handler(&mut self, handler: &ast::ExceptHandler) {
        self.complexity += 1;
        visit::walk_except_handler(self, handler);
    }

    fn visit_comprehension(&mut self, comp: &ast::Comprehension) {
        self.complexity += comp.ifs.len() as u32;
        visit::walk_comprehension(self, comp);
    }
}
