//! Thin layer over `rustpython_parser`: parsing and name resolution helpers.

pub mod visit;

use crate::core::errors::Error;
use rustpython_parser::ast;

/// Parse a Python source unit into a module AST.
pub fn parse_module(content: &str, source_path: &str) -> Result<ast::Mod, Error> {
    rustpython_parser::parse(content, rustpython_parser::Mode::Module, source_path).map_err(|e| {
        Error::Parse {
            file: source_path.into(),
            message: format!("{e:?}"),
        }
    })
}

/// Resolve an identifier or dotted path to its source spelling
/// (`Name("Base")` → `"Base"`, `pkg.mod.Base` → `"pkg.mod.Base"`).
pub fn expr_to_name(expr: &ast::Expr) -> Option<String> {
    match expr {
        ast::Expr::Name(name) => Some(name.id.to_string()),
        ast::Expr::Attribute(attr) => {
            let base = expr_to_name(&attr.value)?;
            Some(format!("{}.{}", base, attr.attr))
        }
        _ => None,
    }
}

/// The identifier of a bare-name expression, if it is one.
pub fn bare_name(expr: &ast::Expr) -> Option<&str> {
    match expr {
        ast::Expr::Name(name) => Some(name.id.as_str()),
        _ => None,
    }
}
