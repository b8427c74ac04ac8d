//! Import extraction from Python sources using tree-sitter.

use crate::error::{AnalysisError, Result};
use std::collections::BTreeSet;
use tree_sitter::{Node, Parser};

/// Top-level modules imported anywhere in a Python source.
///
/// Relative and `__future__` imports are skipped. Imports nested in
/// functions, `try`/`if` blocks or `;`-joined statements all count.
pub fn top_level_imports(source: &str) -> Result<BTreeSet<String>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| AnalysisError::PythonParse(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AnalysisError::PythonParse("parser returned no tree".to_string()))?;

    let bytes = source.as_bytes();
    let mut modules = BTreeSet::new();
    let mut pending = vec![tree.root_node()];
    while let Some(node) = pending.pop() {
        match node.kind() {
            "import_statement" => {
                let mut cursor = node.walk();
                for name in node.children_by_field_name("name", &mut cursor) {
                    if let Some(dotted) = imported_path(name, bytes) {
                        insert_root(&mut modules, dotted);
                    }
                }
            }
            "import_from_statement" => {
                // relative_import nodes (`from . import x`) are never a requirement
                if let Some(module) = node
                    .child_by_field_name("module_name")
                    .filter(|module| module.kind() == "dotted_name")
                {
                    if let Ok(dotted) = module.utf8_text(bytes) {
                        insert_root(&mut modules, dotted);
                    }
                }
            }
            "string" | "comment" | "future_import_statement" => {}
            _ => {
                let mut cursor = node.walk();
                pending.extend(node.children(&mut cursor));
            }
        }
    }

    modules.remove("__future__");
    Ok(modules)
}

/// `a.b` for both `import a.b` and `import a.b as c`.
fn imported_path<'a>(name: Node<'_>, source: &'a [u8]) -> Option<&'a str> {
    let path = match name.kind() {
        "aliased_import" => name.child_by_field_name("name")?,
        _ => name,
    };
    path.utf8_text(source).ok()
}

fn insert_root(modules: &mut BTreeSet<String>, dotted: &str) {
    if let Some(root) = dotted
        .split('.')
        .map(str::trim)
        .next()
        .filter(|root| !root.is_empty())
    {
        modules.insert(root.to_string());
    }
}
