use std::collections::{HashMap, HashSet};

use super::types::{SourceFile, TypeDecl, TypeExpr};

/// Exported aliases of the runtime validation package. The generator has no
/// Go type checker to consult, so the handful of re-exports the runtime
/// declares are resolved from this fixed table instead.
const RUNTIME_ALIASES: &[(&str, &str, &str)] = &[
    ("github.com/Bofry/arg", "IP", "net.IP"),
    ("github.com/Bofry/arg", "Number", "encoding/json.Number"),
];

/// Signature lookup tables for one package, built from its parsed files.
///
/// Stands in for type-checker output: package-local named types resolve
/// through their declaration chain, imported names resolve to their
/// package-path-qualified form. When the table knows nothing about an
/// identifier only its literal text is produced, and classification
/// degrades to a lexical match.
#[derive(Debug)]
pub struct TypeTable {
    package: String,
    named: HashMap<String, TypeExpr>,
    structs: HashSet<String>,
    imports: HashMap<String, String>,
}

impl TypeTable {
    /// Build the table from the package's files; the first file's package
    /// clause and imports name the package.
    pub fn build(files: &[&SourceFile]) -> TypeTable {
        let package = files
            .first()
            .map(|f| f.package.clone())
            .unwrap_or_default();
        let mut named = HashMap::new();
        let mut structs = HashSet::new();
        let mut imports = HashMap::new();
        for file in files {
            for import in &file.imports {
                imports
                    .entry(import.referencing_name().to_string())
                    .or_insert_with(|| import.path.clone());
            }
            for decl in &file.decls {
                match decl {
                    TypeDecl::Struct(s) => {
                        structs.insert(s.name.clone());
                    }
                    TypeDecl::Named { name, ty } => {
                        named.entry(name.clone()).or_insert_with(|| ty.clone());
                    }
                }
            }
        }
        TypeTable {
            package,
            named,
            structs,
            imports,
        }
    }

    /// Candidate type signatures for a named type expression, in the order
    /// they are to be tested: literal identifier text first, then the
    /// package-qualified resolved name, then the underlying type reached by
    /// unwrapping local `type X Y` declarations.
    pub fn candidates(&self, expr: &TypeExpr) -> Vec<String> {
        let mut out = Vec::new();
        match expr {
            TypeExpr::Ident { name } => {
                out.push(name.clone());
                if self.structs.contains(name) {
                    out.push(format!("{}.{}", self.package, name));
                } else if self.named.contains_key(name) {
                    out.push(format!("{}.{}", self.package, name));
                    if let Some(underlying) = self.underlying(name) {
                        out.push(underlying);
                    }
                }
            }
            TypeExpr::Selector { package, name } => {
                out.push(name.clone());
                if let Some(path) = self.imports.get(package) {
                    let qualified = format!("{path}.{name}");
                    let alias = RUNTIME_ALIASES
                        .iter()
                        .find(|(p, n, _)| *p == path.as_str() && *n == name.as_str())
                        .map(|(_, _, target)| (*target).to_string());
                    out.push(qualified);
                    if let Some(alias) = alias {
                        out.push(alias);
                    }
                }
            }
            _ => {}
        }
        out
    }

    /// Follow a local declaration chain to its terminal shape, rendered as
    /// source text. Stops at the first name not declared in this package.
    fn underlying(&self, name: &str) -> Option<String> {
        let mut seen = HashSet::new();
        let mut current = self.named.get(name)?;
        loop {
            match current {
                TypeExpr::Ident { name } => {
                    if !seen.insert(name.clone()) {
                        return None;
                    }
                    match self.named.get(name) {
                        Some(next) => current = next,
                        None => return Some(name.clone()),
                    }
                }
                TypeExpr::Selector { package, name } => {
                    return self
                        .imports
                        .get(package)
                        .map(|path| format!("{path}.{name}"));
                }
                _ => return None,
            }
        }
    }
}
