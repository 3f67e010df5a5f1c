//! Go source intake for the generator.
//!
//! This module owns the input side of the pipeline: driving the
//! tree-sitter Go grammar over one package directory, reducing the syntax
//! tree to the declaration model the collector consumes, and answering
//! type-signature lookups the way a type checker's tables would.

mod load;
mod resolve;
mod types;

#[cfg(test)]
mod tests;

pub use load::{load_package, parse_file, parse_source};
pub use resolve::TypeTable;
pub use types::{
    Comment, GoPos, ImportSpec, PackageSource, SourceFile, StructDecl, StructField, TagLiteral,
    TypeDecl, TypeExpr,
};
