use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// 1-based source position inside a Go file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoPos {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for GoPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A comment with its raw text (markers included) and byte extent.
///
/// Byte offsets are kept so the collector can locate the annotation comment
/// sitting between a struct keyword and its field-list opening brace.
#[derive(Debug, Clone)]
pub struct Comment {
    pub text: String,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// One import spec: `alias "path"` or just `"path"`.
#[derive(Debug, Clone)]
pub struct ImportSpec {
    pub alias: Option<String>,
    pub path: String,
}

impl ImportSpec {
    /// The identifier this import is referenced by in source: the declared
    /// alias when present, otherwise the final path segment.
    pub fn referencing_name(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }
}

/// A field's type expression, reduced to the shapes the generator handles.
///
/// Anything else is carried as [`TypeExpr::Other`] with the grammar node
/// kind, so the field resolver can report what it refused.
#[derive(Debug, Clone)]
pub enum TypeExpr {
    Ident { name: String },
    Selector { package: String, name: String },
    Pointer(Box<TypeExpr>),
    Map,
    Array,
    Other { kind: String },
}

/// A raw struct-tag literal, delimiters included.
#[derive(Debug, Clone)]
pub struct TagLiteral {
    pub raw: String,
    pub pos: GoPos,
}

/// One struct field declaration. A single declaration may carry several
/// names (`A, B string`); an embedded field carries none.
#[derive(Debug, Clone)]
pub struct StructField {
    pub names: Vec<String>,
    pub ty: TypeExpr,
    pub ty_pos: GoPos,
    pub tag: Option<TagLiteral>,
}

/// A struct type declaration, plus the byte range between the `struct`
/// keyword and the field-list opening brace where the type-level tag
/// annotation comment may sit.
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<StructField>,
    pub annotation_start: usize,
    pub annotation_end: usize,
}

/// A top-level type declaration.
#[derive(Debug, Clone)]
pub enum TypeDecl {
    Struct(StructDecl),
    /// `type X Y` and `type X = Y` alike; only the right-hand shape matters
    /// for signature resolution.
    Named { name: String, ty: TypeExpr },
}

/// One parsed Go source file, reduced to what the generator consumes.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub package: String,
    pub imports: Vec<ImportSpec>,
    pub decls: Vec<TypeDecl>,
    pub comments: Vec<Comment>,
}

/// The target file plus the sibling files of its package directory.
#[derive(Debug)]
pub struct PackageSource {
    pub target: SourceFile,
    pub siblings: Vec<SourceFile>,
}

impl PackageSource {
    /// All files of the package, target first.
    pub fn files(&self) -> Vec<&SourceFile> {
        std::iter::once(&self.target).chain(self.siblings.iter()).collect()
    }
}
