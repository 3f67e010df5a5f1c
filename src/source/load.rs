use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tree_sitter::{Node, Parser};

use super::types::{
    Comment, GoPos, ImportSpec, PackageSource, SourceFile, StructDecl, StructField, TagLiteral,
    TypeDecl, TypeExpr,
};
use crate::error::GenerateError;

/// Parse a single Go source file into the declaration model.
pub fn parse_file(path: &Path) -> Result<SourceFile, GenerateError> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(path, &content)
}

/// Parse Go source text. The path is only used for error reporting.
pub fn parse_source(path: &Path, content: &str) -> Result<SourceFile, GenerateError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| GenerateError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let tree = parser
        .parse(content, None)
        .ok_or_else(|| GenerateError::Parse {
            path: path.to_path_buf(),
            message: "parser produced no tree".to_string(),
        })?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(GenerateError::Parse {
            path: path.to_path_buf(),
            message: format!("syntax error at {}", first_error_pos(root)),
        });
    }

    let mut package = String::new();
    let mut imports = Vec::new();
    let mut decls = Vec::new();
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_clause" => {
                if let Some(ident) = child_of_kind(node, "package_identifier") {
                    package = text(ident, content).to_string();
                }
            }
            "import_declaration" => collect_imports(node, content, &mut imports),
            "type_declaration" => collect_type_decls(node, content, &mut decls),
            _ => {}
        }
    }

    let mut comments = Vec::new();
    walk_comments(root, content, &mut comments);

    debug!(
        path = %path.display(),
        package = %package,
        decls = decls.len(),
        "parsed source file"
    );

    Ok(SourceFile {
        path: path.to_path_buf(),
        package,
        imports,
        decls,
        comments,
    })
}

/// Parse the target file plus every other `.go` file in its directory.
///
/// Sibling files feed the type table; only those sharing the target's
/// package clause are kept, and ones that fail to parse are skipped with a
/// warning rather than aborting the run.
pub fn load_package(target: &Path) -> Result<PackageSource, GenerateError> {
    let target_file = parse_file(target)?;

    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .map_err(|source| GenerateError::Read {
            path: dir.clone(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("go"))
        .collect();
    paths.sort();

    let mut siblings = Vec::new();
    for path in paths {
        if path.file_name() == target.file_name() {
            continue;
        }
        match parse_file(&path) {
            Ok(file) if file.package == target_file.package => siblings.push(file),
            Ok(_) => {}
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unparsable package file")
            }
        }
    }

    Ok(PackageSource {
        target: target_file,
        siblings,
    })
}

fn collect_imports(node: Node, src: &str, out: &mut Vec<ImportSpec>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => {
                let alias = child
                    .child_by_field_name("name")
                    .map(|n| text(n, src).to_string());
                let path = child
                    .child_by_field_name("path")
                    .map(|n| unquote_path(text(n, src)))
                    .unwrap_or_default();
                out.push(ImportSpec { alias, path });
            }
            "import_spec_list" => collect_imports(child, src, out),
            _ => {}
        }
    }
}

fn collect_type_decls(node: Node, src: &str, out: &mut Vec<TypeDecl>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if !matches!(child.kind(), "type_spec" | "type_alias") {
            continue;
        }
        let name = match child.child_by_field_name("name") {
            Some(n) => text(n, src).to_string(),
            None => continue,
        };
        let ty = match child.child_by_field_name("type") {
            Some(n) => n,
            None => continue,
        };
        if ty.kind() == "struct_type" {
            out.push(TypeDecl::Struct(struct_decl(name, ty, src)));
        } else {
            out.push(TypeDecl::Named {
                name,
                ty: type_expr(ty, src),
            });
        }
    }
}

fn struct_decl(name: String, node: Node, src: &str) -> StructDecl {
    let field_list = child_of_kind(node, "field_declaration_list");
    let (fields, annotation_end) = match field_list {
        Some(list) => (collect_fields(list, src), list.start_byte()),
        None => (Vec::new(), node.end_byte()),
    };
    StructDecl {
        name,
        fields,
        annotation_start: node.start_byte(),
        annotation_end,
    }
}

fn collect_fields(list: Node, src: &str) -> Vec<StructField> {
    let mut fields = Vec::new();
    let mut cursor = list.walk();
    for node in list.named_children(&mut cursor) {
        if node.kind() != "field_declaration" {
            continue;
        }
        let mut name_cursor = node.walk();
        let names: Vec<String> = node
            .children_by_field_name("name", &mut name_cursor)
            .map(|n| text(n, src).to_string())
            .collect();
        let ty = match node.child_by_field_name("type") {
            Some(n) => n,
            None => continue,
        };
        let tag = node.child_by_field_name("tag").map(|n| TagLiteral {
            raw: text(n, src).to_string(),
            pos: pos(n),
        });
        fields.push(StructField {
            names,
            ty: type_expr(ty, src),
            ty_pos: pos(ty),
            tag,
        });
    }
    fields
}

fn type_expr(node: Node, src: &str) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::Ident {
            name: text(node, src).to_string(),
        },
        "qualified_type" => {
            let package = node
                .child_by_field_name("package")
                .map(|n| text(n, src).to_string())
                .unwrap_or_default();
            let name = node
                .child_by_field_name("name")
                .map(|n| text(n, src).to_string())
                .unwrap_or_default();
            TypeExpr::Selector { package, name }
        }
        "pointer_type" => match first_named_non_comment(node) {
            Some(inner) => TypeExpr::Pointer(Box::new(type_expr(inner, src))),
            None => TypeExpr::Other {
                kind: "pointer_type".to_string(),
            },
        },
        "map_type" => TypeExpr::Map,
        "slice_type" | "array_type" => TypeExpr::Array,
        other => TypeExpr::Other {
            kind: other.to_string(),
        },
    }
}

fn walk_comments(node: Node, src: &str, out: &mut Vec<Comment>) {
    if node.kind() == "comment" {
        out.push(Comment {
            text: text(node, src).to_string(),
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
        });
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk_comments(child, src, out);
    }
}

fn child_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

fn first_named_non_comment(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|c| c.kind() != "comment");
    found
}

fn first_error_pos(root: Node) -> GoPos {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return pos(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    pos(root)
}

fn text<'a>(node: Node, src: &'a str) -> &'a str {
    &src[node.start_byte()..node.end_byte()]
}

fn pos(node: Node) -> GoPos {
    let point = node.start_position();
    GoPos {
        line: point.row + 1,
        column: point.column + 1,
    }
}

/// Import paths carry no escapes in practice; stripping the delimiters is
/// all `gofmt`-clean source needs.
fn unquote_path(raw: &str) -> String {
    raw.trim_matches(|c| c == '"' || c == '`').to_string()
}
