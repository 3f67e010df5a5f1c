#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use super::*;

fn parse(content: &str) -> SourceFile {
    parse_source(Path::new("argv.go"), content).unwrap()
}

#[test]
fn test_parse_package_clause() {
    let file = parse("package demo\n");
    assert_eq!(file.package, "demo");
    assert!(file.decls.is_empty());
}

#[test]
fn test_parse_imports() {
    let file = parse(
        "package demo\n\nimport (\n\t\"net\"\n\tjsonx \"encoding/json\"\n)\n\nimport \"fmt\"\n",
    );
    assert_eq!(file.imports.len(), 3);
    assert_eq!(file.imports[0].alias, None);
    assert_eq!(file.imports[0].path, "net");
    assert_eq!(file.imports[0].referencing_name(), "net");
    assert_eq!(file.imports[1].alias.as_deref(), Some("jsonx"));
    assert_eq!(file.imports[1].path, "encoding/json");
    assert_eq!(file.imports[1].referencing_name(), "jsonx");
    assert_eq!(file.imports[2].path, "fmt");
}

#[test]
fn test_parse_grouped_type_decls_in_order() {
    let file = parse("package demo\n\ntype (\n\tA int\n\tB string\n)\n\ntype C = A\n");
    assert_eq!(file.decls.len(), 3);
    let names: Vec<&str> = file
        .decls
        .iter()
        .map(|d| match d {
            TypeDecl::Named { name, .. } => name.as_str(),
            TypeDecl::Struct(s) => s.name.as_str(),
        })
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_parse_struct_fields() {
    let file = parse(
        "package demo\n\ntype FooArgv struct {\n\tID string `json:\"id\"`\n\tAge **int\n\tMeta map[string]string\n\tTags []string\n}\n",
    );
    let TypeDecl::Struct(decl) = &file.decls[0] else {
        panic!("expected struct decl");
    };
    assert_eq!(decl.name, "FooArgv");
    assert_eq!(decl.fields.len(), 4);

    assert_eq!(decl.fields[0].names, vec!["ID"]);
    assert!(matches!(&decl.fields[0].ty, TypeExpr::Ident { name } if name == "string"));
    let tag = decl.fields[0].tag.as_ref().unwrap();
    assert_eq!(tag.raw, "`json:\"id\"`");

    let TypeExpr::Pointer(inner) = &decl.fields[1].ty else {
        panic!("expected pointer");
    };
    assert!(matches!(inner.as_ref(), TypeExpr::Pointer(_)));

    assert!(matches!(decl.fields[2].ty, TypeExpr::Map));
    assert!(matches!(decl.fields[3].ty, TypeExpr::Array));
}

#[test]
fn test_parse_selector_and_unsupported_types() {
    let file = parse(
        "package demo\n\ntype FooArgv struct {\n\tIP *net.IP\n\tCallback func() error\n}\n",
    );
    let TypeDecl::Struct(decl) = &file.decls[0] else {
        panic!("expected struct decl");
    };
    let TypeExpr::Pointer(inner) = &decl.fields[0].ty else {
        panic!("expected pointer");
    };
    assert!(
        matches!(inner.as_ref(), TypeExpr::Selector { package, name } if package == "net" && name == "IP")
    );
    assert!(matches!(&decl.fields[1].ty, TypeExpr::Other { kind } if kind == "function_type"));
}

#[test]
fn test_parse_embedded_field_has_no_names() {
    let file = parse("package demo\n\ntype FooArgv struct {\n\tState\n}\n");
    let TypeDecl::Struct(decl) = &file.decls[0] else {
        panic!("expected struct decl");
    };
    assert!(decl.fields[0].names.is_empty());
}

#[test]
fn test_annotation_comment_range() {
    let src = "package demo\n\n// tag=query\ntype FooArgv struct /* tag=json */ {\n\tID string\n}\n";
    let file = parse(src);
    let TypeDecl::Struct(decl) = &file.decls[0] else {
        panic!("expected struct decl");
    };
    let in_range: Vec<&Comment> = file
        .comments
        .iter()
        .filter(|c| c.start_byte >= decl.annotation_start && c.end_byte <= decl.annotation_end)
        .collect();
    // The leading line comment is outside the struct-keyword..brace range.
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].text, "/* tag=json */");
}

#[test]
fn test_parse_syntax_error() {
    let err = parse_source(Path::new("bad.go"), "package demo\n\ntype struct {\n").unwrap_err();
    assert!(err.to_string().contains("bad.go"));
}

#[test]
fn test_load_package_collects_same_package_siblings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("fooArgv.go"),
        "package demo\n\ntype FooArgv struct {\n\tWhen Timestamp\n}\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("timestamp.go"),
        "package demo\n\ntype Timestamp int\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("other.go"), "package other\n").unwrap();

    let package = load_package(&dir.path().join("fooArgv.go")).unwrap();
    assert_eq!(package.target.package, "demo");
    assert_eq!(package.siblings.len(), 1);
    assert_eq!(
        package.siblings[0].path.file_name().and_then(|s| s.to_str()),
        Some("timestamp.go")
    );
    assert_eq!(package.files().len(), 2);
}

#[test]
fn test_type_table_local_chain() {
    let file = parse("package demo\n\ntype Timestamp int\n\ntype When Timestamp\n");
    let table = TypeTable::build(&[&file]);
    let expr = TypeExpr::Ident {
        name: "When".to_string(),
    };
    assert_eq!(
        table.candidates(&expr),
        vec!["When".to_string(), "demo.When".to_string(), "int".to_string()]
    );
}

#[test]
fn test_type_table_cycle_stops() {
    let file = parse("package demo\n\ntype A B\n\ntype B A\n");
    let table = TypeTable::build(&[&file]);
    let expr = TypeExpr::Ident {
        name: "A".to_string(),
    };
    assert_eq!(
        table.candidates(&expr),
        vec!["A".to_string(), "demo.A".to_string()]
    );
}

#[test]
fn test_type_table_unknown_ident_is_literal_only() {
    let file = parse("package demo\n");
    let table = TypeTable::build(&[&file]);
    let expr = TypeExpr::Ident {
        name: "Mystery".to_string(),
    };
    assert_eq!(table.candidates(&expr), vec!["Mystery".to_string()]);
}

#[test]
fn test_type_table_selector_candidates() {
    let file = parse("package demo\n\nimport (\n\t\"net\"\n\t\"github.com/Bofry/arg\"\n)\n");
    let table = TypeTable::build(&[&file]);

    let ip = TypeExpr::Selector {
        package: "net".to_string(),
        name: "IP".to_string(),
    };
    assert_eq!(
        table.candidates(&ip),
        vec!["IP".to_string(), "net.IP".to_string()]
    );

    let arg_ip = TypeExpr::Selector {
        package: "arg".to_string(),
        name: "IP".to_string(),
    };
    assert_eq!(
        table.candidates(&arg_ip),
        vec![
            "IP".to_string(),
            "github.com/Bofry/arg.IP".to_string(),
            "net.IP".to_string()
        ]
    );

    let arg_number = TypeExpr::Selector {
        package: "arg".to_string(),
        name: "Number".to_string(),
    };
    assert_eq!(
        table.candidates(&arg_number),
        vec![
            "Number".to_string(),
            "github.com/Bofry/arg.Number".to_string(),
            "encoding/json.Number".to_string()
        ]
    );

    let unknown = TypeExpr::Selector {
        package: "mystery".to_string(),
        name: "Thing".to_string(),
    };
    assert_eq!(table.candidates(&unknown), vec!["Thing".to_string()]);
}

#[test]
fn test_type_table_local_struct_has_no_underlying() {
    let file = parse("package demo\n\ntype State struct {\n\tRemark string\n}\n");
    let table = TypeTable::build(&[&file]);
    let expr = TypeExpr::Ident {
        name: "State".to_string(),
    };
    assert_eq!(
        table.candidates(&expr),
        vec!["State".to_string(), "demo.State".to_string()]
    );
}
