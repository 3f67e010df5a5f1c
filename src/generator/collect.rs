use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::classify::classify;
use super::model::{
    AssertionKind, AssertorFile, AssertorType, ValueAssertion, ASSERTOR_TYPE_SUFFIX,
};
use super::tags::{annotation_tag_names, extract_identifier};
use crate::error::GenerateError;
use crate::source::{Comment, SourceFile, StructDecl, StructField, TypeDecl, TypeExpr, TypeTable};

/// Target-type naming pattern: `Argv` at the end of the name, or an
/// `ArgvXxx`-style suffix opened by an upper-case letter.
static ARGV_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Argv[[:upper:]]?\w*$").expect("invalid argv type pattern")
});

/// Whether a struct name selects the type for generation.
pub fn is_argv_type_name(name: &str) -> bool {
    ARGV_TYPE_RE.is_match(name)
}

/// Walk one parsed file and build its assertor model.
///
/// Matching structs are collected in declaration order; non-struct
/// declarations and non-matching names are skipped, never errored. Any
/// field the resolver refuses aborts the whole file.
pub fn collect_file(file: &SourceFile, table: &TypeTable) -> Result<AssertorFile, GenerateError> {
    let mut types = Vec::new();
    for decl in &file.decls {
        let TypeDecl::Struct(decl) = decl else {
            continue;
        };
        if !is_argv_type_name(&decl.name) {
            continue;
        }
        debug!(name = %decl.name, "collecting argv type");
        types.push(collect_type(decl, table, &file.comments)?);
    }
    Ok(AssertorFile {
        package_name: file.package.clone(),
        imports: Vec::new(),
        types,
    })
}

fn collect_type(
    decl: &StructDecl,
    table: &TypeTable,
    comments: &[Comment],
) -> Result<AssertorType, GenerateError> {
    let tagnames = annotation_tag_names(decl, comments);
    let name = format!("{}{}", decl.name, ASSERTOR_TYPE_SUFFIX);
    let assertions = decl
        .fields
        .iter()
        .map(|field| resolve_field(&name, field, table, &tagnames))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AssertorType {
        name,
        source_type_name: decl.name.clone(),
        assertions,
    })
}

/// Turn one field declaration into its assertion record: peel pointer
/// layers one at a time into the star marker, resolve candidate signatures
/// for the named type underneath, classify, and extract the tag identifier.
fn resolve_field(
    type_name: &str,
    field: &StructField,
    table: &TypeTable,
    tagnames: &[String],
) -> Result<ValueAssertion, GenerateError> {
    let Some(field_name) = field.names.first() else {
        return Err(GenerateError::UnsupportedFieldType {
            kind: "embedded field".to_string(),
            pos: field.ty_pos,
        });
    };

    let mut star = String::new();
    let mut expr = &field.ty;
    let (field_type, kind) = loop {
        match expr {
            TypeExpr::Pointer(inner) => {
                star.push('*');
                expr = inner.as_ref();
            }
            TypeExpr::Ident { name } => {
                let signatures = table.candidates(expr);
                break (name.clone(), classify(&signatures, !star.is_empty()));
            }
            TypeExpr::Selector { package, name } => {
                let signatures = table.candidates(expr);
                break (
                    format!("{package}.{name}"),
                    classify(&signatures, !star.is_empty()),
                );
            }
            TypeExpr::Map | TypeExpr::Array => break (String::new(), AssertionKind::Value),
            TypeExpr::Other { kind } => {
                return Err(GenerateError::UnsupportedFieldType {
                    kind: kind.clone(),
                    pos: field.ty_pos,
                });
            }
        }
    };

    let tag = extract_identifier(field.tag.as_ref(), tagnames)?;

    Ok(ValueAssertion {
        type_name: type_name.to_string(),
        name: field_name.clone(),
        tag,
        kind,
        field_type,
        star,
        skipped: false,
    })
}
