//! # Generator Module
//!
//! The generator turns a parsed argv source file into a generated assertor
//! file. The pipeline is a strict sequence:
//!
//! ```text
//! Go source → source::load → collect → AssertorFile → Renderer → output file
//! ```
//!
//! - **[`collect_file`]** walks a file's type declarations, matches struct
//!   names against the argv naming pattern, and resolves every field into a
//!   value assertion (kind, tag identifier, pointer-depth marker).
//! - **[`classify`]** maps candidate type signatures to one member of the
//!   closed [`AssertionKind`] set.
//! - **[`extract_identifier`]** applies the struct-tag precedence rules:
//!   the `^` field-level override first, then the type-level candidate keys
//!   declared in the `tag=...` annotation comment.
//! - **[`Renderer`]** selects one template per assertion kind and writes the
//!   generated file; output order mirrors declaration order exactly.
//! - **[`write_assertor_file`]** and **[`format_output`]** are the output
//!   glue: skip-existing, write-once, then `gofmt`.

mod classify;
mod collect;
mod emit;
mod format;
mod model;
mod tags;
mod templates;


pub use classify::classify;
pub use collect::{collect_file, is_argv_type_name};
pub use emit::{output_path, write_assertor_file, WriteOutcome, GENERATED_FILE_SUFFIX};
pub use format::format_output;
pub use model::{
    AssertionKind, AssertorFile, AssertorType, ImportDirective, ValueAssertion,
    ASSERTOR_TYPE_SUFFIX,
};
pub use tags::{
    annotation_tag_names, comment_text, extract_identifier, parse_tag_names, StructTag,
    FIELD_TAG_DIRECTIVE, STRUCT_TAG_DIRECTIVE,
};
pub use templates::Renderer;
