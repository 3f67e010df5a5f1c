//! # argvgen
//!
//! **argvgen** is a code generator for the [Bofry/arg] runtime validation
//! package: it reads an annotated Go source file, finds struct types whose
//! names match the `Argv` naming pattern, and emits a sibling
//! `*Assertor_gen.go` file with one assertor type per matching struct and
//! one validation method per field.
//!
//! [Bofry/arg]: https://github.com/Bofry/arg
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`source`]** - Go source intake: tree-sitter parsing of the target
//!   file and its package directory, plus type-signature resolution for
//!   field types (package-local `type X Y` chains and the runtime's
//!   re-exported aliases)
//! - **[`generator`]** - the core pipeline: struct collection, assertion
//!   kind classification, struct-tag extraction, and template rendering
//! - **[`cli`]** - the `go:generate`-friendly command wrapper
//!
//! ## Generation Flow
//!
//! ```text
//! argvgen generate --target fooArgv.go
//!     │
//!     ├── source::load_package      parse fooArgv.go + package siblings
//!     ├── source::TypeTable         signature candidates per field type
//!     ├── generator::collect_file   argv structs → AssertorFile model
//!     ├── generator::Renderer       kind-selected templates → Go source
//!     └── fooArgvAssertor_gen.go    written once, then gofmt -w
//! ```
//!
//! Generation is a pure, deterministic, one-shot transform: no state
//! crosses invocations, rendering the same model twice yields identical
//! bytes, and a field the resolver refuses aborts the file before any
//! output is written.
//!
//! ## Usage
//!
//! ```bash
//! argvgen generate --target ./internal/app/requestArgv.go
//! ```
//!
//! or from a source annotation:
//!
//! ```go
//! //go:generate argvgen generate
//! type RequestArgv struct /* tag=json */ {
//!     ID string `json:"id"`
//! }
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod source;

pub use error::GenerateError;
