use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::source::GoPos;

/// Errors produced while turning an argv source file into an assertor file.
///
/// Every variant is returned as a value; nothing here is a panic. The only
/// hard failures in the crate are renderer-internal (an assertion kind with
/// no registered template), which signal a bug in the kind/template pairing
/// rather than bad input.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Field type expression outside identifier/pointer/selector/map/array.
    /// Aborts the whole file: an unsupported field must stop generation
    /// rather than silently emit wrong code.
    #[error("unsupported field type {kind} at {pos}")]
    UnsupportedFieldType { kind: String, pos: GoPos },

    #[error("bad struct tag {literal} at {pos}")]
    MalformedTag { literal: String, pos: GoPos },
}
