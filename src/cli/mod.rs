//! # CLI Module
//!
//! Thin command-line wrapper around the generator: argument and
//! environment handling, the output-file existence check, and the gofmt
//! pass. The core under [`crate::generator`] never touches any of these.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
