use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::generator::{
    collect_file, format_output, output_path, write_assertor_file, AssertorFile, Renderer,
    WriteOutcome,
};
use crate::source::{load_package, TypeTable};

/// Command-line interface for argvgen
///
/// Wraps the generator the way `go:generate` expects: the target path comes
/// from a flag or the `GOFILE` environment variable, and an existing
/// generated file is skipped rather than overwritten.
#[derive(Parser)]
#[command(name = "argvgen")]
#[command(about = "Generate Bofry/arg assertors from annotated Go argv structs", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for argvgen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the assertor file next to an argv source file
    Generate {
        /// Path to the argv source file (defaults to $GOFILE under go:generate)
        #[arg(short, long, env = "GOFILE")]
        target: PathBuf,

        /// Overwrite an existing generated file
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Skip the gofmt pass over the generated file
        #[arg(long, default_value_t = false)]
        no_format: bool,
    },
    /// Print the collected assertor model as JSON without writing files
    Inspect {
        /// Path to the argv source file (defaults to $GOFILE under go:generate)
        #[arg(short, long, env = "GOFILE")]
        target: PathBuf,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            target,
            force,
            no_format,
        } => generate(target, *force, *no_format),
        Commands::Inspect { target } => inspect(target),
    }
}

fn generate(target: &Path, force: bool, no_format: bool) -> anyhow::Result<()> {
    println!("{}", target.display());

    let outfile = output_path(target);
    if outfile.exists() && !force {
        println!("{} (skipped)", outfile.display());
        return Ok(());
    }

    let file = collect_target(target)?;
    let renderer = Renderer::new();
    let outcome = write_assertor_file(&outfile, &renderer, &file, force)?;

    if outcome == WriteOutcome::Written && !no_format {
        if let Err(e) = format_output(&outfile) {
            eprintln!("gofmt failed: {e}");
        }
    }
    Ok(())
}

fn inspect(target: &Path) -> anyhow::Result<()> {
    let file = collect_target(target)?;
    println!("{}", serde_json::to_string_pretty(&file)?);
    Ok(())
}

/// Parse the target's package directory and collect the target file's model.
fn collect_target(target: &Path) -> anyhow::Result<AssertorFile> {
    let package = load_package(target)?;
    let table = TypeTable::build(&package.files());
    let file = collect_file(&package.target, &table)?;
    Ok(file)
}
