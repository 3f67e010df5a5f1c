use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::model::AssertorFile;
use super::templates::Renderer;

/// Suffix of generated file names: `fooArgv.go` → `fooArgvAssertor_gen.go`.
pub const GENERATED_FILE_SUFFIX: &str = "Assertor_gen.go";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

/// Output path for a target source file: the target's stem plus the
/// generated-file suffix, in the same directory.
pub fn output_path(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let name = format!("{stem}{GENERATED_FILE_SUFFIX}");
    match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

/// Write the rendered assertor file, refusing to overwrite an existing one
/// unless forced. An existing file means "already generated" and is a
/// skip, not an error.
///
/// Rendering completes in memory before the output file is created, so a
/// failing field can never leave a half-written file behind.
pub fn write_assertor_file(
    path: &Path,
    renderer: &Renderer,
    file: &AssertorFile,
    force: bool,
) -> anyhow::Result<WriteOutcome> {
    if path.exists() && !force {
        println!("{} (skipped)", path.display());
        return Ok(WriteOutcome::Skipped);
    }
    let rendered = renderer.render(file);
    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    println!("{} (generated)", path.display());
    Ok(WriteOutcome::Written)
}
