use std::path::Path;
use std::process::Command;

/// Run `gofmt -w` over a generated file.
///
/// The binary can be overridden through `ARGVGEN_GOFMT_BIN` so tests can
/// stub it without mutating `PATH`. Callers treat a failure as a warning:
/// the rendered file is already gofmt-normalized by template construction.
pub fn format_output(file: &Path) -> anyhow::Result<()> {
    let gofmt_bin = std::env::var("ARGVGEN_GOFMT_BIN").unwrap_or_else(|_| "gofmt".to_string());

    let mut cmd = Command::new(gofmt_bin);
    cmd.arg("-w").arg(file);
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("gofmt failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::sync::{Mutex, OnceLock};

    // Serialize environment mutations to avoid test races
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn run_with_stub(script: &str) -> anyhow::Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("gofmt-stub");
        fs::write(&stub, script).unwrap();
        let mut perms = fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&stub, perms).unwrap();

        let file = dir.path().join("argvAssertor_gen.go");
        fs::write(&file, "package demo\n").unwrap();

        let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
        let old_bin = env::var("ARGVGEN_GOFMT_BIN").ok();
        env::set_var("ARGVGEN_GOFMT_BIN", &stub);
        let res = format_output(&file);
        match old_bin {
            Some(v) => env::set_var("ARGVGEN_GOFMT_BIN", v),
            None => env::remove_var("ARGVGEN_GOFMT_BIN"),
        }
        res
    }

    #[test]
    fn test_format_output_ok() {
        assert!(run_with_stub("#!/bin/sh\nexit 0\n").is_ok());
    }

    #[test]
    fn test_format_output_error() {
        assert!(run_with_stub("#!/bin/sh\nexit 1\n").is_err());
    }
}
