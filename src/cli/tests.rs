#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn test_parse_generate_args() {
    let cli = Cli::try_parse_from(["argvgen", "generate", "--target", "fooArgv.go", "--force"])
        .unwrap();
    let Commands::Generate {
        target,
        force,
        no_format,
    } = cli.command
    else {
        panic!("expected generate command");
    };
    assert_eq!(target, PathBuf::from("fooArgv.go"));
    assert!(force);
    assert!(!no_format);
}

#[test]
fn test_parse_generate_defaults() {
    let cli = Cli::try_parse_from(["argvgen", "generate", "-t", "fooArgv.go"]).unwrap();
    let Commands::Generate {
        force, no_format, ..
    } = cli.command
    else {
        panic!("expected generate command");
    };
    assert!(!force);
    assert!(!no_format);
}

#[test]
fn test_parse_inspect_args() {
    let cli = Cli::try_parse_from(["argvgen", "inspect", "--target", "fooArgv.go"]).unwrap();
    let Commands::Inspect { target } = cli.command else {
        panic!("expected inspect command");
    };
    assert_eq!(target, PathBuf::from("fooArgv.go"));
}

#[test]
fn test_target_falls_back_to_gofile_env() {
    // both halves touch the same env var, so keep them in one test
    std::env::remove_var("GOFILE");
    assert!(Cli::try_parse_from(["argvgen", "generate"]).is_err());

    std::env::set_var("GOFILE", "envArgv.go");
    let cli = Cli::try_parse_from(["argvgen", "generate"]).unwrap();
    std::env::remove_var("GOFILE");
    let Commands::Generate { target, .. } = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(target, PathBuf::from("envArgv.go"));
}
