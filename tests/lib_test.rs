//! Library integration tests.

use gitgate::requirements::{parse_banner, MinimumVersion, VersionInfo, GIT_MARKER};
use gitgate::{GateError, GitGateError, VersionGate};
use std::io;
use std::path::Path;

#[test]
fn error_types_are_public() {
    let err: GitGateError = GateError::NotInstalled.into();
    assert!(err.to_string().contains("git not found"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gitgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use gitgate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["gitgate", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn validate_with_reports_each_outcome() {
    let gate = VersionGate::git();
    let run = |banner: &'static str| gate.validate_with(move |_: &Path| Ok(banner.to_string()));

    assert_eq!(run("git version 2.01.0 (Apple Git-1)"), Ok(()));
    assert_eq!(run("git version 3.5.0"), Ok(()));
    assert_eq!(
        run("git version 1.99.0"),
        Err(GateError::VersionTooLow {
            minimum: MinimumVersion::new(2, 1)
        })
    );
    assert!(matches!(
        run("git version 2.00.0"),
        Err(GateError::VersionTooLow { .. })
    ));
    assert_eq!(run("command not found"), Err(GateError::NotInstalled));
}

#[test]
fn execution_failure_is_not_installed() {
    let gate = VersionGate::git();
    let result = gate.validate_with(|_: &Path| Err(io::Error::from(io::ErrorKind::NotFound)));
    assert_eq!(result, Err(GateError::NotInstalled));
}

#[test]
fn validate_against_missing_binary() {
    let gate = VersionGate::new("/nonexistent/path/to/git");
    assert_eq!(gate.validate(), Err(GateError::NotInstalled));
    assert_eq!(gate.validate(), Err(GateError::NotInstalled));
}

#[test]
fn banner_parsing_is_public() {
    assert_eq!(
        parse_banner("git version 2.43.0", GIT_MARKER),
        Some(VersionInfo::new(2, 43))
    );
}
