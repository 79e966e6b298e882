//! CLI argument parsing tests

use clap::Parser;
use std::path::PathBuf;
use system_version::app::cli::args::Args;

#[test]
fn test_full_argument_set() {
    let args = Args::try_parse_from([
        "system-version",
        "--manifest",
        "web/package.json",
        "--html",
        "web/dist/index.html",
        "--no-auto",
        "--set-version",
        "2.0.0",
        "--pretty",
        "--dry-run",
        "--log-level",
        "debug",
        "--log-format",
        "ext",
    ])
    .unwrap();

    assert_eq!(args.manifest, Some(PathBuf::from("web/package.json")));
    assert_eq!(args.html, vec![PathBuf::from("web/dist/index.html")]);
    assert!(args.no_auto);
    assert_eq!(args.set_version.as_deref(), Some("2.0.0"));
    assert!(args.pretty);
    assert!(args.dry_run);
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("ext"));
}

#[test]
fn test_short_flags() {
    let args = Args::try_parse_from(["system-version", "-m", "p.json", "-n", "-s", "1.2.3"]).unwrap();
    assert_eq!(args.manifest, Some(PathBuf::from("p.json")));
    assert!(args.dry_run);
    assert_eq!(args.set_version.as_deref(), Some("1.2.3"));
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Args::try_parse_from(["system-version", "--log-level", "loud"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_argument_rejected() {
    let result = Args::try_parse_from(["system-version", "--bump-major"]);
    assert!(result.is_err());
}
