//! CLI TOML configuration tests

use clap::Parser;
use std::path::{Path, PathBuf};
use system_version::app::cli::args::Args;
use system_version::app::cli::config::{FileConfig, Settings};

#[test]
fn test_config_file_supplies_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("system-version.toml");
    std::fs::write(
        &config_path,
        "manifest = \"app/package.json\"\nauto = false\nversion = \"7.0.0\"\n",
    )
    .unwrap();

    let args = Args::try_parse_from(["system-version"]).unwrap();
    let file = FileConfig::load(Some(config_path.as_path())).unwrap();
    let settings = Settings::resolve(&args, file, Path::new("/proj")).unwrap();

    assert_eq!(settings.manifest, PathBuf::from("/proj/app/package.json"));
    assert!(!settings.auto);
    assert_eq!(settings.version.as_deref(), Some("7.0.0"));
}

#[test]
fn test_cli_pretty_wins_over_file() {
    let file = FileConfig {
        pretty: Some(false),
        ..FileConfig::default()
    };
    let args = Args::try_parse_from(["system-version", "--pretty"]).unwrap();
    let settings = Settings::resolve(&args, Some(file), Path::new("/proj")).unwrap();
    assert!(settings.pretty);
}

#[test]
fn test_invalid_toml_is_configuration_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("broken.toml");
    std::fs::write(&config_path, "auto = ").unwrap();

    let error = FileConfig::load(Some(config_path.as_path())).unwrap_err();
    assert!(error.to_string().contains("Error parsing configuration file"));
}
