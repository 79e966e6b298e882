//! Command-line arguments
//!
//! Anything set here takes precedence over the configuration file.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "system-version")]
#[command(about = "Bump the build version, stamp it into HTML and persist it to the manifest")]
#[command(version, long_version = crate::core::version::long_version())]
#[command(after_help = " * can be specified multiple times")]
pub struct Args {
    /// Manifest holding the version field (default: ./package.json)
    #[arg(short = 'm', long = "manifest", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// HTML files to stamp in place*
    #[arg(short = 'H', long = "html", value_name = "FILE", action = ArgAction::Append)]
    pub html: Vec<PathBuf>,

    /// Use --set-version instead of the manifest version as the starting point
    #[arg(long = "no-auto")]
    pub no_auto: bool,

    /// Version to bump from when --no-auto is given
    #[arg(short = 's', long = "set-version", value_name = "VERSION")]
    pub set_version: Option<String>,

    /// Write the manifest pretty-printed
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Print the next version without touching any file
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(short = 'g', long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,
}
