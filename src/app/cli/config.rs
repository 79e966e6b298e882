//! TOML configuration file loading and merging with CLI arguments
//!
//! The default file lives at `<config dir>/SystemVersion/system-version.toml`.
//! An explicitly named file must exist; a missing default file is ignored.

use crate::core::logging::LogFormat;
use crate::plugin::api::{PluginError, PluginResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::args::Args;

const DEFAULT_MANIFEST: &str = "package.json";

/// Values accepted in the configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub manifest: Option<PathBuf>,
    #[serde(default)]
    pub html: Vec<PathBuf>,
    pub auto: Option<bool>,
    pub version: Option<String>,
    pub pretty: Option<bool>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

impl FileConfig {
    pub fn from_toml(contents: &str, origin: &Path) -> PluginResult<Self> {
        toml::from_str(contents).map_err(|e| PluginError::Configuration {
            message: format!("Error parsing configuration file {}: {}", origin.display(), e),
        })
    }

    /// Load the named file, or the default one when present
    pub fn load(config_file: Option<&Path>) -> PluginResult<Option<Self>> {
        let path = match config_file {
            Some(path) if !path.exists() => {
                return Err(PluginError::Configuration {
                    message: format!(
                        "The specified configuration file does not exist: {}",
                        path.display()
                    ),
                });
            }
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| PluginError::Configuration {
            message: format!("Error reading configuration file {}: {}", path.display(), e),
        })?;
        Self::from_toml(&contents, &path).map(Some)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("SystemVersion").join("system-version.toml"))
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub manifest: PathBuf,
    pub html: Vec<PathBuf>,
    pub auto: bool,
    pub version: Option<String>,
    pub pretty: bool,
    pub dry_run: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

impl Settings {
    /// Merge CLI arguments over file configuration.
    ///
    /// Relative manifest and HTML paths are resolved against `working_dir`.
    pub fn resolve(args: &Args, file: Option<FileConfig>, working_dir: &Path) -> PluginResult<Self> {
        let file = file.unwrap_or_default();

        let manifest = args
            .manifest
            .clone()
            .or(file.manifest)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));

        let html = if args.html.is_empty() {
            file.html
        } else {
            args.html.clone()
        };

        let log_format_name = args.log_format.clone().or(file.log_format);
        let log_format = match log_format_name.as_deref() {
            None => LogFormat::default(),
            Some(name) => LogFormat::parse(name).ok_or_else(|| PluginError::Configuration {
                message: format!("Unknown log format '{}' (expected text, ext or json)", name),
            })?,
        };

        let color = if args.color {
            Some(true)
        } else if args.no_color {
            Some(false)
        } else {
            file.color
        };

        Ok(Self {
            manifest: working_dir.join(manifest),
            html: html.into_iter().map(|p| working_dir.join(p)).collect(),
            auto: !args.no_auto && file.auto.unwrap_or(true),
            version: args.set_version.clone().or(file.version),
            pretty: args.pretty || file.pretty.unwrap_or(false),
            dry_run: args.dry_run,
            log_level: args.log_level.clone().or(file.log_level),
            log_format,
            log_file: args.log_file.clone().or(file.log_file),
            color,
        })
    }
}
