//! CLI host: resolves settings, then runs one build with the version plugin

use crate::app::cli::args::Args;
use crate::app::cli::config::{FileConfig, Settings};
use crate::core::logging::init_logging;
use crate::core::version::get_api_version;
use crate::host::{Compiler, HtmlEmitData};
use crate::plugin::api::{
    log_plugin_error_with_context, Plugin, PluginError, PluginOptions, PluginResult,
    SystemVersionPlugin, PLUGIN_NAME,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Exit code for configuration problems detected before logging is up
const EXIT_CONFIG: i32 = 2;

/// Parse arguments, initialise logging and run; returns the process exit code
pub fn startup() -> i32 {
    let args = Args::parse();

    let file_config = match FileConfig::load(args.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_CONFIG;
        }
    };

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine working directory: {}", e);
            return EXIT_CONFIG;
        }
    };

    let settings = match Settings::resolve(&args, file_config, &working_dir) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_CONFIG;
        }
    };

    let use_color = settings
        .color
        .unwrap_or_else(|| std::io::stderr().is_terminal() && settings.log_file.is_none());
    if let Err(e) = init_logging(
        settings.log_level.as_deref(),
        settings.log_format,
        settings.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error: failed to initialise logging: {}", e);
        return EXIT_CONFIG;
    }

    log::debug!("Resolved settings: {:#?}", settings);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("FATAL: cannot start async runtime: {}", e);
            return 1;
        }
    };

    match runtime.block_on(run(&settings)) {
        Ok(display) => {
            println!("{}", display);
            0
        }
        Err(e) => {
            log_plugin_error_with_context(&e, "Version stamping");
            1
        }
    }
}

/// Build plugin options from resolved settings
pub fn plugin_options(settings: &Settings) -> PluginOptions {
    let manifest = settings.manifest.clone();
    let mut options = PluginOptions::new(&settings.manifest)
        .with_auto(settings.auto)
        .with_pretty(settings.pretty)
        .with_callback(move || {
            log::info!("Manifest update scheduled for {}", manifest.display());
        });
    if let Some(version) = &settings.version {
        options = options.with_version(version.clone());
    }
    options
}

/// Run one build: stamp every HTML file in place and wait for the manifest
/// update. Returns the display version.
pub async fn run(settings: &Settings) -> PluginResult<String> {
    let plugin = SystemVersionPlugin::new(plugin_options(settings));

    let api_version = get_api_version();
    if !plugin.is_compatible(api_version) {
        return Err(PluginError::VersionIncompatible {
            message: format!(
                "Plugin '{}' requires API version {}, host has {}",
                PLUGIN_NAME,
                plugin.plugin_info().api_version,
                api_version
            ),
        });
    }

    if settings.dry_run {
        let stamp = tokio::task::spawn_blocking(move || plugin.preview())
            .await
            .map_err(|e| task_error("preview", e))??;
        log::info!("Dry run: next version would be {}", stamp.next);
        return Ok(stamp.display);
    }

    // Read every asset up front so a bad path fails before the manifest is touched
    let assets = read_assets(&settings.html).await?;

    let (mut plugin, mut compiler) = activate(plugin).await?;

    let emitted = compiler.run(assets);
    for (path, asset) in settings.html.iter().zip(emitted) {
        tokio::fs::write(path, asset.html)
            .await
            .map_err(|e| host_error("write html", path, e))?;
    }

    plugin.settle().await?;

    plugin
        .last_stamp()
        .map(|stamp| stamp.display.clone())
        .ok_or_else(|| PluginError::Generic {
            message: "plugin finished without a build stamp".to_string(),
        })
}

/// Apply the plugin to a fresh compiler on the blocking pool, since
/// activation reads the manifest synchronously
async fn activate(
    mut plugin: SystemVersionPlugin,
) -> PluginResult<(SystemVersionPlugin, Compiler)> {
    tokio::task::spawn_blocking(move || {
        let mut compiler = Compiler::new();
        plugin.apply(&mut compiler).map(|()| (plugin, compiler))
    })
    .await
    .map_err(|e| task_error("activation", e))?
}

fn task_error(stage: &str, e: tokio::task::JoinError) -> PluginError {
    PluginError::AsyncError {
        message: format!("plugin {} task failed: {}", stage, e),
    }
}

async fn read_assets(paths: &[PathBuf]) -> PluginResult<Vec<HtmlEmitData>> {
    let mut assets = Vec::with_capacity(paths.len());
    for path in paths {
        let html = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| host_error("read html", path, e))?;
        assets.push(HtmlEmitData::new(path.display().to_string(), html));
    }
    Ok(assets)
}

fn host_error(operation: &str, path: &std::path::Path, e: std::io::Error) -> PluginError {
    PluginError::ExecutionError {
        plugin_name: "host".to_string(),
        operation: operation.to_string(),
        cause: format!("{}: {}", path.display(), e),
    }
}
