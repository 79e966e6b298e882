//! Build metadata shared by the CLI and the plugin descriptor.
//! Constants come from the file generated by the build script.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Crate version as published in Cargo.toml
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin API version parsed from the build script output.
/// Falls back to a stable default if parsing fails.
pub fn get_api_version() -> u32 {
    PLUGIN_API_VERSION.parse().unwrap_or(20250727)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Long version text used by `--version`
pub fn long_version() -> String {
    format!(
        "{} (api {}, built {}, commit {})",
        CRATE_VERSION,
        get_api_version(),
        build_time(),
        git_hash()
    )
}
