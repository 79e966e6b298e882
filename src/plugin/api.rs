//! Public API for the plugin system
//!
//! External modules should import from here rather than directly from internal modules.

// Error handling
pub use crate::plugin::error::{PluginError, PluginResult};
pub use crate::plugin::error_handling::log_plugin_error_with_context;

// Plugin metadata and the plugin trait
pub use crate::plugin::traits::Plugin;
pub use crate::plugin::types::PluginInfo;

// Plugin options
pub use crate::plugin::settings::{PluginOptions, VersionOverride};

// Built-in version plugin
pub use crate::plugin::builtin::system_version::{
    display_version, display_version_with, increment, insert_meta_tag, meta_tag, BuildStamp,
    ManifestError, ManifestResult, ManifestStore, SystemVersionPlugin, Version, BASELINE_VERSION,
    COMPONENT_RADIX, PLUGIN_NAME,
};
