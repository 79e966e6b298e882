//! Plugin-specific error logging
//!
//! Thin wrapper so plugin code logs failures through the shared
//! `ContextualError` policy in core.

use crate::core::error_handling::log_error_with_context;
use crate::plugin::error::PluginError;

/// Log a plugin error with the operation that produced it
pub fn log_plugin_error_with_context(error: &PluginError, operation_context: &str) {
    log_error_with_context(error, operation_context);
}
