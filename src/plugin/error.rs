//! Plugin Error Handling
//!
//! Error types for plugin activation, manifest access and the asynchronous
//! manifest update.

use std::fmt;

/// Result type alias for plugin operations
pub type PluginResult<T> = std::result::Result<T, PluginError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PluginError {
    /// Plugin API version incompatible with the host
    VersionIncompatible { message: String },

    /// Manifest could not be read, parsed or updated
    ManifestUnavailable { path: String, cause: String },

    /// Invalid plugin options
    Configuration { message: String },

    /// Plugin failed while running a lifecycle step
    ExecutionError {
        plugin_name: String,
        operation: String,
        cause: String,
    },

    /// Async operation error (no runtime, task panicked or was cancelled)
    AsyncError { message: String },

    Generic { message: String },
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginError::VersionIncompatible { message } => {
                write!(f, "Version incompatible: {}", message)
            }
            PluginError::ManifestUnavailable { path, cause } => {
                write!(f, "Manifest '{}' unavailable: {}", path, cause)
            }
            PluginError::Configuration { message } => {
                write!(f, "Configuration error: {}", message)
            }
            PluginError::ExecutionError {
                plugin_name,
                operation,
                cause,
            } => {
                write!(
                    f,
                    "Plugin '{}' failed during '{}': {}",
                    plugin_name, operation, cause
                )
            }
            PluginError::AsyncError { message } => {
                write!(f, "Async operation error: {}", message)
            }
            PluginError::Generic { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for PluginError {}

impl crate::core::error_handling::ContextualError for PluginError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            PluginError::Configuration { .. } | PluginError::VersionIncompatible { .. }
        )
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            PluginError::Configuration { message } => Some(message),
            PluginError::VersionIncompatible { message } => Some(message),
            _ => None,
        }
    }
}
