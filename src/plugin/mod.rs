//! Plugin System Module
//!
//! Plugins attach to the build host through the `Plugin` trait. The only
//! built-in plugin bumps and stamps the build version.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod error;
pub(crate) mod error_handling;
pub(crate) mod settings;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the plugin system
pub mod api;
