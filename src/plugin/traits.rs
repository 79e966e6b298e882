//! Plugin Trait
//!
//! A plugin is applied to a [`Compiler`] once per build. During `apply` it
//! taps whichever host hooks it needs and may start background work. The
//! host decides whether to wait for that work through `settle`.

use crate::host::Compiler;
use crate::plugin::error::PluginResult;
use crate::plugin::types::PluginInfo;

#[async_trait::async_trait]
pub trait Plugin: Send {
    /// Get plugin metadata
    fn plugin_info(&self) -> PluginInfo;

    /// Check if this plugin is compatible with the given host API version
    ///
    /// The default refuses, so every plugin states its own requirement.
    fn is_compatible(&self, _system_api_version: u32) -> bool {
        false
    }

    /// Attach the plugin to the host for one build activation
    fn apply(&mut self, compiler: &mut Compiler) -> PluginResult<()>;

    /// Wait for background work started by `apply`. Hosts may skip this.
    async fn settle(&mut self) -> PluginResult<()> {
        Ok(())
    }
}
