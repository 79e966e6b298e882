//! System Version Plugin - orchestrator module
//! Split into submodules: increment (version arithmetic), display (build token),
//! markup (meta tag insertion), manifest (persistence)

mod display;
mod increment;
mod manifest;
mod markup;

pub use display::{display_version, display_version_with};
pub use increment::{increment, Version, BASELINE_VERSION, COMPONENT_RADIX};
pub use manifest::{ManifestError, ManifestResult, ManifestStore};
pub use markup::{insert_meta_tag, meta_tag};

use crate::host::Compiler;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::settings::PluginOptions;
use crate::plugin::traits::Plugin;
use crate::plugin::types::PluginInfo;
use tokio::task::JoinHandle;

/// Name used for every hook tap the plugin registers
pub const PLUGIN_NAME: &str = "systemVersionPlugin";

/// Everything computed for one build activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStamp {
    /// Version the bump started from, if there was a usable one
    pub previous: Option<String>,
    pub next: String,
    pub display: String,
    pub meta_tag: String,
}

pub struct SystemVersionPlugin {
    options: PluginOptions,
    store: ManifestStore,
    pending_write: Option<JoinHandle<ManifestResult<()>>>,
    last_stamp: Option<BuildStamp>,
}

impl SystemVersionPlugin {
    pub fn new(options: PluginOptions) -> Self {
        let store = ManifestStore::new(options.manifest_path.clone(), options.pretty);
        Self {
            options,
            store,
            pending_write: None,
            last_stamp: None,
        }
    }

    /// Get static plugin info without creating instance
    pub fn static_plugin_info() -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME.to_string(),
            version: crate::core::version::CRATE_VERSION.to_string(),
            description: "Bumps the build version and stamps it into emitted HTML".to_string(),
            author: "SystemVersion".to_string(),
            api_version: crate::core::version::get_api_version(),
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Stamp computed by the most recent `apply`
    pub fn last_stamp(&self) -> Option<&BuildStamp> {
        self.last_stamp.as_ref()
    }

    /// True while a manifest write from `apply` has not been awaited
    pub fn has_pending_write(&self) -> bool {
        self.pending_write.is_some()
    }

    /// The version the build would start from: the override when `auto` is
    /// off and one is set, the manifest's `version` otherwise.
    pub fn current_version(&self) -> PluginResult<Option<String>> {
        if let Some(version_override) = self.options.version_override() {
            return Ok(version_override.resolve());
        }
        self.store
            .read_version_blocking()
            .map_err(|e| PluginError::ManifestUnavailable {
                path: self.store.path().display().to_string(),
                cause: e.to_string(),
            })
    }

    /// Compute the stamp for the next build without touching hooks or files
    pub fn preview(&self) -> PluginResult<BuildStamp> {
        let previous = self.current_version()?;
        let next = increment(previous.as_deref());
        let display = display_version(&next);
        let meta_tag = meta_tag(&display);
        Ok(BuildStamp {
            previous,
            next,
            display,
            meta_tag,
        })
    }

    fn schedule_manifest_update(
        &self,
        version: String,
    ) -> PluginResult<JoinHandle<ManifestResult<()>>> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            PluginError::AsyncError {
                message: format!("cannot schedule manifest update: {}", e),
            }
        })?;
        let store = self.store.clone();
        Ok(runtime.spawn(async move { store.persist_version(&version).await }))
    }
}

impl std::fmt::Debug for SystemVersionPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemVersionPlugin")
            .field("options", &self.options)
            .field("pending_write", &self.pending_write.is_some())
            .field("last_stamp", &self.last_stamp)
            .finish()
    }
}

#[async_trait::async_trait]
impl Plugin for SystemVersionPlugin {
    fn plugin_info(&self) -> PluginInfo {
        Self::static_plugin_info()
    }

    fn is_compatible(&self, system_api_version: u32) -> bool {
        system_api_version >= crate::core::version::get_api_version()
    }

    fn apply(&mut self, compiler: &mut Compiler) -> PluginResult<()> {
        let stamp = self.preview()?;
        log::info!(
            "Version {} -> {}",
            stamp.previous.as_deref().unwrap_or("<none>"),
            stamp.next
        );

        // Schedule first so a failed activation leaves the compiler untouched
        let pending_write = self.schedule_manifest_update(stamp.next.clone())?;

        let tag = stamp.meta_tag.clone();
        compiler.hooks.compilation.tap(PLUGIN_NAME, move |compilation| {
            let tag = tag.clone();
            compilation.hooks.before_emit.tap(PLUGIN_NAME, move |data| {
                if insert_meta_tag(&mut data.html, &tag) {
                    log::debug!("Stamped version into {}", data.output_name);
                } else {
                    log::debug!("No <head> in {}, left unchanged", data.output_name);
                }
            });
        });

        self.pending_write = Some(pending_write);
        self.last_stamp = Some(stamp);

        if let Some(callback) = self.options.callback.as_mut() {
            callback();
        }
        Ok(())
    }

    async fn settle(&mut self) -> PluginResult<()> {
        let Some(handle) = self.pending_write.take() else {
            return Ok(());
        };
        match handle.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(PluginError::ManifestUnavailable {
                path: self.store.path().display().to_string(),
                cause: e.to_string(),
            }),
            Err(e) => Err(PluginError::AsyncError {
                message: format!("manifest update task failed: {}", e),
            }),
        }
    }
}
