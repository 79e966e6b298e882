//! Plugin options
//!
//! Options mirror what a build configuration hands the plugin: whether to
//! source the current version from the manifest, an optional explicit
//! override, and a completion callback. The manifest location is always
//! explicit.

use std::path::{Path, PathBuf};
use std::sync::Arc;

type VersionProvider = Arc<dyn Fn() -> Option<String> + Send + Sync>;
type CompletionCallback = Box<dyn FnMut() + Send>;

/// Explicit current version, used only when `auto` is off
#[derive(Clone)]
pub enum VersionOverride {
    /// Fixed version string
    Value(String),
    /// Zero-argument provider evaluated at activation time
    Provider(VersionProvider),
}

impl VersionOverride {
    /// Produce the override value. `None` means the provider had nothing usable.
    pub fn resolve(&self) -> Option<String> {
        match self {
            VersionOverride::Value(value) => Some(value.clone()),
            VersionOverride::Provider(provider) => provider(),
        }
    }

    // An empty fixed value counts as no override at all
    fn is_set(&self) -> bool {
        match self {
            VersionOverride::Value(value) => !value.is_empty(),
            VersionOverride::Provider(_) => true,
        }
    }
}

impl std::fmt::Debug for VersionOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionOverride::Value(value) => f.debug_tuple("Value").field(value).finish(),
            VersionOverride::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

pub struct PluginOptions {
    /// Source the current version from the manifest, ignoring `version`
    pub auto: bool,
    pub version: Option<VersionOverride>,
    /// Invoked once the manifest write has been scheduled
    pub callback: Option<CompletionCallback>,
    pub manifest_path: PathBuf,
    /// Pretty-print the manifest on write instead of compact JSON
    pub pretty: bool,
}

impl PluginOptions {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            auto: true,
            version: None,
            callback: None,
            manifest_path: manifest_path.into(),
            pretty: false,
        }
    }

    pub fn with_auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(VersionOverride::Value(version.into()));
        self
    }

    pub fn with_version_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.version = Some(VersionOverride::Provider(Arc::new(provider)));
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// The override in effect, or `None` when the manifest is the source
    pub fn version_override(&self) -> Option<&VersionOverride> {
        if self.auto {
            return None;
        }
        self.version.as_ref().filter(|version| version.is_set())
    }
}

impl std::fmt::Debug for PluginOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginOptions")
            .field("auto", &self.auto)
            .field("version", &self.version)
            .field("callback", &self.callback.is_some())
            .field("manifest_path", &self.manifest_path)
            .field("pretty", &self.pretty)
            .finish()
    }
}
