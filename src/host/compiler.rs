//! Minimal build host
//!
//! A [`Compiler`] fires its compilation hook once per run. Each
//! [`Compilation`] then passes every HTML asset through its before-emit hook
//! before handing the markup back to the caller.

use crate::host::hooks::SyncHook;

/// HTML asset about to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEmitData {
    /// Name of the output asset (file name for the CLI host)
    pub output_name: String,
    /// Full HTML document, mutable by taps
    pub html: String,
}

impl HtmlEmitData {
    pub fn new(output_name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            html: html.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CompilationHooks {
    /// Fired for every HTML asset right before it is written out
    pub before_emit: SyncHook<HtmlEmitData>,
}

/// One build pass over a set of assets
#[derive(Debug, Default)]
pub struct Compilation {
    pub hooks: CompilationHooks,
}

impl Compilation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass a single asset through the before-emit hook
    pub fn emit_html(&mut self, mut asset: HtmlEmitData) -> HtmlEmitData {
        log::debug!("Emitting HTML asset '{}'", asset.output_name);
        self.hooks.before_emit.call(&mut asset);
        asset
    }
}

#[derive(Debug, Default)]
pub struct CompilerHooks {
    /// Fired once at the start of every compilation
    pub compilation: SyncHook<Compilation>,
}

#[derive(Debug, Default)]
pub struct Compiler {
    pub hooks: CompilerHooks,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one compilation over the given HTML assets and return the emitted markup
    pub fn run(&mut self, assets: Vec<HtmlEmitData>) -> Vec<HtmlEmitData> {
        let mut compilation = Compilation::new();
        self.hooks.compilation.call(&mut compilation);

        assets
            .into_iter()
            .map(|asset| compilation.emit_html(asset))
            .collect()
    }
}
