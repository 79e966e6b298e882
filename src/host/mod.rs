//! Build host surface the plugin attaches to

pub mod compiler;
pub mod hooks;

pub use compiler::{Compilation, Compiler, HtmlEmitData};
pub use hooks::SyncHook;
