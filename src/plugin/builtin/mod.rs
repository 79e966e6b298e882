//! Built-in Plugin Implementations

pub mod system_version;
