//! CLI Integration Tests
//!
//! Tests are organized by functionality:
//! - `cli::argument_parsing` - Core CLI argument parsing tests
//! - `cli::toml_config` - TOML configuration and CLI override tests
//! - `cli::run` - Whole runs of the CLI host against temporary projects

mod cli;
mod common;
