//! Command implementations for the commitgate CLI
//!
//! Each command is organized into its own module.

pub mod config;
pub mod install;
pub mod run;
pub mod status;
pub mod uninstall;
pub mod version;
