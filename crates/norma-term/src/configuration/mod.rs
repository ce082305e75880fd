//! Configuration management for the walkthrough.
//!
//! Process-wide key/value configuration, loaded from defaults, an optional
//! TOML file, and command line flags, in that order of precedence.

mod config;

pub use config::*;
