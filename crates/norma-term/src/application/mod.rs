//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing, logging setup, and the main UI
//! loop. It coordinates between the domain logic and the terminal backend.

pub mod cli;
pub mod ui;
